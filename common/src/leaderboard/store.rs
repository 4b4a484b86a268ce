use std::path::PathBuf;

use crate::config::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, JsonConfigSerializer,
};
use crate::{log, log_warn};
use super::board::Leaderboard;
use super::file_format::LeaderboardFile;

/// Loads and saves the leaderboard through a content provider. Reading never
/// fails outward: a missing or broken file means an empty board.
pub struct LeaderboardStore<TContentProvider, TSerializer = JsonConfigSerializer>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<LeaderboardFile>,
{
    content_provider: TContentProvider,
    serializer: TSerializer,
}

impl LeaderboardStore<FileContentConfigProvider, JsonConfigSerializer> {
    pub fn from_json_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            JsonConfigSerializer::new(),
        )
    }
}

impl<TContentProvider, TSerializer> LeaderboardStore<TContentProvider, TSerializer>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<LeaderboardFile>,
{
    pub fn new(content_provider: TContentProvider, serializer: TSerializer) -> Self {
        Self {
            content_provider,
            serializer,
        }
    }

    pub fn content_provider(&self) -> &TContentProvider {
        &self.content_provider
    }

    pub fn try_load(&self, capacity: usize) -> Result<Leaderboard, String> {
        let Some(content) = self.content_provider.get_config_content()? else {
            return Ok(Leaderboard::new(capacity));
        };
        let file = self.serializer.deserialize(&content)?;
        Ok(file.into_leaderboard(capacity))
    }

    pub fn load(&self, capacity: usize) -> Leaderboard {
        match self.try_load(capacity) {
            Ok(board) => {
                log!("Loaded leaderboard with {} entries", board.len());
                board
            }
            Err(e) => {
                log_warn!("Leaderboard unreadable, starting empty: {}", e);
                Leaderboard::new(capacity)
            }
        }
    }

    /// Overwrites the stored board with `board`.
    pub fn save(&self, board: &Leaderboard) -> Result<(), String> {
        let content = self
            .serializer
            .serialize(&LeaderboardFile::from_leaderboard(board))?;
        self.content_provider.set_config_content(&content)
    }
}

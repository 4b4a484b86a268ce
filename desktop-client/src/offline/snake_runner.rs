use std::time::Duration;

use common::config::{ConfigContentProvider, ConfigSerializer, JsonConfigSerializer};
use common::games::GameRng;
use common::games::snake::{
    GameEvent, GameInput, GameSettings, GameSnapshot, GameStatus, SnakeGameState,
};
use common::leaderboard::{LeaderboardFile, LeaderboardStore};
use common::{log, log_warn};

use super::sound::cue_for;

/// Ticks run per frame at most, so a stalled window does not fast-forward
/// the game when it wakes up.
const MAX_TICKS_PER_FRAME: u32 = 3;

/// Drives one local game: paces ticks by the current speed, forwards input
/// and persists the leaderboard whenever it changes.
pub struct SnakeRunner<TContentProvider, TSerializer = JsonConfigSerializer>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<LeaderboardFile>,
{
    state: SnakeGameState,
    rng: GameRng,
    store: LeaderboardStore<TContentProvider, TSerializer>,
    sound_effects: bool,
    accumulated: Duration,
}

impl<TContentProvider, TSerializer> SnakeRunner<TContentProvider, TSerializer>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<LeaderboardFile>,
{
    pub fn new(
        settings: GameSettings,
        store: LeaderboardStore<TContentProvider, TSerializer>,
        mut rng: GameRng,
        sound_effects: bool,
    ) -> Result<Self, String> {
        let leaderboard = store.load(settings.leaderboard_size as usize);
        let state = SnakeGameState::new(settings, leaderboard, &mut rng)?;
        log!("Snake game started with seed {}", rng.seed());
        Ok(Self {
            state,
            rng,
            store,
            sound_effects,
            accumulated: Duration::ZERO,
        })
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.state.speed())
    }

    pub fn handle_input(&mut self, input: GameInput) -> Vec<GameEvent> {
        let events = self.state.handle_input(input, &mut self.rng);
        self.process_events(&events);
        events
    }

    /// Adds `elapsed` to the frame clock and runs every tick that is due.
    pub fn update(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.status() != GameStatus::Running {
            self.accumulated = Duration::ZERO;
            return events;
        }
        self.accumulated += elapsed;

        let mut ticks = 0;
        while ticks < MAX_TICKS_PER_FRAME {
            let interval = self.tick_interval();
            if self.accumulated < interval {
                break;
            }
            self.accumulated -= interval;
            events.extend(self.state.tick(&mut self.rng));
            ticks += 1;
        }
        if ticks == MAX_TICKS_PER_FRAME {
            self.accumulated = Duration::ZERO;
        }

        self.process_events(&events);
        events
    }

    fn process_events(&self, events: &[GameEvent]) {
        if self.sound_effects {
            for cue in events.iter().filter_map(cue_for) {
                log!(
                    "Sound cue {}: {} Hz for {:.2}s",
                    cue.name,
                    cue.frequency_hz,
                    cue.duration_secs
                );
            }
        }

        if events.iter().any(GameEvent::changes_leaderboard) {
            self.save_leaderboard();
        }
    }

    fn save_leaderboard(&self) {
        match self.store.save(self.state.leaderboard()) {
            Ok(()) => log!("Leaderboard saved ({} entries)", self.state.leaderboard().len()),
            Err(e) => log_warn!("Failed to save leaderboard: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::MemoryContentProvider;

    fn runner() -> SnakeRunner<MemoryContentProvider> {
        let store = LeaderboardStore::new(MemoryContentProvider::new(), JsonConfigSerializer::new());
        SnakeRunner::new(GameSettings::new(), store, GameRng::new(17), false).unwrap()
    }

    #[test]
    fn test_no_tick_before_interval() {
        let mut runner = runner();
        runner.update(Duration::from_millis(100));
        assert_eq!(runner.state().tick_count(), 0);
        runner.update(Duration::from_millis(200));
        assert_eq!(runner.state().tick_count(), 1);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut runner = runner();
        runner.update(Duration::from_secs(10));
        assert!(runner.state().tick_count() <= u64::from(MAX_TICKS_PER_FRAME));
    }

    #[test]
    fn test_paused_game_does_not_tick() {
        let mut runner = runner();
        runner.handle_input(GameInput::TogglePause);
        runner.update(Duration::from_secs(1));
        assert_eq!(runner.state().tick_count(), 0);
        assert_eq!(runner.state().status(), GameStatus::Paused);
    }

    #[test]
    fn test_leaderboard_saved_on_initials() {
        let mut runner = runner();
        while !matches!(
            runner.state().status(),
            GameStatus::AwaitingInitials | GameStatus::GameOver
        ) {
            runner.update(Duration::from_millis(250));
        }
        assert_eq!(runner.state().status(), GameStatus::AwaitingInitials);

        for c in "ace".chars() {
            runner.handle_input(GameInput::Letter(c));
        }
        runner.handle_input(GameInput::Enter);

        let saved = runner.store.content_provider().content().unwrap();
        assert!(saved.contains("\"ACE\""));
    }
}

use common::games::snake::{Direction, GameInput, GameStatus};
use egui::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Game(GameInput),
    Quit,
}

fn direction_for(key: Key) -> Option<Direction> {
    match key {
        Key::ArrowUp | Key::W => Some(Direction::Up),
        Key::ArrowDown | Key::S => Some(Direction::Down),
        Key::ArrowLeft | Key::A => Some(Direction::Left),
        Key::ArrowRight | Key::D => Some(Direction::Right),
        _ => None,
    }
}

/// Maps a pressed key. While initials are being typed only editing keys
/// count; the letters themselves arrive as text through `map_text`.
pub fn map_key(key: Key, status: GameStatus) -> Option<AppAction> {
    if key == Key::Escape {
        return Some(AppAction::Quit);
    }

    if status == GameStatus::AwaitingInitials {
        return match key {
            Key::Enter => Some(AppAction::Game(GameInput::Enter)),
            Key::Backspace => Some(AppAction::Game(GameInput::Backspace)),
            _ => None,
        };
    }

    if let Some(direction) = direction_for(key) {
        return Some(AppAction::Game(GameInput::Turn(direction)));
    }

    match key {
        Key::P | Key::Space => Some(AppAction::Game(GameInput::TogglePause)),
        Key::R => Some(AppAction::Game(GameInput::Restart)),
        Key::L => Some(AppAction::Game(GameInput::ResetLeaderboard)),
        _ => None,
    }
}

pub fn map_text(text: &str, status: GameStatus) -> Vec<GameInput> {
    if status != GameStatus::AwaitingInitials {
        return Vec::new();
    }
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(GameInput::Letter)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_letters_turn() {
        assert_eq!(
            map_key(Key::ArrowLeft, GameStatus::Running),
            Some(AppAction::Game(GameInput::Turn(Direction::Left)))
        );
        assert_eq!(
            map_key(Key::W, GameStatus::Running),
            Some(AppAction::Game(GameInput::Turn(Direction::Up)))
        );
    }

    #[test]
    fn test_initials_mode_only_edits() {
        assert_eq!(map_key(Key::W, GameStatus::AwaitingInitials), None);
        assert_eq!(map_key(Key::R, GameStatus::AwaitingInitials), None);
        assert_eq!(
            map_key(Key::Enter, GameStatus::AwaitingInitials),
            Some(AppAction::Game(GameInput::Enter))
        );
    }

    #[test]
    fn test_escape_always_quits() {
        for status in [
            GameStatus::Running,
            GameStatus::Paused,
            GameStatus::GameOver,
            GameStatus::AwaitingInitials,
        ] {
            assert_eq!(map_key(Key::Escape, status), Some(AppAction::Quit));
        }
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        assert_eq!(map_key(Key::F5, GameStatus::Running), None);
    }

    #[test]
    fn test_text_only_counts_while_awaiting_initials() {
        assert!(map_text("abc", GameStatus::Running).is_empty());
        assert_eq!(
            map_text("a1b", GameStatus::AwaitingInitials),
            vec![GameInput::Letter('a'), GameInput::Letter('b')]
        );
    }
}

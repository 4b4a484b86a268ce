use common::games::snake::{FoodKind, GameEvent};

/// A single synthesized tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundCue {
    pub name: &'static str,
    pub frequency_hz: f32,
    pub duration_secs: f32,
}

const EAT: SoundCue = SoundCue {
    name: "eat",
    frequency_hz: 440.0,
    duration_secs: 0.1,
};
const GOLDEN: SoundCue = SoundCue {
    name: "golden",
    frequency_hz: 660.0,
    duration_secs: 0.15,
};
const ROTTEN: SoundCue = SoundCue {
    name: "rotten",
    frequency_hz: 220.0,
    duration_secs: 0.2,
};
const GAME_OVER: SoundCue = SoundCue {
    name: "game_over",
    frequency_hz: 440.0,
    duration_secs: 0.5,
};

pub fn cue_for(event: &GameEvent) -> Option<SoundCue> {
    match event {
        GameEvent::FoodEaten { kind, .. } => Some(match kind {
            FoodKind::Normal => EAT,
            FoodKind::Golden => GOLDEN,
            FoodKind::Rotten => ROTTEN,
        }),
        GameEvent::GameOver { .. } => Some(GAME_OVER),
        _ => None,
    }
}

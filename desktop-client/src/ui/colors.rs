use common::games::snake::FoodKind;
use egui::Color32;
use std::f32::consts::PI;

pub const DEFAULT_SNAKE: Color32 = Color32::from_rgb(34, 197, 94);
pub const OBSTACLE: Color32 = Color32::from_rgb(64, 64, 64);
pub const TONGUE: Color32 = Color32::from_rgb(255, 0, 0);
const NORMAL_FOOD: Color32 = Color32::from_rgb(34, 197, 94);
const GOLDEN_FOOD: Color32 = Color32::from_rgb(255, 215, 0);
const ROTTEN_FOOD: Color32 = Color32::from_rgb(139, 69, 19);

/// Parses `#rrggbb`.
pub fn parse_hex_color(hex: &str) -> Option<Color32> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Colour of the highest tier `score` reaches, or the default green.
pub fn tier_color(score: i32, tiers: &[i32], colors: &[String]) -> Color32 {
    tiers
        .iter()
        .zip(colors)
        .rev()
        .find(|(threshold, _)| score >= **threshold)
        .and_then(|(_, color)| parse_hex_color(color))
        .unwrap_or(DEFAULT_SNAKE)
}

pub fn food_color(kind: FoodKind) -> Color32 {
    match kind {
        FoodKind::Normal => NORMAL_FOOD,
        FoodKind::Golden => GOLDEN_FOOD,
        FoodKind::Rotten => ROTTEN_FOOD,
    }
}

/// Glow strength in `[0, 1]` and halo size relative to a cell.
pub fn food_glow(kind: FoodKind, phase: f32) -> (f32, f32) {
    match kind {
        FoodKind::Normal => {
            let intensity = 0.5 + 0.5 * phase.sin();
            (intensity, 0.8 + 0.4 * intensity)
        }
        FoodKind::Golden => {
            let intensity = 0.7 + 0.3 * phase.sin();
            (intensity, 0.9 + 0.6 * intensity)
        }
        FoodKind::Rotten => {
            let intensity = 0.3 + 0.4 * (phase * 3.0).sin().abs();
            (intensity, 0.6 + 0.3 * intensity)
        }
    }
}

pub fn scale(color: Color32, factor: f32) -> Color32 {
    let factor = factor.clamp(0.0, 1.0);
    Color32::from_rgb(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
    )
}

pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Base colour of the shifting background: blue to purple to pink and back.
pub fn background_base(phase: f32) -> Color32 {
    let phase = phase.rem_euclid(2.0 * PI);
    let r = 128.0 + 127.0 * phase.sin();
    let g = 64.0 + 64.0 * (phase + 2.0 * PI / 3.0).sin();
    let b = 192.0 + 63.0 * (phase + 4.0 * PI / 3.0).sin();
    Color32::from_rgb(r as u8, g as u8, b as u8)
}

/// Background colour of the horizontal band at pixel row `y`.
pub fn background_row(phase: f32, y: f32) -> Color32 {
    let intensity = 0.7 + 0.3 * (y * 0.01 + phase).sin();
    scale(background_base(phase), intensity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier_colors() -> Vec<String> {
        ["#22c55e", "#3b82f6", "#a855f7"]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#3b82f6"), Some(Color32::from_rgb(59, 130, 246)));
        assert_eq!(parse_hex_color("3b82f6"), None);
        assert_eq!(parse_hex_color("#3b82f"), None);
        assert_eq!(parse_hex_color("#zz82f6"), None);
    }

    #[test]
    fn test_tier_color_picks_highest_reached() {
        let tiers = [0, 5, 10];
        let colors = tier_colors();
        assert_eq!(tier_color(0, &tiers, &colors), Color32::from_rgb(34, 197, 94));
        assert_eq!(tier_color(7, &tiers, &colors), Color32::from_rgb(59, 130, 246));
        assert_eq!(tier_color(99, &tiers, &colors), Color32::from_rgb(168, 85, 247));
    }

    #[test]
    fn test_negative_score_falls_back_to_default() {
        assert_eq!(tier_color(-2, &[0, 5, 10], &tier_colors()), DEFAULT_SNAKE);
    }

    #[test]
    fn test_glow_stays_in_range() {
        for step in 0..100 {
            let phase = step as f32 * 0.2;
            for kind in [FoodKind::Normal, FoodKind::Golden, FoodKind::Rotten] {
                let (intensity, size) = food_glow(kind, phase);
                assert!(intensity >= 0.0 && intensity <= 1.0 + 1e-5);
                assert!(size > 0.5 && size <= 1.5 + 1e-5);
            }
        }
    }
}

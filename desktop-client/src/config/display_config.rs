use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub cell_size: u32,
    pub animated_background: bool,
    pub glow_effects: bool,
    pub snake_trail: bool,
    pub score_tier_colors: bool,
    pub score_tiers: Vec<i32>,
    pub tier_colors: Vec<String>,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size < 8 || self.cell_size > 64 {
            return Err(format!(
                "cell_size must be between 8 and 64, got {}",
                self.cell_size
            ));
        }
        if self.score_tiers.len() != self.tier_colors.len() {
            return Err(format!(
                "score_tiers ({}) and tier_colors ({}) must have the same length",
                self.score_tiers.len(),
                self.tier_colors.len()
            ));
        }
        if self.score_tiers.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err("score_tiers must be strictly ascending".to_string());
        }
        for color in &self.tier_colors {
            if crate::ui::colors::parse_hex_color(color).is_none() {
                return Err(format!("tier color {:?} is not #rrggbb", color));
            }
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size: 20,
            animated_background: true,
            glow_effects: true,
            snake_trail: true,
            score_tier_colors: true,
            score_tiers: vec![0, 5, 10, 20, 35, 50],
            tier_colors: ["#22c55e", "#3b82f6", "#a855f7", "#f59e0b", "#ef4444", "#eab308"]
                .iter()
                .map(|color| color.to_string())
                .collect(),
        }
    }
}

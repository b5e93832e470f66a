use serde::{Deserialize, Serialize};

use super::bot_controller::{BotType, FallbackPolicy};
use crate::config::Validate;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BotSettings {
    pub bot_type: BotType,
    pub fallback_policy: FallbackPolicy,
    /// Probability that a `Mixed` bot plays randomly instead of using the
    /// heuristic.
    pub mixed_random_chance: f64,
    pub seed: Option<u64>,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            bot_type: BotType::Minimax,
            fallback_policy: FallbackPolicy::FirstAvailable,
            mixed_random_chance: 0.5,
            seed: None,
        }
    }
}

impl Validate for BotSettings {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.mixed_random_chance) {
            return Err(format!(
                "Mixed random chance must be between 0.0 and 1.0, got {}",
                self.mixed_random_chance
            ));
        }
        Ok(())
    }
}

//! Battle configuration with documented constants

use serde::{Deserialize, Serialize};

/// Default turn limit before a battle times out
///
/// At typical weapon damage (10-15 per landed strike) and 45 HP fighters,
/// battles conclude in well under 20 turns. 50 leaves generous headroom
/// while still guaranteeing termination for two heavily parrying scripts.
pub const DEFAULT_MAX_TURNS: u32 = 50;

/// Default RNG seed for battles constructed without an explicit seed
pub const DEFAULT_BATTLE_SEED: u64 = 12345;

/// Cosmetic pause between turns when `inter_turn_delay` is enabled (ms)
pub const INTER_TURN_DELAY_MS: u64 = 1000;

/// Configuration for a single battle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Maximum number of turns before the battle ends in a timeout.
    ///
    /// A limit of 0 is valid: the battle concludes immediately as a
    /// timeout with an empty history.
    pub max_turns: u32,

    /// Sleep between turns for watchable pacing. Purely cosmetic;
    /// has no effect on resolution or outcome ordering.
    pub inter_turn_delay: bool,

    /// Seed for the battle's critical-hit RNG. Same seed + same scripts
    /// reproduces the battle exactly.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            inter_turn_delay: false,
            seed: DEFAULT_BATTLE_SEED,
        }
    }
}

impl GameConfig {
    /// Config with a specific seed and defaults for everything else
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.max_turns, 50);
        assert!(!config.inter_turn_delay);
    }

    #[test]
    fn test_with_seed() {
        let config = GameConfig::with_seed(7);
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_turns, DEFAULT_MAX_TURNS);
    }
}

//! Simulator configuration and loaders.
use std::env;

use combat_ai::{SelectorConfig, StrategyKind};
use combat_core::CombatConfig;

use crate::error::SimError;

/// Everything needed to set up a duel.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Upper bound on individual actor turns before the fight is a draw.
    pub max_turns: u32,
    pub player_name: String,
    pub monster_name: String,
    pub player_strategy: StrategyKind,
    pub monster_strategy: StrategyKind,
    pub selector: SelectorConfig,
    pub combat: CombatConfig,
}

impl SimConfig {
    pub const DEFAULT_MAX_TURNS: u32 = 100;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SIM_MAX_TURNS` - Turn limit before a draw (default: 100)
    /// - `SIM_PLAYER_NAME` - Player display name (default: "Hero")
    /// - `SIM_MONSTER_NAME` - Monster display name (default: "Slime")
    /// - `SIM_PLAYER_STRATEGY` - tiered | aggressive | defensive | balanced (default: tiered)
    /// - `SIM_MONSTER_STRATEGY` - tiered | aggressive | defensive | balanced (default: tiered)
    /// - `SIM_LOW_HP` - Heal threshold for the tiered strategy (default: 0.30)
    /// - `SIM_HIGH_HP` - Powerful attack threshold for the tiered strategy (default: 0.70)
    ///
    /// Unparseable values are ignored. Call [`SimConfig::validate`] afterwards.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(turns) = read_env::<u32>("SIM_MAX_TURNS") {
            config.max_turns = turns;
        }

        if let Ok(name) = env::var("SIM_PLAYER_NAME") {
            config.player_name = name;
        }
        if let Ok(name) = env::var("SIM_MONSTER_NAME") {
            config.monster_name = name;
        }

        if let Some(kind) = read_env::<StrategyKind>("SIM_PLAYER_STRATEGY") {
            config.player_strategy = kind;
        }
        if let Some(kind) = read_env::<StrategyKind>("SIM_MONSTER_STRATEGY") {
            config.monster_strategy = kind;
        }

        // Thresholds
        if let Some(low) = read_env::<f32>("SIM_LOW_HP") {
            config.selector.low_hp_threshold = low;
        }
        if let Some(high) = read_env::<f32>("SIM_HIGH_HP") {
            config.selector.high_hp_threshold = high;
        }

        config
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.max_turns == 0 {
            return Err(SimError::ZeroMaxTurns);
        }
        self.selector.validate()?;
        self.combat.validate()?;
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_turns: Self::DEFAULT_MAX_TURNS,
            player_name: "Hero".to_string(),
            monster_name: "Slime".to_string(),
            player_strategy: StrategyKind::default(),
            monster_strategy: StrategyKind::default(),
            selector: SelectorConfig::default(),
            combat: CombatConfig::default(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimConfig::default();
        assert_eq!(config.max_turns, 100);
        assert_eq!(config.player_strategy, StrategyKind::Tiered);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_turns_is_rejected() {
        let config = SimConfig {
            max_turns: 0,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimError::ZeroMaxTurns)));
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let config = SimConfig {
            selector: SelectorConfig::with_thresholds(0.8, 0.2),
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimError::Config(_))));
    }
}

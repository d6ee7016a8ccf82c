use crate::error::ConfigError;

/// Combat balance constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatConfig {
    /// Floor applied to every damaging hit.
    ///
    /// Resolution never uses a value below [`CombatConfig::MIN_DAMAGE`], even
    /// when this field holds one and `validate` was skipped.
    pub min_damage: i32,

    /// Whether a heal may raise hp above `stats.hp`.
    pub allow_overheal: bool,
}

impl CombatConfig {
    // ===== rule constants =====
    /// Smallest damage any attack can deal.
    pub const MIN_DAMAGE: i32 = 1;

    // ===== ability presets =====
    pub const BASIC_ATTACK_POWER: i32 = 5;
    pub const POWERFUL_ATTACK_POWER: i32 = 12;
    pub const POWERFUL_ATTACK_COOLDOWN: u32 = 3;
    pub const HEAL_POWER: i32 = 10;
    pub const HEAL_COOLDOWN: u32 = 4;
    pub const QUICK_STRIKE_POWER: i32 = 3;
    pub const QUICK_STRIKE_COOLDOWN: u32 = 1;

    // ===== character presets =====
    pub const PLAYER_HP: i32 = 30;
    pub const PLAYER_ATTACK: i32 = 10;
    pub const PLAYER_DEFENSE: i32 = 2;
    pub const MONSTER_HP: i32 = 20;
    pub const MONSTER_ATTACK: i32 = 6;
    pub const MONSTER_DEFENSE: i32 = 1;

    pub fn new() -> Self {
        Self {
            min_damage: Self::MIN_DAMAGE,
            allow_overheal: false,
        }
    }

    #[must_use]
    pub fn with_min_damage(mut self, min_damage: i32) -> Self {
        self.min_damage = min_damage;
        self
    }

    #[must_use]
    pub fn with_overheal(mut self, allow_overheal: bool) -> Self {
        self.allow_overheal = allow_overheal;
        self
    }

    /// The damage floor actually applied during resolution.
    pub fn effective_min_damage(&self) -> i32 {
        self.min_damage.max(Self::MIN_DAMAGE)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_damage < Self::MIN_DAMAGE {
            return Err(ConfigError::MinDamageTooLow {
                value: self.min_damage,
                minimum: Self::MIN_DAMAGE,
            });
        }
        Ok(())
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(CombatConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_min_damage_is_rejected() {
        let config = CombatConfig::new().with_min_damage(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::MinDamageTooLow {
                value: 0,
                minimum: 1
            })
        );
        assert_eq!(config.effective_min_damage(), 1);
    }

    #[test]
    fn raised_floor_is_kept() {
        let config = CombatConfig::new().with_min_damage(3);
        assert!(config.validate().is_ok());
        assert_eq!(config.effective_min_damage(), 3);
    }
}

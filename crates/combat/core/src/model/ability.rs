use alloc::string::String;

use crate::config::CombatConfig;

/// What resolving an ability does.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilityEffect {
    /// Subtracts damage from the opponent's hp.
    #[default]
    Damage,
    /// Restores the user's own hp.
    Heal,
}

/// Role an equipped ability plays for the action selector.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilityKind {
    BasicAttack,
    PowerfulAttack,
    Heal,
}

impl AbilityKind {
    /// Effect an ability of this kind normally carries.
    pub const fn effect(self) -> AbilityEffect {
        match self {
            Self::BasicAttack | Self::PowerfulAttack => AbilityEffect::Damage,
            Self::Heal => AbilityEffect::Heal,
        }
    }
}

/// A named action with a power value.
///
/// `power` may be zero or negative. Damage resolution still deals at least
/// [`CombatConfig::MIN_DAMAGE`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub name: String,
    pub power: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: AbilityEffect,
}

impl Ability {
    /// A damaging ability.
    pub fn new(name: impl Into<String>, power: i32) -> Self {
        Self {
            name: name.into(),
            power,
            effect: AbilityEffect::Damage,
        }
    }

    /// A self-targeted healing ability.
    pub fn healing(name: impl Into<String>, power: i32) -> Self {
        Self {
            name: name.into(),
            power,
            effect: AbilityEffect::Heal,
        }
    }

    /// Canonical fallback ability. Always available, needs no slot.
    pub fn basic_attack() -> Self {
        Self::new("Basic Attack", CombatConfig::BASIC_ATTACK_POWER)
    }

    pub fn powerful_attack() -> Self {
        Self::new("Powerful Attack", CombatConfig::POWERFUL_ATTACK_POWER)
    }

    pub fn heal() -> Self {
        Self::healing("Heal", CombatConfig::HEAL_POWER)
    }

    pub fn quick_strike() -> Self {
        Self::new("Quick Strike", CombatConfig::QUICK_STRIKE_POWER)
    }

    #[inline]
    pub fn is_heal(&self) -> bool {
        self.effect == AbilityEffect::Heal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn presets_match_balance_table() {
        assert_eq!(Ability::basic_attack().power, 5);
        assert_eq!(Ability::powerful_attack().power, 12);
        assert_eq!(Ability::quick_strike().power, 3);

        let heal = Ability::heal();
        assert_eq!(heal.power, 10);
        assert!(heal.is_heal());
        assert!(!Ability::basic_attack().is_heal());
    }

    #[test]
    fn kinds_map_to_effects() {
        assert_eq!(AbilityKind::Heal.effect(), AbilityEffect::Heal);
        assert_eq!(AbilityKind::PowerfulAttack.effect(), AbilityEffect::Damage);
    }

    #[test]
    fn kind_parses_from_snake_case() {
        assert_eq!(
            AbilityKind::from_str("powerful_attack"),
            Ok(AbilityKind::PowerfulAttack)
        );
        assert_eq!(AbilityKind::BasicAttack.as_ref(), "basic_attack");
    }
}

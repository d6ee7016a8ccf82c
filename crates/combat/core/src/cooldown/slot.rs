use crate::config::CombatConfig;
use crate::model::{Ability, AbilityKind};

/// One equipped ability with its own cooldown clock.
///
/// `cooldown_current` always lies in `[0, cooldown_max]`. Decoded slots are
/// clamped the same way [`AbilitySlot::with_cooldown`] clamps.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawSlot"))]
pub struct AbilitySlot {
    pub ability: Ability,
    pub kind: AbilityKind,
    cooldown_max: u32,
    cooldown_current: u32,
}

/// Wire shape of [`AbilitySlot`] before the cooldown is clamped.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSlot {
    ability: Ability,
    kind: AbilityKind,
    cooldown_max: u32,
    cooldown_current: u32,
}

#[cfg(feature = "serde")]
impl From<RawSlot> for AbilitySlot {
    fn from(raw: RawSlot) -> Self {
        Self::new(raw.ability, raw.kind, raw.cooldown_max).with_cooldown(raw.cooldown_current)
    }
}

impl AbilitySlot {
    /// Creates a slot that is ready to use.
    pub fn new(ability: Ability, kind: AbilityKind, cooldown_max: u32) -> Self {
        Self {
            ability,
            kind,
            cooldown_max,
            cooldown_current: 0,
        }
    }

    /// Basic Attack, no cooldown.
    pub fn basic_attack() -> Self {
        Self::new(Ability::basic_attack(), AbilityKind::BasicAttack, 0)
    }

    /// Powerful Attack, 3 turn cooldown.
    pub fn powerful_attack() -> Self {
        Self::new(
            Ability::powerful_attack(),
            AbilityKind::PowerfulAttack,
            CombatConfig::POWERFUL_ATTACK_COOLDOWN,
        )
    }

    /// Heal, 4 turn cooldown.
    pub fn heal() -> Self {
        Self::new(
            Ability::heal(),
            AbilityKind::Heal,
            CombatConfig::HEAL_COOLDOWN,
        )
    }

    /// Quick Strike, a weaker basic attack on a 1 turn cooldown.
    pub fn quick_strike() -> Self {
        Self::new(
            Ability::quick_strike(),
            AbilityKind::BasicAttack,
            CombatConfig::QUICK_STRIKE_COOLDOWN,
        )
    }

    /// Returns the slot with its remaining cooldown set, clamped to `cooldown_max`.
    #[must_use]
    pub fn with_cooldown(mut self, remaining: u32) -> Self {
        self.cooldown_current = remaining.min(self.cooldown_max);
        self
    }

    #[inline]
    pub fn cooldown_max(&self) -> u32 {
        self.cooldown_max
    }

    #[inline]
    pub fn cooldown_current(&self) -> u32 {
        self.cooldown_current
    }

    #[inline]
    pub fn is_usable(&self) -> bool {
        self.cooldown_current == 0
    }

    /// One turn elapses: the cooldown drops by one, stopping at zero.
    #[must_use]
    pub fn advance_turn(mut self) -> Self {
        self.cooldown_current = self
            .cooldown_current
            .min(self.cooldown_max)
            .saturating_sub(1);
        self
    }

    /// The slot's ability was used: restart the cooldown.
    #[must_use]
    pub fn activate(mut self) -> Self {
        self.cooldown_current = self.cooldown_max;
        self
    }

    /// Fraction of the cooldown still remaining, in `[0, 1]`.
    ///
    /// Zero for slots without a cooldown.
    pub fn cooldown_progress(&self) -> f32 {
        if self.cooldown_max == 0 {
            return 0.0;
        }
        (self.cooldown_current as f32 / self.cooldown_max as f32).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slot_is_usable() {
        let slot = AbilitySlot::powerful_attack();
        assert!(slot.is_usable());
        assert_eq!(slot.cooldown_current(), 0);
        assert_eq!(slot.cooldown_max(), 3);
    }

    #[test]
    fn activate_starts_full_cooldown() {
        let slot = AbilitySlot::heal().activate();
        assert!(!slot.is_usable());
        assert_eq!(slot.cooldown_current(), 4);
        assert_eq!(slot.cooldown_progress(), 1.0);
    }

    #[test]
    fn advance_counts_down_to_zero() {
        let mut slot = AbilitySlot::powerful_attack().activate();
        for expected in [2, 1, 0, 0] {
            slot = slot.advance_turn();
            assert_eq!(slot.cooldown_current(), expected);
        }
        assert!(slot.is_usable());
    }

    #[test]
    fn advance_on_ready_slot_is_noop() {
        let slot = AbilitySlot::basic_attack();
        assert_eq!(slot.clone().advance_turn(), slot);
    }

    #[test]
    fn zero_cooldown_slot_is_always_usable() {
        let slot = AbilitySlot::basic_attack().activate();
        assert!(slot.is_usable());
        assert_eq!(slot.cooldown_progress(), 0.0);
    }

    #[test]
    fn with_cooldown_is_clamped() {
        let slot = AbilitySlot::powerful_attack().with_cooldown(9);
        assert_eq!(slot.cooldown_current(), 3);
    }

    #[test]
    fn progress_is_fractional() {
        let slot = AbilitySlot::heal().with_cooldown(1);
        assert!((slot.cooldown_progress() - 0.25).abs() < f32::EPSILON);
    }
}

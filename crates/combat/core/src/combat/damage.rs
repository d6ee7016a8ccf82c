//! Damage formula.

use crate::config::CombatConfig;

/// Calculate the damage of one hit.
///
/// # Formula
///
/// ```text
/// raw    = attack + power
/// damage = max(minimum, raw - defense)
/// ```
///
/// `minimum` is raised to [`CombatConfig::MIN_DAMAGE`] if lower, so the
/// result is at least 1 for every input, including negative power and
/// defense far above attack.
pub fn calculate_damage(attack: i32, power: i32, defense: i32, minimum: i32) -> i32 {
    let raw = attack.saturating_add(power);
    raw.saturating_sub(defense)
        .max(minimum.max(CombatConfig::MIN_DAMAGE))
}

/// Subtract damage from current hp.
///
/// There is no floor at zero; overkill is preserved.
#[inline]
pub fn apply_damage(current_hp: i32, damage: i32) -> i32 {
    current_hp.saturating_sub(damage)
}

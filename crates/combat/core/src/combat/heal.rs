//! Self-heal resolution.

use crate::config::CombatConfig;
use crate::model::{Ability, Character, HealEvent};

/// Resolve a heal cast by `caster` on itself.
///
/// ```text
/// restored = max(0, power)
/// hp_after = min(hp + restored, max_hp)   unless overheal is allowed
/// ```
///
/// A caster already above maximum hp keeps its current value. The event's
/// `amount` is the hp actually gained.
pub fn resolve_heal(caster: &Character, ability: &Ability, config: &CombatConfig) -> HealEvent {
    let restored = ability.power.max(0);
    let uncapped = caster.hp.saturating_add(restored);

    let hp_after = if config.allow_overheal {
        uncapped
    } else {
        uncapped.min(caster.max_hp()).max(caster.hp)
    };

    HealEvent {
        caster_name: caster.name.clone(),
        amount: hp_after.saturating_sub(caster.hp),
        hp_after,
        ability_used: Some(ability.name.clone()),
    }
}

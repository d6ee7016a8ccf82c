//! Attack and action resolution.

use crate::config::CombatConfig;
use crate::model::{Ability, AbilityEffect, Character, CombatEvent, TurnEvent};

use super::damage::{apply_damage, calculate_damage};
use super::heal::resolve_heal;

/// Resolve one attack with the default configuration.
///
/// This is the damage-style resolver: it ignores `ability.effect` and always
/// produces a [`CombatEvent`] against `defender`. Use [`resolve_action`] to
/// honour heals.
///
/// # Guarantees
///
/// - `damage >= 1`
/// - `defender_hp_after == defender.hp - damage` (saturating)
/// - neither character is modified
pub fn resolve_attack(attacker: &Character, defender: &Character, ability: &Ability) -> CombatEvent {
    resolve_attack_with(&CombatConfig::default(), attacker, defender, ability)
}

/// Resolve one attack with an explicit configuration.
pub fn resolve_attack_with(
    config: &CombatConfig,
    attacker: &Character,
    defender: &Character,
    ability: &Ability,
) -> CombatEvent {
    let damage = calculate_damage(
        attacker.stats.attack,
        ability.power,
        defender.stats.defense,
        config.effective_min_damage(),
    );

    CombatEvent {
        attacker_name: attacker.name.clone(),
        defender_name: defender.name.clone(),
        damage,
        defender_hp_after: apply_damage(defender.hp, damage),
        ability_used: Some(ability.name.clone()),
    }
}

/// Resolve whatever `ability` does when `actor` uses it against `opponent`.
///
/// - [`AbilityEffect::Damage`] hits `opponent`
/// - [`AbilityEffect::Heal`] restores `actor`
pub fn resolve_action(
    actor: &Character,
    opponent: &Character,
    ability: &Ability,
    config: &CombatConfig,
) -> TurnEvent {
    match ability.effect {
        AbilityEffect::Damage => {
            TurnEvent::Attack(resolve_attack_with(config, actor, opponent, ability))
        }
        AbilityEffect::Heal => TurnEvent::Heal(resolve_heal(actor, ability, config)),
    }
}

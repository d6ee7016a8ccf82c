//! Entry points for choosing an ability.

use std::sync::LazyLock;

use combat_core::{Ability, AbilitySlot, Character, ConfigError};

use crate::config::SelectorConfig;
use crate::context::{AiContext, Pick};
use crate::strategy::{Strategy, StrategyKind};

/// The ability to use this turn and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    pub ability: Ability,
    /// Position of the chosen slot in the slice given to the selector, or
    /// `None` when the canonical default was used.
    pub slot: Option<usize>,
}

impl Choice {
    pub fn is_default(&self) -> bool {
        self.slot.is_none()
    }
}

/// Picks one ability per call according to a [`Strategy`].
#[derive(Debug)]
pub struct ActionSelector {
    kind: Option<StrategyKind>,
    strategy: Strategy,
}

impl ActionSelector {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            kind: None,
            strategy,
        }
    }

    /// Tiered strategy with default thresholds.
    pub fn tiered() -> Self {
        Self {
            kind: Some(StrategyKind::Tiered),
            strategy: Strategy::from_kind(StrategyKind::Tiered, &SelectorConfig::default()),
        }
    }

    /// Builds a built-in strategy after validating `config`.
    pub fn from_kind(kind: StrategyKind, config: &SelectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            kind: Some(kind),
            strategy: Strategy::from_kind(kind, config),
        })
    }

    pub fn kind(&self) -> Option<StrategyKind> {
        self.kind
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Chooses the ability `actor` uses against `opponent`.
    ///
    /// Slots on cooldown are ignored. Among usable slots of the preferred kind
    /// the earliest wins. When nothing matches, the canonical Basic Attack is
    /// returned with `slot: None`.
    pub fn choose(&self, actor: &Character, opponent: &Character, slots: &[AbilitySlot]) -> Choice {
        let mut ctx = AiContext::new(actor, opponent, slots);

        tracing::debug!(
            "ActionSelector: actor={}, hp={}/{} ({:.2}), usable={}/{}",
            actor.name,
            actor.hp,
            actor.stats.hp,
            ctx.hp_ratio(),
            ctx.usable_count(),
            slots.len()
        );

        match self.strategy.evaluate(&mut ctx) {
            Pick::Slot(index) => match slots.get(index) {
                Some(slot) => {
                    tracing::debug!("  → {} ({}) from slot {}", slot.ability.name, slot.kind, index);
                    Choice {
                        ability: slot.ability.clone(),
                        slot: Some(index),
                    }
                }
                None => {
                    tracing::warn!("  picked slot {} out of range; using default", index);
                    default_choice()
                }
            },
            Pick::Default => {
                tracing::debug!("  → no preferred slot usable; default Basic Attack");
                default_choice()
            }
        }
    }
}

impl Default for ActionSelector {
    fn default() -> Self {
        Self::tiered()
    }
}

fn default_choice() -> Choice {
    Choice {
        ability: Ability::basic_attack(),
        slot: None,
    }
}

static TIERED: LazyLock<ActionSelector> = LazyLock::new(ActionSelector::tiered);

/// Choose the ability an autonomous combatant uses this turn.
///
/// - hp ratio below 0.30: Heal if usable
/// - hp ratio above 0.70: Powerful Attack if usable
/// - otherwise, or when the preferred slot is cooling down: Basic Attack
/// - nothing usable: the canonical Basic Attack (power 5)
pub fn choose_action(
    self_character: &Character,
    opponent_character: &Character,
    usable_ability_slots: &[AbilitySlot],
) -> Ability {
    TIERED
        .choose(self_character, opponent_character, usable_ability_slots)
        .ability
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::AbilitySet;

    #[test]
    fn choice_reports_slot_position() {
        let set = AbilitySet::monster_default();
        let choice = ActionSelector::tiered().choose(
            &Character::new_monster("Slime"),
            &Character::new_player("Hero"),
            set.slots(),
        );

        assert_eq!(choice.slot, Some(1));
        assert_eq!(choice.ability, Ability::powerful_attack());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SelectorConfig::with_thresholds(0.9, 0.1);
        assert!(ActionSelector::from_kind(StrategyKind::Tiered, &config).is_err());
    }

    #[test]
    fn default_choice_has_no_slot() {
        let choice = ActionSelector::default().choose(
            &Character::new_monster("Slime"),
            &Character::new_player("Hero"),
            &[],
        );
        assert!(choice.is_default());
        assert_eq!(choice.ability.power, 5);
    }
}

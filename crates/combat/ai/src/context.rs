//! Blackboard for one decision.
//!
//! The context owns a snapshot of everything the tree may read, so trees can
//! be built once and reused across calls without borrowing the combatants.

use combat_core::{AbilityKind, AbilitySlot, Character};

/// What the tree decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick {
    /// Use the slot at this position in the slice passed to the selector.
    Slot(usize),
    /// Use the canonical Basic Attack, which needs no slot.
    Default,
}

pub struct AiContext {
    hp_ratio: f32,
    opponent_hp_ratio: f32,
    /// Usable slots as `(position, kind)`, in set order.
    usable: Vec<(usize, AbilityKind)>,
    pick: Option<Pick>,
}

impl AiContext {
    /// Snapshots the actor and the slots that are currently off cooldown.
    ///
    /// Slots still cooling down are dropped here, so callers may pass either
    /// the full set or an already-filtered list.
    pub fn new(actor: &Character, opponent: &Character, slots: &[AbilitySlot]) -> Self {
        Self {
            hp_ratio: actor.hp_ratio(),
            opponent_hp_ratio: opponent.hp_ratio(),
            usable: slots
                .iter()
                .enumerate()
                .filter(|(_, slot)| slot.is_usable())
                .map(|(index, slot)| (index, slot.kind))
                .collect(),
            pick: None,
        }
    }

    #[inline]
    pub fn hp_ratio(&self) -> f32 {
        self.hp_ratio
    }

    #[inline]
    pub fn opponent_hp_ratio(&self) -> f32 {
        self.opponent_hp_ratio
    }

    pub fn usable_count(&self) -> usize {
        self.usable.len()
    }

    /// Position of the first usable slot of `kind`.
    pub fn first_usable(&self, kind: AbilityKind) -> Option<usize> {
        self.usable
            .iter()
            .find(|(_, slot_kind)| *slot_kind == kind)
            .map(|(index, _)| *index)
    }

    pub fn set_pick(&mut self, pick: Pick) {
        self.pick = Some(pick);
    }

    pub fn pick(&self) -> Option<Pick> {
        self.pick
    }
}

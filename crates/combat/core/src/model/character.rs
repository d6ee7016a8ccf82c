use alloc::string::String;

use super::{Stats, TurnEvent};

/// A named combatant.
///
/// `hp` is current health and has no floor: overkill leaves it negative.
/// Anything at or below zero counts as defeated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub hp: i32,
    pub stats: Stats,
}

impl Character {
    /// Creates a combatant at full health.
    pub fn new(name: impl Into<String>, stats: Stats) -> Self {
        Self {
            name: name.into(),
            hp: stats.hp,
            stats,
        }
    }

    /// hp 30, attack 10, defense 2.
    pub fn new_player(name: &str) -> Self {
        Self::new(name, Stats::PLAYER)
    }

    /// hp 20, attack 6, defense 1.
    pub fn new_monster(name: &str) -> Self {
        Self::new(name, Stats::MONSTER)
    }

    #[inline]
    pub fn max_hp(&self) -> i32 {
        self.stats.hp
    }

    /// Current hp divided by maximum hp.
    ///
    /// A non-positive maximum yields `0.0`, placing the combatant in the
    /// lowest health band rather than producing NaN or infinity.
    pub fn hp_ratio(&self) -> f32 {
        if self.stats.hp <= 0 {
            return 0.0;
        }
        self.hp as f32 / self.stats.hp as f32
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Returns a copy with current hp replaced. `stats` is untouched.
    #[must_use]
    pub fn with_hp(&self, hp: i32) -> Self {
        Self {
            hp,
            ..self.clone()
        }
    }

    /// Applies a resolved event to this combatant.
    ///
    /// The event's target is matched by name. Events aimed at someone else
    /// leave the combatant unchanged.
    #[must_use]
    pub fn apply(&self, event: &TurnEvent) -> Self {
        match event {
            TurnEvent::Attack(hit) if hit.defender_name == self.name => {
                self.with_hp(hit.defender_hp_after)
            }
            TurnEvent::Heal(heal) if heal.caster_name == self.name => self.with_hp(heal.hp_after),
            TurnEvent::Attack(_) | TurnEvent::Heal(_) => self.clone(),
        }
    }
}

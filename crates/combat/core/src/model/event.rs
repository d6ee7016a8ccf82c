use alloc::string::String;

/// Outcome of one damaging attack.
///
/// Names are copied out of the combatants so the event outlives them.
/// `damage` is always at least 1; `defender_hp_after` may be negative.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatEvent {
    pub attacker_name: String,
    pub defender_name: String,
    pub damage: i32,
    pub defender_hp_after: i32,
    pub ability_used: Option<String>,
}

/// Outcome of one heal.
///
/// `amount` is the hp actually restored after capping, never negative.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealEvent {
    pub caster_name: String,
    pub amount: i32,
    pub hp_after: i32,
    pub ability_used: Option<String>,
}

/// Any event a single action can produce.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEvent {
    Attack(CombatEvent),
    Heal(HealEvent),
}

impl TurnEvent {
    /// Name of the combatant whose hp this event changes.
    pub fn target_name(&self) -> &str {
        match self {
            Self::Attack(hit) => &hit.defender_name,
            Self::Heal(heal) => &heal.caster_name,
        }
    }

    /// Name of the combatant who acted.
    pub fn actor_name(&self) -> &str {
        match self {
            Self::Attack(hit) => &hit.attacker_name,
            Self::Heal(heal) => &heal.caster_name,
        }
    }

    pub fn ability_used(&self) -> Option<&str> {
        match self {
            Self::Attack(hit) => hit.ability_used.as_deref(),
            Self::Heal(heal) => heal.ability_used.as_deref(),
        }
    }

    /// Target hp once the event is applied.
    pub fn target_hp_after(&self) -> i32 {
        match self {
            Self::Attack(hit) => hit.defender_hp_after,
            Self::Heal(heal) => heal.hp_after,
        }
    }
}

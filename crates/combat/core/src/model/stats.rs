use crate::config::CombatConfig;

/// Baseline combat statistics.
///
/// `hp` is the maximum health used as the denominator for hp ratios. It is
/// never lowered by damage; the current value lives on
/// [`Character`](crate::Character).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
}

impl Stats {
    pub const PLAYER: Self = Self::new(
        CombatConfig::PLAYER_HP,
        CombatConfig::PLAYER_ATTACK,
        CombatConfig::PLAYER_DEFENSE,
    );

    pub const MONSTER: Self = Self::new(
        CombatConfig::MONSTER_HP,
        CombatConfig::MONSTER_ATTACK,
        CombatConfig::MONSTER_DEFENSE,
    );

    pub const fn new(hp: i32, attack: i32, defense: i32) -> Self {
        Self {
            hp,
            attack,
            defense,
        }
    }
}

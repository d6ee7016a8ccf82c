//! One-on-one encounters driven entirely by the action selector.
//!
//! Each actor turn follows the same three steps:
//!
//! 1. Advance every cooldown slot of the actor by one turn
//! 2. Ask the actor's selector for an ability
//! 3. Activate the chosen slot and resolve the ability
//!
//! The player always acts first. The fight ends as soon as one side is
//! defeated, or as a draw once `max_turns` actor turns have been played.

use std::fmt;
use std::mem;

use combat_ai::ActionSelector;
use combat_core::{Ability, AbilitySet, Character, CombatConfig, TurnEvent, resolve_action};
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::error::SimError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Monster,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Monster,
            Side::Monster => Side::Player,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Victory(Side),
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Victory(side) => Some(side),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Victory(side) => write!(f, "{side} wins"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

/// A character together with its ability slots and decision policy.
#[derive(Debug)]
pub struct Combatant {
    pub character: Character,
    pub abilities: AbilitySet,
    selector: ActionSelector,
}

impl Combatant {
    pub fn new(character: Character, abilities: AbilitySet, selector: ActionSelector) -> Self {
        Self {
            character,
            abilities,
            selector,
        }
    }

    /// Player preset stats with the player ability set.
    pub fn player(name: &str, selector: ActionSelector) -> Self {
        Self::new(
            Character::new_player(name),
            AbilitySet::player_default(),
            selector,
        )
    }

    /// Monster preset stats with the monster ability set.
    pub fn monster(name: &str, selector: ActionSelector) -> Self {
        Self::new(
            Character::new_monster(name),
            AbilitySet::monster_default(),
            selector,
        )
    }

    pub fn selector(&self) -> &ActionSelector {
        &self.selector
    }

    /// Name of the built-in strategy driving this combatant, or `custom`.
    pub fn strategy_name(&self) -> String {
        match self.selector().kind() {
            Some(kind) => kind.to_string(),
            None => "custom".to_string(),
        }
    }
}

/// What happened during a single actor turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based actor turn number.
    pub turn: u32,
    pub side: Side,
    pub ability: Ability,
    /// Index of the activated slot, `None` when the default ability was used.
    pub slot: Option<usize>,
    pub event: TurnEvent,
}

impl fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actor = self.event.actor_name();
        let ability = self.event.ability_used().unwrap_or(self.ability.name.as_str());
        let hp_after = self.event.target_hp_after();

        match &self.event {
            TurnEvent::Attack(hit) => write!(
                f,
                "[{:>3}] {actor} uses {ability} on {} for {} damage ({hp_after} hp left)",
                self.turn,
                self.event.target_name(),
                hit.damage,
            ),
            TurnEvent::Heal(heal) => write!(
                f,
                "[{:>3}] {actor} uses {ability} and restores {} hp ({hp_after} hp)",
                self.turn, heal.amount
            ),
        }
    }
}

/// Final state of a finished encounter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterReport {
    pub outcome: Outcome,
    pub turns: u32,
    pub player: Character,
    pub monster: Character,
    pub log: Vec<TurnRecord>,
}

#[derive(Debug)]
pub struct Encounter {
    player: Combatant,
    monster: Combatant,
    config: CombatConfig,
    max_turns: u32,
    turn: u32,
    next: Side,
    log: Vec<TurnRecord>,
}

impl Encounter {
    pub fn new(player: Combatant, monster: Combatant, max_turns: u32) -> Self {
        Self {
            player,
            monster,
            config: CombatConfig::default(),
            max_turns,
            turn: 0,
            next: Side::Player,
            log: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: CombatConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the preset duel described by `config`.
    pub fn from_config(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let player = Combatant::player(
            &config.player_name,
            ActionSelector::from_kind(config.player_strategy, &config.selector)?,
        );
        let monster = Combatant::monster(
            &config.monster_name,
            ActionSelector::from_kind(config.monster_strategy, &config.selector)?,
        );

        Ok(Self::new(player, monster, config.max_turns).with_config(config.combat.clone()))
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Monster => &self.monster,
        }
    }

    /// Number of actor turns played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn log(&self) -> &[TurnRecord] {
        &self.log
    }

    /// `Some` once the encounter is over.
    ///
    /// A defeated player is checked first, so a fight that starts with both
    /// sides at zero hp goes to the monster.
    pub fn outcome(&self) -> Option<Outcome> {
        for side in [Side::Player, Side::Monster] {
            if self.combatant(side).character.is_defeated() {
                return Some(Outcome::Victory(side.opponent()));
            }
        }
        (self.turn >= self.max_turns).then_some(Outcome::Draw)
    }

    /// Plays the next actor turn. Returns `None` when the encounter is over.
    pub fn step(&mut self) -> Option<&TurnRecord> {
        if self.outcome().is_some() {
            return None;
        }

        let side = self.next;
        let (actor, opponent) = match side {
            Side::Player => (&mut self.player, &mut self.monster),
            Side::Monster => (&mut self.monster, &mut self.player),
        };

        actor.abilities = mem::take(&mut actor.abilities).advance_turn();

        let choice = actor.selector.choose(
            &actor.character,
            &opponent.character,
            actor.abilities.slots(),
        );
        if let Some(index) = choice.slot {
            actor.abilities = mem::take(&mut actor.abilities).activate(index);
        }

        let event = resolve_action(
            &actor.character,
            &opponent.character,
            &choice.ability,
            &self.config,
        );
        match &event {
            TurnEvent::Attack(_) => opponent.character = opponent.character.apply(&event),
            TurnEvent::Heal(_) => actor.character = actor.character.apply(&event),
        }

        self.turn += 1;
        self.next = side.opponent();

        let record = TurnRecord {
            turn: self.turn,
            side,
            ability: choice.ability,
            slot: choice.slot,
            event,
        };
        tracing::debug!("{record}");

        self.log.push(record);
        self.log.last()
    }

    /// Plays until the encounter is over.
    pub fn run(mut self) -> EncounterReport {
        while self.step().is_some() {}

        let outcome = self.outcome().unwrap_or(Outcome::Draw);
        tracing::info!(
            "Encounter finished: {} ({}) vs {} ({}) -> {} after {} turns",
            self.player.character.name,
            self.player.strategy_name(),
            self.monster.character.name,
            self.monster.strategy_name(),
            outcome,
            self.turn
        );

        EncounterReport {
            outcome,
            turns: self.turn,
            player: self.player.character,
            monster: self.monster.character,
            log: self.log,
        }
    }
}

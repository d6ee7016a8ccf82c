//! Rule-table strategies.
//!
//! A strategy is an explicit, ordered list of rules. Each rule says "when my
//! hp ratio and my opponent's hp ratio are in these bands, use the first
//! usable slot of this kind". Rules are tried top to bottom; the first one
//! that can act wins, and the list always ends in the canonical Basic Attack.
//!
//! ```text
//! Selector
//!   ├─ Sequence [InHpBand(< low),  UseFirst(Heal)]
//!   ├─ Sequence [InHpBand(> high), UseFirst(PowerfulAttack)]
//!   ├─ UseFirst(BasicAttack)
//!   └─ UseDefault
//! ```

use behavior_tree::builder::{selector, sequence};
use behavior_tree::{Behavior, BoxedBehavior};
use combat_core::AbilityKind;

use crate::config::SelectorConfig;
use crate::context::{AiContext, Pick};
use crate::nodes::{InHpBand, OpponentInHpBand, UseDefault, UseFirst};

pub type BehaviorTree = BoxedBehavior<AiContext>;

/// Range of hp ratios a rule applies to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HpBand {
    #[default]
    Any,
    /// Strictly below the threshold.
    Below(f32),
    /// Strictly above the threshold.
    Above(f32),
}

impl HpBand {
    pub fn contains(self, ratio: f32) -> bool {
        match self {
            HpBand::Any => true,
            HpBand::Below(threshold) => ratio < threshold,
            HpBand::Above(threshold) => ratio > threshold,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    /// Band the actor's own hp ratio must be in.
    pub band: HpBand,
    /// Band the opponent's hp ratio must be in.
    #[cfg_attr(feature = "serde", serde(default))]
    pub opponent: HpBand,
    pub prefer: AbilityKind,
}

impl Rule {
    pub const fn new(band: HpBand, prefer: AbilityKind) -> Self {
        Self {
            band,
            opponent: HpBand::Any,
            prefer,
        }
    }

    pub const fn always(prefer: AbilityKind) -> Self {
        Self::new(HpBand::Any, prefer)
    }

    /// Rule keyed on the opponent's health only.
    pub const fn against(opponent: HpBand, prefer: AbilityKind) -> Self {
        Self {
            band: HpBand::Any,
            opponent,
            prefer,
        }
    }

    fn compile(self) -> BehaviorTree {
        let mut steps: Vec<BehaviorTree> = Vec::new();
        if self.band != HpBand::Any {
            steps.push(Box::new(InHpBand { band: self.band }));
        }
        if self.opponent != HpBand::Any {
            steps.push(Box::new(OpponentInHpBand {
                band: self.opponent,
            }));
        }

        let use_first: BehaviorTree = Box::new(UseFirst { kind: self.prefer });
        if steps.is_empty() {
            return use_first;
        }
        steps.push(use_first);
        sequence(steps)
    }
}

/// Built-in personalities.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Heal when low, hit hard when healthy, basic attack otherwise.
    #[default]
    Tiered,
    /// Powerful attack whenever it is off cooldown.
    Aggressive,
    /// Heal below half health, otherwise basic attack.
    Defensive,
    /// Reads the opponent: powerful attack while it is healthy or nearly
    /// finished, basic attack in between.
    Balanced,
}

impl StrategyKind {
    pub fn rules(self, config: &SelectorConfig) -> Vec<Rule> {
        match self {
            StrategyKind::Tiered => vec![
                Rule::new(HpBand::Below(config.low_hp_threshold), AbilityKind::Heal),
                Rule::new(
                    HpBand::Above(config.high_hp_threshold),
                    AbilityKind::PowerfulAttack,
                ),
                Rule::always(AbilityKind::BasicAttack),
            ],
            StrategyKind::Aggressive => vec![
                Rule::always(AbilityKind::PowerfulAttack),
                Rule::always(AbilityKind::BasicAttack),
            ],
            StrategyKind::Defensive => vec![
                Rule::new(
                    HpBand::Below(SelectorConfig::DEFENSIVE_HEAL_THRESHOLD),
                    AbilityKind::Heal,
                ),
                Rule::always(AbilityKind::BasicAttack),
            ],
            StrategyKind::Balanced => vec![
                Rule::against(
                    HpBand::Above(config.high_hp_threshold),
                    AbilityKind::PowerfulAttack,
                ),
                Rule::against(
                    HpBand::Below(config.low_hp_threshold),
                    AbilityKind::PowerfulAttack,
                ),
                Rule::always(AbilityKind::BasicAttack),
            ],
        }
    }
}

/// A compiled rule list.
pub struct Strategy {
    rules: Vec<Rule>,
    tree: BehaviorTree,
}

impl Strategy {
    /// Compiles `rules` in order and appends the default fallback.
    pub fn new(rules: Vec<Rule>) -> Self {
        let mut children: Vec<BehaviorTree> = rules.iter().map(|rule| rule.compile()).collect();
        children.push(Box::new(UseDefault));

        Self {
            tree: selector(children),
            rules,
        }
    }

    pub fn from_kind(kind: StrategyKind, config: &SelectorConfig) -> Self {
        Self::new(kind.rules(config))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Runs the tree against `ctx` and returns its pick.
    pub fn evaluate(&self, ctx: &mut AiContext) -> Pick {
        self.tree.tick(ctx);
        ctx.pick().unwrap_or(Pick::Default)
    }
}

impl core::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Strategy")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{AbilitySet, Character};
    use core::str::FromStr;

    fn evaluate(strategy: &Strategy, hp: i32, set: &AbilitySet) -> Pick {
        evaluate_against(strategy, hp, 30, set)
    }

    fn evaluate_against(strategy: &Strategy, hp: i32, opponent_hp: i32, set: &AbilitySet) -> Pick {
        let actor = Character::new_monster("Slime").with_hp(hp);
        let opponent = Character::new_player("Hero").with_hp(opponent_hp);
        let mut ctx = AiContext::new(&actor, &opponent, set.slots());
        strategy.evaluate(&mut ctx)
    }

    #[test]
    fn band_edges_are_strict() {
        assert!(!HpBand::Below(0.3).contains(0.3));
        assert!(HpBand::Below(0.3).contains(0.29));
        assert!(!HpBand::Above(0.7).contains(0.7));
        assert!(HpBand::Any.contains(-1.0));
    }

    #[test]
    fn empty_rule_list_still_picks_default() {
        let strategy = Strategy::new(Vec::new());
        assert_eq!(evaluate(&strategy, 20, &AbilitySet::monster_default()), Pick::Default);
    }

    #[test]
    fn aggressive_prefers_power_until_cooldown() {
        let strategy = Strategy::from_kind(StrategyKind::Aggressive, &SelectorConfig::default());
        let set = AbilitySet::monster_default();

        assert_eq!(evaluate(&strategy, 2, &set), Pick::Slot(1));
        assert_eq!(evaluate(&strategy, 2, &set.activate(1)), Pick::Slot(0));
    }

    #[test]
    fn defensive_heals_below_half() {
        let strategy = Strategy::from_kind(StrategyKind::Defensive, &SelectorConfig::default());
        let set = AbilitySet::monster_default();

        assert_eq!(evaluate(&strategy, 9, &set), Pick::Slot(2));
        assert_eq!(evaluate(&strategy, 10, &set), Pick::Slot(0));
    }

    #[test]
    fn custom_thresholds_shift_tiers() {
        let config = SelectorConfig::with_thresholds(0.5, 0.9);
        let strategy = Strategy::from_kind(StrategyKind::Tiered, &config);
        let set = AbilitySet::monster_default();

        // 0.8 is above the default high threshold but not above 0.9.
        assert_eq!(evaluate(&strategy, 16, &set), Pick::Slot(0));
        assert_eq!(evaluate(&strategy, 8, &set), Pick::Slot(2));
    }

    #[test]
    fn balanced_reads_opponent_health() {
        let strategy = Strategy::from_kind(StrategyKind::Balanced, &SelectorConfig::default());
        let set = AbilitySet::monster_default();

        // Opponent at 30/30 and 6/30: press with the powerful attack.
        assert_eq!(evaluate_against(&strategy, 2, 30, &set), Pick::Slot(1));
        assert_eq!(evaluate_against(&strategy, 20, 6, &set), Pick::Slot(1));
        // Opponent at 15/30, and own health never matters.
        assert_eq!(evaluate_against(&strategy, 2, 15, &set), Pick::Slot(0));
        assert_eq!(evaluate_against(&strategy, 20, 15, &set), Pick::Slot(0));
        // Powerful cooling down falls through to basic.
        assert_eq!(evaluate_against(&strategy, 20, 30, &set.activate(1)), Pick::Slot(0));
    }

    #[test]
    fn combined_bands_require_both_sides() {
        let rule = Rule {
            band: HpBand::Below(0.3),
            opponent: HpBand::Below(0.4),
            prefer: AbilityKind::PowerfulAttack,
        };
        let strategy = Strategy::new(vec![rule]);
        let set = AbilitySet::monster_default();

        assert_eq!(evaluate_against(&strategy, 5, 10, &set), Pick::Slot(1));
        assert_eq!(evaluate_against(&strategy, 5, 20, &set), Pick::Default);
        assert_eq!(evaluate_against(&strategy, 15, 10, &set), Pick::Default);
    }

    #[test]
    fn kinds_parse_from_names() {
        assert_eq!(StrategyKind::from_str("aggressive"), Ok(StrategyKind::Aggressive));
        assert_eq!(StrategyKind::from_str("Defensive"), Ok(StrategyKind::Defensive));
        assert_eq!(StrategyKind::from_str("balanced"), Ok(StrategyKind::Balanced));
        assert_eq!(StrategyKind::default().to_string(), "tiered");
    }
}

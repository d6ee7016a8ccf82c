//! Every built-in strategy against every other.

use combat_ai::StrategyKind;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::config::SimConfig;
use crate::encounter::{Encounter, Outcome};
use crate::error::SimError;

/// Summary of one duel in the matrix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupResult {
    pub player_strategy: StrategyKind,
    pub monster_strategy: StrategyKind,
    pub outcome: Outcome,
    pub turns: u32,
    pub player_hp: i32,
    pub monster_hp: i32,
}

/// Runs one duel per player strategy and monster strategy pair.
///
/// Names, thresholds and the turn limit come from `config`; its strategy
/// fields are ignored. Results are ordered player-major in declaration order.
pub fn run_matrix(config: &SimConfig) -> Result<Vec<MatchupResult>, SimError> {
    config.validate()?;

    let mut results = Vec::new();
    for player_strategy in StrategyKind::iter() {
        for monster_strategy in StrategyKind::iter() {
            let duel = SimConfig {
                player_strategy,
                monster_strategy,
                ..config.clone()
            };
            let report = Encounter::from_config(&duel)?.run();

            tracing::info!(
                "Matchup {player_strategy} vs {monster_strategy}: {} in {} turns",
                report.outcome,
                report.turns
            );

            results.push(MatchupResult {
                player_strategy,
                monster_strategy,
                outcome: report.outcome,
                turns: report.turns,
                player_hp: report.player.hp,
                monster_hp: report.monster.hp,
            });
        }
    }

    Ok(results)
}

//! Command-line entry point for the combat simulator.
//!
//! Run with: `combat-sim duel` or `combat-sim matrix`

use anyhow::Result;
use clap::Parser;
use combat_ai::StrategyKind;
use combat_sim::{Encounter, Side, SimConfig, run_matrix};

/// Deterministic AI-vs-AI combat simulator
#[derive(Parser)]
#[command(name = "combat-sim")]
#[command(about = "Run headless duels between AI combatants", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run a single player-vs-monster duel
    Duel(Duel),

    /// Run every strategy pairing
    Matrix(Matrix),
}

/// Settings shared by both subcommands. Unset flags keep the environment value.
#[derive(Parser, Debug)]
struct Overrides {
    /// Turn limit before the duel is declared a draw
    #[arg(long)]
    max_turns: Option<u32>,

    /// Low hp ratio threshold (tiered heals, balanced finishes the opponent)
    #[arg(long)]
    low_hp: Option<f32>,

    /// High hp ratio threshold (tiered and balanced use the powerful attack)
    #[arg(long)]
    high_hp: Option<f32>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Overrides {
    fn apply(&self, config: &mut SimConfig) {
        if let Some(turns) = self.max_turns {
            config.max_turns = turns;
        }
        if let Some(low) = self.low_hp {
            config.selector.low_hp_threshold = low;
        }
        if let Some(high) = self.high_hp {
            config.selector.high_hp_threshold = high;
        }
    }
}

#[derive(Parser, Debug)]
struct Duel {
    /// tiered | aggressive | defensive | balanced
    #[arg(long)]
    player_strategy: Option<StrategyKind>,

    /// tiered | aggressive | defensive | balanced
    #[arg(long)]
    monster_strategy: Option<StrategyKind>,

    #[arg(long)]
    player_name: Option<String>,

    #[arg(long)]
    monster_name: Option<String>,

    #[command(flatten)]
    overrides: Overrides,
}

impl Duel {
    fn execute(self, mut config: SimConfig) -> Result<()> {
        self.overrides.apply(&mut config);
        if let Some(kind) = self.player_strategy {
            config.player_strategy = kind;
        }
        if let Some(kind) = self.monster_strategy {
            config.monster_strategy = kind;
        }
        if let Some(name) = self.player_name {
            config.player_name = name;
        }
        if let Some(name) = self.monster_name {
            config.monster_name = name;
        }

        let report = Encounter::from_config(&config)?.run();

        if self.overrides.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!(
            "{} ({}) vs {} ({})",
            config.player_name, config.player_strategy, config.monster_name, config.monster_strategy
        );
        for record in &report.log {
            println!("{record}");
        }
        let verdict = match report.outcome.winner() {
            Some(Side::Player) => format!("{} wins", report.player.name),
            Some(Side::Monster) => format!("{} wins", report.monster.name),
            None => "draw".to_string(),
        };
        println!(
            "Result: {} after {} turns ({} {} hp, {} {} hp)",
            verdict,
            report.turns,
            report.player.name,
            report.player.hp,
            report.monster.name,
            report.monster.hp
        );
        Ok(())
    }
}

#[derive(Parser, Debug)]
struct Matrix {
    #[command(flatten)]
    overrides: Overrides,
}

impl Matrix {
    fn execute(self, mut config: SimConfig) -> Result<()> {
        self.overrides.apply(&mut config);

        let results = run_matrix(&config)?;

        if self.overrides.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
            return Ok(());
        }

        println!(
            "{:<12} {:<12} {:<14} {:>6} {:>10} {:>10}",
            "player", "monster", "outcome", "turns", "player hp", "monster hp"
        );
        for result in &results {
            println!(
                "{:<12} {:<12} {:<14} {:>6} {:>10} {:>10}",
                result.player_strategy.as_ref(),
                result.monster_strategy.as_ref(),
                result.outcome.to_string(),
                result.turns,
                result.player_hp,
                result.monster_hp
            );
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists (SIM_* variables)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SimConfig::from_env();

    match cli.command {
        Command::Duel(cmd) => cmd.execute(config),
        Command::Matrix(cmd) => cmd.execute(config),
    }
}

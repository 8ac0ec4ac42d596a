//! Headless Duel Runner
//!
//! Runs script-vs-script duels and prints the result as JSON or text.

use clap::Parser;
use serde::Serialize;

use duelsim::battle::{BattleResult, Game};
use duelsim::combat::{Fighter, Weapon};
use duelsim::core::GameConfig;
use duelsim::script::{available_scripts, create_script};

/// Headless Duel Runner - script vs script battles
#[derive(Parser, Debug)]
#[command(name = "duel_runner")]
#[command(about = "Run script vs script duels and output battle results")]
struct Args {
    /// First fighter's script (see --list for options)
    #[arg(long, default_value = "aggressive")]
    first: String,

    /// Second fighter's script
    #[arg(long, default_value = "defensive")]
    second: String,

    /// Hit points for both fighters
    #[arg(long, default_value_t = 45)]
    hit_points: u32,

    /// Strength for both fighters
    #[arg(long, default_value_t = 7)]
    strength: u32,

    /// Maximum turns before timeout
    #[arg(long, default_value_t = 50)]
    max_turns: u32,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Pause between turns (text output only)
    #[arg(long)]
    slow: bool,

    /// List available scripts and exit
    #[arg(long)]
    list: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunReport<'a> {
    first_script: &'a str,
    second_script: &'a str,
    seed: u64,
    result: &'a BattleResult,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.list {
        for name in available_scripts() {
            println!("{name}");
        }
        return;
    }

    let first_script = match create_script(&args.first) {
        Ok(script) => script,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };
    let second_script = match create_script(&args.second) {
        Ok(script) => script,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    let first = Fighter::new(
        "Warrior A",
        args.hit_points,
        args.strength,
        Weapon::iron_sword(),
        first_script,
    );
    let second = Fighter::new(
        "Warrior B",
        args.hit_points,
        args.strength,
        Weapon::battle_axe(),
        second_script,
    );

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = GameConfig {
        max_turns: args.max_turns,
        inter_turn_delay: args.slow && args.format == "text",
        seed,
    };

    tracing::info!(
        first = %args.first,
        second = %args.second,
        seed,
        "starting duel"
    );

    let mut game = Game::new(first, second, config);
    let result = game.run();

    if args.format == "json" {
        let report = RunReport {
            first_script: &args.first,
            second_script: &args.second,
            seed,
            result: &result,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(error) => {
                eprintln!("Failed to serialize result: {error}");
                std::process::exit(1);
            }
        }
    } else {
        for turn in &result.history {
            println!("{}", turn.description);
        }
        println!("{}", result.summary);
        println!();
        println!("{}", result.stats);
    }
}

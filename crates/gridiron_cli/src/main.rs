//! Gridiron CLI
//!
//! Play Gridiron Strategy in the terminal, or run scripted/random drives.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

use gridiron_core::api::{simulate_drive, DriveRequest};
use gridiron_core::{FieldVariant, SCHEMA_VERSION};
use gridiron_cli::{
    build_simulator, load_config, parse_play_list, play_interactive, random_play_calls, run_script,
};

#[derive(Parser)]
#[command(name = "gridiron")]
#[command(about = "Gridiron Strategy drive simulator", long_about = None)]
struct Cli {
    /// Config file (JSON, or YAML by extension); overrides GRIDIRON_CONFIG_PATH
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Field variant; overrides the config file
    #[arg(long, value_enum, global = true)]
    variant: Option<VariantArg>,

    /// RNG seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Flat,
    Hex,
}

impl From<VariantArg> for FieldVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Flat => FieldVariant::Flat,
            VariantArg::Hex => FieldVariant::Hex,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game on stdin/stdout
    Play,

    /// Run a fixed list of play calls
    Simulate {
        /// Plays, comma or space separated (e.g. "run-left,pass-deep,3")
        #[arg(long)]
        plays: String,

        /// Print the JSON response instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Call random plays
    Autoplay {
        /// Number of plays
        #[arg(long, default_value = "40")]
        count: usize,

        /// Print the JSON response instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.variant.map(FieldVariant::from))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Play => {
            let mut sim = build_simulator(config, cli.seed)?;
            play_interactive(&mut sim, io::stdin().lock(), &mut out)?;
        }

        Commands::Simulate { plays, json } => {
            let plays = parse_play_list(&plays)?;
            if json {
                let seed = cli.seed.unwrap_or_else(rand::random);
                let names = plays.iter().map(|p| p.as_str().to_string()).collect();
                print_json(&mut out, config, seed, names)?;
            } else {
                let mut sim = build_simulator(config, cli.seed)?;
                run_script(&mut sim, &plays, &mut out)?;
            }
        }

        Commands::Autoplay { count, json } => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            // play calling draws from its own stream, seeded one past the game seed
            let mut caller = gridiron_core::SeededRng::from_seed(seed.wrapping_add(1));
            let plays = random_play_calls(&mut caller, count);
            log::info!("Autoplay: {count} plays, seed {seed}");

            if json {
                let names = plays.iter().map(|p| p.as_str().to_string()).collect();
                print_json(&mut out, config, seed, names)?;
            } else {
                let mut sim = build_simulator(config, Some(seed))?;
                run_script(&mut sim, &plays, &mut out)?;
            }
        }
    }

    Ok(())
}

fn print_json<W: Write>(
    out: &mut W,
    config: gridiron_core::SimConfig,
    seed: u64,
    plays: Vec<String>,
) -> Result<()> {
    let request = DriveRequest {
        schema_version: SCHEMA_VERSION,
        seed,
        plays,
        config: Some(config),
        initial_state: None,
    };
    let response = simulate_drive(&request).map_err(anyhow::Error::msg)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
    Ok(())
}

#![deny(unsafe_code)]
//! CLI binary for the OKLCH explorer.
//!
//! Subcommands:
//! - `inspect <L> <C> <H>`: validate three channel values and print the color card
//! - `validate <channel> <raw>`: validate a single channel value
//! - `clamp <L> <C> <H>`: gamut membership and clamped color
//! - `random`: card for a seeded random color

mod error;
mod logger;
mod render;

use clap::{Parser, Subcommand};
use error::CliError;
use log::{debug, info};
use oklch_explorer_core::{
    map_to_gamut, random_color, validate_channel, validate_channel_named, Channel, ColorReport,
    ExplorerConfig, OkLch, Xorshift64,
};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "oklch", about = "Explore and validate OKLCH colors")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// JSON config file overriding thresholds, gamut and clamp tuning.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate L, C and H and print every derived format.
    Inspect {
        /// Lightness, 0 to 1.
        #[arg(allow_hyphen_values = true)]
        l: String,
        /// Chroma, 0 to 0.4.
        #[arg(allow_hyphen_values = true)]
        c: String,
        /// Hue in degrees; any number, wrapped for display.
        #[arg(allow_hyphen_values = true)]
        h: String,
    },
    /// Validate a single channel value.
    Validate {
        /// Channel name: l, c or h.
        channel: String,
        /// Raw value as typed.
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
    /// Check sRGB membership and print the chroma-clamped color.
    Clamp {
        #[arg(allow_hyphen_values = true)]
        l: String,
        #[arg(allow_hyphen_values = true)]
        c: String,
        #[arg(allow_hyphen_values = true)]
        h: String,
    },
    /// Print the card for a random in-gamut color.
    Random {
        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Lowest lightness to draw (defaults to the config's range).
        #[arg(long)]
        min_lightness: Option<f64>,

        /// Highest lightness to draw (defaults to the config's range).
        #[arg(long)]
        max_lightness: Option<f64>,
    },
}

fn load_config(path: Option<&Path>) -> Result<ExplorerConfig, CliError> {
    let Some(path) = path else {
        return Ok(ExplorerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    let config = ExplorerConfig::from_json_str(&text)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Validates all three channels, collecting every failure rather than the first.
fn parse_color(l: &str, c: &str, h: &str) -> Result<OkLch, CliError> {
    let results = [
        validate_channel(Channel::L, l),
        validate_channel(Channel::C, c),
        validate_channel(Channel::H, h),
    ];
    let errors: Vec<_> = results
        .iter()
        .filter_map(|r| r.as_ref().err().cloned())
        .collect();
    if !errors.is_empty() {
        return Err(CliError::Input(errors));
    }
    let [l, c, h] = results.map(|r| r.unwrap_or_default());
    Ok(OkLch::new(l, c, h))
}

fn print_json(value: &impl serde::Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;
    debug!("using config {config:?}");

    match cli.command {
        Command::Inspect { l, c, h } => {
            let report = ColorReport::new(parse_color(&l, &c, &h)?, &config);
            if cli.json {
                print_json(&report)?;
            } else {
                println!("{}", render::report_text(&report));
            }
        }
        Command::Validate { channel, raw } => {
            let value = validate_channel_named(&channel, &raw)?;
            if cli.json {
                print_json(&serde_json::json!({ "channel": channel, "value": value }))?;
            } else {
                println!("{value}");
            }
        }
        Command::Clamp { l, c, h } => {
            let result = map_to_gamut(parse_color(&l, &c, &h)?, config.gamut, &config.clamp);
            if cli.json {
                print_json(&result)?;
            } else {
                println!("{}", render::gamut_text(&result));
            }
        }
        Command::Random {
            seed,
            min_lightness,
            max_lightness,
        } => {
            let (default_min, default_max) = config.random_lightness;
            let range = (
                min_lightness.unwrap_or(default_min),
                max_lightness.unwrap_or(default_max),
            );
            let color = random_color(range, &mut Xorshift64::new(seed))?;
            info!("seed {seed} drew {color:?}");
            let report = ColorReport::new(color, &config);
            if cli.json {
                print_json(&report)?;
            } else {
                println!("{}", render::report_text(&report));
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&e.to_json()).unwrap_or_default()
            );
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

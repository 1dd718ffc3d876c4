// ABOUTME: Studio CLI - command-line front end to the body-composition engine
// ABOUTME: Runs calculations, lists protocols and sites, and classifies percentages as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
//!
//! Usage:
//! ```bash
//! # Pollock 3-site for a 30 year old, 80 kg man
//! studio-cli calculate --protocol pollock3 --gender male --age 30 --weight 80 \
//!     --site chest=10 --site abdominal=20 --site thigh=15
//!
//! # Same calculation from a JSON document ("-" reads stdin)
//! studio-cli calculate --input assessment.json
//!
//! # Sites a protocol needs
//! studio-cli sites --protocol guedes --gender female
//!
//! # Classify a fat percentage
//! studio-cli classify --percentage 19.5 --gender female
//!
//! # Protocol catalog
//! studio-cli protocols
//! ```

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use studio_engine::composition::{Gender, Protocol, SkinfoldSite};
use studio_engine::errors::{AppResult, ErrorResponse};
use studio_engine::logging::LoggingConfig;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "studio-cli",
    about = "Studio body-composition CLI",
    long_about = "Skinfold body-fat estimation, site catalogs and classification for studio assessments."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate body density, fat percentage and lean/fat mass
    Calculate {
        /// JSON file with protocol, gender, age_years, weight_kg and skinfolds ("-" for stdin)
        #[arg(long, conflicts_with_all = ["protocol", "gender", "age", "weight", "sites"])]
        input: Option<PathBuf>,

        /// Protocol (pollock3, pollock7, guedes)
        #[arg(long, required_unless_present = "input")]
        protocol: Option<Protocol>,

        /// Gender (male, female)
        #[arg(long, required_unless_present = "input")]
        gender: Option<Gender>,

        /// Age in whole years
        #[arg(long, required_unless_present = "input")]
        age: Option<u32>,

        /// Body weight in kg
        #[arg(long, required_unless_present = "input")]
        weight: Option<f64>,

        /// Skinfold reading as site=mm (repeatable)
        #[arg(long = "site", value_parser = commands::calculate::parse_site_reading)]
        sites: Vec<(SkinfoldSite, f64)>,

        /// Decimal places for displayed values (defaults to configuration)
        #[arg(long)]
        decimals: Option<u32>,
    },

    /// List the sites a protocol requires
    Sites {
        /// Protocol (pollock3, pollock7, guedes)
        #[arg(long)]
        protocol: Protocol,

        /// Gender (male, female)
        #[arg(long)]
        gender: Gender,
    },

    /// Classify a body-fat percentage
    Classify {
        /// Body-fat percentage
        #[arg(long, allow_negative_numbers = true)]
        percentage: f64,

        /// Gender (male, female)
        #[arg(long)]
        gender: Gender,
    },

    /// List available protocols with their equations and references
    Protocols,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.verbose()
    } else {
        logging
    };
    if let Err(e) = logging.init() {
        eprintln!("logging disabled: {e}");
    }

    debug!("Studio CLI");

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let response = ErrorResponse::from(error);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{}", response.error.message),
            }
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Command) -> Result<()> {
    match command {
        Command::Calculate {
            input,
            protocol,
            gender,
            age,
            weight,
            sites,
            decimals,
        } => {
            let request = input.map_or_else(
                || commands::calculate::input_from_flags(protocol, gender, age, weight, sites),
                |path| commands::calculate::read_input(&path),
            )?;
            commands::calculate::run(&request, decimals)?;
        }
        Command::Sites { protocol, gender } => commands::catalog::sites(protocol, gender)?,
        Command::Classify { percentage, gender } => {
            commands::catalog::classify(percentage, gender)?;
        }
        Command::Protocols => commands::catalog::protocols()?,
    }

    Ok(())
}

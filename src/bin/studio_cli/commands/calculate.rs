// ABOUTME: The calculate command: builds a composition input and prints the result as JSON
// ABOUTME: Incomplete input is reported as a pending status with the sites still missing

use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use studio_engine::composition::{
    classify, Classification, CompositionConfig, CompositionError, CompositionInput, Gender,
    Protocol, SkinfoldMeasurement, SkinfoldSite,
};
use studio_engine::errors::{AppError, AppResult, ErrorCode};
use tracing::info;

use super::print_json;

/// Calculation output
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum CalculateOutput {
    /// Every required site is measured and the result is usable
    Computed {
        protocol: Protocol,
        gender: Gender,
        body_density: f64,
        body_fat_percentage: f64,
        lean_mass_kg: f64,
        fat_mass_kg: f64,
        plausible: bool,
        classification: Classification,
    },
    /// Required sites still absent
    Incomplete {
        protocol: Protocol,
        gender: Gender,
        missing_sites: Vec<SkinfoldSite>,
    },
}

/// Parse a `site=mm` reading
pub fn parse_site_reading(raw: &str) -> Result<(SkinfoldSite, f64), String> {
    let (site, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected site=mm, got '{raw}'"))?;
    let site: SkinfoldSite = site.parse().map_err(|e: CompositionError| e.to_string())?;
    let millimeters: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid millimeters for {site}: '{value}'"))?;
    Ok((site, millimeters))
}

/// Read a JSON input document from a file, or stdin for `-`
pub fn read_input(path: &Path) -> AppResult<CompositionInput> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map_err(|e| {
            AppError::invalid_input("failed to read input from stdin").with_source(e)
        })?;
        buffer
    } else {
        fs::read_to_string(path).map_err(|e| {
            AppError::invalid_input(format!("failed to read {}", path.display())).with_source(e)
        })?
    };

    serde_json::from_str(&raw).map_err(|e| {
        AppError::new(ErrorCode::InvalidFormat, format!("invalid input document: {e}"))
            .with_source(e)
    })
}

/// Resolve display precision, holding an explicit request to the configured limit
pub fn display_decimals(config: &CompositionConfig, requested: Option<u32>) -> AppResult<u32> {
    requested.map_or(Ok(config.display_decimals), |decimals| {
        CompositionConfig {
            display_decimals: decimals,
            ..config.clone()
        }
        .validate()?;
        Ok(decimals)
    })
}

/// Assemble an input from command-line flags
pub fn input_from_flags(
    protocol: Option<Protocol>,
    gender: Option<Gender>,
    age: Option<u32>,
    weight: Option<f64>,
    sites: Vec<(SkinfoldSite, f64)>,
) -> AppResult<CompositionInput> {
    Ok(CompositionInput {
        protocol: protocol.ok_or_else(|| AppError::missing_field("--protocol is required"))?,
        gender: gender.ok_or_else(|| AppError::missing_field("--gender is required"))?,
        age_years: age.ok_or_else(|| AppError::missing_field("--age is required"))?,
        weight_kg: weight.ok_or_else(|| AppError::missing_field("--weight is required"))?,
        skinfolds: SkinfoldMeasurement::from_pairs(sites)?,
    })
}

/// Evaluate and print
pub fn run(input: &CompositionInput, decimals: Option<u32>) -> AppResult<()> {
    let config = CompositionConfig::global();
    let decimals = display_decimals(config, decimals)?;

    let output = match input.try_evaluate_with(config) {
        Ok(result) => {
            info!(protocol = %input.protocol, gender = %input.gender, "calculation complete");
            let display = result.rounded(decimals);
            CalculateOutput::Computed {
                protocol: input.protocol,
                gender: input.gender,
                body_density: display.body_density,
                body_fat_percentage: display.body_fat_percentage,
                lean_mass_kg: display.lean_mass_kg,
                fat_mass_kg: display.fat_mass_kg,
                plausible: result.is_plausible(config),
                classification: classify(result.body_fat_percentage, input.gender),
            }
        }
        Err(CompositionError::IncompleteInput {
            protocol,
            gender,
            missing,
        }) => CalculateOutput::Incomplete {
            protocol,
            gender,
            missing_sites: missing,
        },
        Err(e) => return Err(e.into()),
    };

    print_json(&output)
}

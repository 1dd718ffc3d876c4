// ABOUTME: Body-fat calculation facade gating on input completeness before computing
// ABOUTME: Chains site gate, density equation, Siri conversion and mass derivation into one result
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Orchestrator
//!
//! `calculate_body_fat` is meant to be called on every input change while a
//! form is being filled in. `None` means "not computable yet"; it is the
//! expected state until every required site, the age and the weight are set.
//! Each call is independent, so identical inputs always produce bit-identical
//! results.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::CompositionConfig;
use crate::conversion::{fat_percentage, round_to};
use crate::density::body_density;
use crate::derivation::derive_masses;
use crate::errors::CompositionError;
use crate::protocols::{Gender, Protocol};
use crate::sites::SkinfoldMeasurement;

/// Decimal places kept for density in display copies
const DENSITY_DISPLAY_DECIMALS: u32 = 4;

/// Output of one body-composition calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Protocol used
    pub protocol: Protocol,
    /// Body density in g/cm3
    pub body_density: f64,
    /// Body fat percentage (Siri), full precision
    pub body_fat_percentage: f64,
    /// Fat-free mass in kg
    pub lean_mass_kg: f64,
    /// Fat mass in kg
    pub fat_mass_kg: f64,
}

impl CalculationResult {
    /// Total body weight the masses were derived from
    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        self.lean_mass_kg + self.fat_mass_kg
    }

    /// Whether the fat percentage lies inside the configured sanity band
    #[must_use]
    pub fn is_plausible(&self, config: &CompositionConfig) -> bool {
        config.is_plausible_fat(self.body_fat_percentage)
    }

    /// Display copy rounded to `decimals` places
    ///
    /// Lean mass is re-derived from the rounded fat mass, so the rounded pair
    /// still sums to the weight whenever the weight itself has at most
    /// `decimals` places.
    #[must_use]
    pub fn rounded(&self, decimals: u32) -> Self {
        let weight = self.weight_kg();
        let fat_mass_kg = round_to(self.fat_mass_kg, decimals);
        Self {
            protocol: self.protocol,
            body_density: round_to(self.body_density, DENSITY_DISPLAY_DECIMALS),
            body_fat_percentage: round_to(self.body_fat_percentage, decimals),
            lean_mass_kg: round_to(weight - fat_mass_kg, decimals),
            fat_mass_kg,
        }
    }
}

/// Everything a caller supplies for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionInput {
    /// Estimation protocol
    pub protocol: Protocol,
    /// Equation variant
    pub gender: Gender,
    /// Age in whole years
    pub age_years: u32,
    /// Body weight in kg
    pub weight_kg: f64,
    /// Caliper readings collected so far
    #[serde(default)]
    pub skinfolds: SkinfoldMeasurement,
}

impl CompositionInput {
    /// Evaluate with the global configuration
    #[must_use]
    pub fn evaluate(&self) -> Option<CalculationResult> {
        self.evaluate_with(CompositionConfig::global())
    }

    /// Evaluate with an explicit configuration
    #[must_use]
    pub fn evaluate_with(&self, config: &CompositionConfig) -> Option<CalculationResult> {
        calculate_body_fat_with(
            config,
            self.protocol,
            self.gender,
            self.age_years,
            self.weight_kg,
            &self.skinfolds,
        )
    }

    /// Evaluate with an explicit configuration, keeping the failure reason
    ///
    /// # Errors
    ///
    /// See [`try_calculate_body_fat_with`]
    pub fn try_evaluate_with(
        &self,
        config: &CompositionConfig,
    ) -> Result<CalculationResult, CompositionError> {
        try_calculate_body_fat_with(
            config,
            self.protocol,
            self.gender,
            self.age_years,
            self.weight_kg,
            &self.skinfolds,
        )
    }
}

/// Estimate body composition, or `None` while the input is not computable
///
/// Uses [`CompositionConfig::global`].
#[must_use]
pub fn calculate_body_fat(
    protocol: Protocol,
    gender: Gender,
    age_years: u32,
    weight_kg: f64,
    skinfolds: &SkinfoldMeasurement,
) -> Option<CalculationResult> {
    calculate_body_fat_with(
        CompositionConfig::global(),
        protocol,
        gender,
        age_years,
        weight_kg,
        skinfolds,
    )
}

/// [`calculate_body_fat`] with an explicit configuration
#[must_use]
pub fn calculate_body_fat_with(
    config: &CompositionConfig,
    protocol: Protocol,
    gender: Gender,
    age_years: u32,
    weight_kg: f64,
    skinfolds: &SkinfoldMeasurement,
) -> Option<CalculationResult> {
    match try_calculate_body_fat_with(config, protocol, gender, age_years, weight_kg, skinfolds) {
        Ok(result) => Some(result),
        Err(CompositionError::IncompleteInput { missing, .. }) => {
            debug!(%protocol, %gender, missing = missing.len(), "skinfold input incomplete");
            None
        }
        Err(e) => {
            debug!(%protocol, %gender, "body composition not computable: {e}");
            None
        }
    }
}

/// Estimate body composition with the global configuration, keeping the failure reason
///
/// # Errors
///
/// See [`try_calculate_body_fat_with`]
pub fn try_calculate_body_fat(
    protocol: Protocol,
    gender: Gender,
    age_years: u32,
    weight_kg: f64,
    skinfolds: &SkinfoldMeasurement,
) -> Result<CalculationResult, CompositionError> {
    try_calculate_body_fat_with(
        CompositionConfig::global(),
        protocol,
        gender,
        age_years,
        weight_kg,
        skinfolds,
    )
}

/// Estimate body composition, keeping the failure reason
///
/// Only the protocol's required sites contribute to the sum; extra readings
/// are ignored. A fat percentage outside the sanity band is still returned
/// (and logged); use [`CalculationResult::is_plausible`] to flag it.
///
/// # Errors
///
/// - `IncompleteInput` when a required site is not measured
/// - `InvalidSubject` when age is zero or weight is not above zero
/// - `DegenerateMeasurement` / `DensityOutOfRange` when the measurements do
///   not map to a meaningful density
pub fn try_calculate_body_fat_with(
    config: &CompositionConfig,
    protocol: Protocol,
    gender: Gender,
    age_years: u32,
    weight_kg: f64,
    skinfolds: &SkinfoldMeasurement,
) -> Result<CalculationResult, CompositionError> {
    let sites = protocol.required_sites(gender);
    let Some(skinfold_sum) = skinfolds.sum_of(sites) else {
        return Err(CompositionError::IncompleteInput {
            protocol,
            gender,
            missing: skinfolds.missing_from(sites),
        });
    };

    if age_years == 0 {
        return Err(CompositionError::InvalidSubject(
            "age must be at least 1 year".to_owned(),
        ));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(CompositionError::InvalidSubject(format!(
            "weight must be above zero, got {weight_kg} kg"
        )));
    }

    let density = body_density(protocol, gender, age_years, skinfold_sum)?;
    let percentage = fat_percentage(density, config)?;
    let masses = derive_masses(weight_kg, percentage)?;

    if !config.is_plausible_fat(percentage) {
        warn!(
            %protocol,
            %gender,
            body_fat_percentage = percentage,
            "body fat percentage outside plausible band {:.1}-{:.1}",
            config.plausible_fat_min,
            config.plausible_fat_max
        );
    }

    Ok(CalculationResult {
        protocol,
        body_density: density,
        body_fat_percentage: percentage,
        lean_mass_kg: masses.lean_mass_kg,
        fat_mass_kg: masses.fat_mass_kg,
    })
}

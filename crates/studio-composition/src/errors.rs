// ABOUTME: Error taxonomy for body-composition calculations
// ABOUTME: Distinguishes not-yet-computable input from degenerate measurements and bad categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use studio_core::errors::AppError;
use thiserror::Error;

use crate::protocols::{Gender, Protocol};
use crate::sites::SkinfoldSite;

/// Errors raised while computing body composition
///
/// `IncompleteInput` and `InvalidSubject` are the normal "keep waiting for
/// more input" states of a form being filled in. The public facade turns
/// every variant into `None`; `try_calculate_body_fat` keeps the reason.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompositionError {
    /// One or more sites required by the protocol are not measured
    #[error("{protocol} ({gender}) requires {}", join_sites(.missing))]
    IncompleteInput {
        /// Selected protocol
        protocol: Protocol,
        /// Selected gender
        gender: Gender,
        /// Required sites that are absent, in protocol order
        missing: Vec<SkinfoldSite>,
    },

    /// Age or weight is absent or not usable
    #[error("invalid subject: {0}")]
    InvalidSubject(String),

    /// A skinfold value that can never be a caliper reading
    #[error("invalid {site} skinfold: {value} mm (must be a finite value above zero)")]
    InvalidMeasurement {
        /// Site being recorded
        site: SkinfoldSite,
        /// Rejected value
        value: f64,
    },

    /// Arithmetic input that would yield NaN, infinity or a meaningless density
    #[error("degenerate measurement: {0}")]
    DegenerateMeasurement(String),

    /// Computed density falls outside the band where the Siri law applies
    #[error("body density {density:.5} g/cm3 is outside the valid band {min:.2}-{max:.2}")]
    DensityOutOfRange {
        /// Computed density
        density: f64,
        /// Lower bound of the valid band
        min: f64,
        /// Upper bound of the valid band
        max: f64,
    },

    /// A protocol, gender or site name that is not part of the catalog
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

fn join_sites(sites: &[SkinfoldSite]) -> String {
    sites
        .iter()
        .map(|site| site.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<CompositionError> for AppError {
    fn from(error: CompositionError) -> Self {
        let message = error.to_string();
        match error {
            CompositionError::IncompleteInput { missing, .. } => Self::missing_field(message)
                .with_details(serde_json::json!({
                    "missing_sites": missing.iter().map(|site| site.name()).collect::<Vec<_>>(),
                })),
            CompositionError::DensityOutOfRange { density, min, max } => Self::out_of_range(
                message,
            )
            .with_details(serde_json::json!({ "density": density, "min": min, "max": max })),
            CompositionError::InvalidSubject(_)
            | CompositionError::InvalidMeasurement { .. }
            | CompositionError::DegenerateMeasurement(_)
            | CompositionError::UnknownCategory(_) => Self::invalid_input(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::errors::ErrorCode;

    #[test]
    fn test_incomplete_input_lists_missing_sites() {
        let error = CompositionError::IncompleteInput {
            protocol: Protocol::Pollock3,
            gender: Gender::Male,
            missing: vec![SkinfoldSite::Chest, SkinfoldSite::Thigh],
        };

        assert_eq!(error.to_string(), "pollock3 (male) requires chest, thigh");
    }

    #[test]
    fn test_conversion_to_app_error_codes() {
        let incomplete = AppError::from(CompositionError::IncompleteInput {
            protocol: Protocol::Guedes,
            gender: Gender::Female,
            missing: vec![SkinfoldSite::Subscapular],
        });
        assert_eq!(incomplete.code, ErrorCode::MissingRequiredField);
        assert_eq!(incomplete.details["missing_sites"][0], "subscapular");

        let out_of_range = AppError::from(CompositionError::DensityOutOfRange {
            density: 1.12,
            min: 0.90,
            max: 1.10,
        });
        assert_eq!(out_of_range.code, ErrorCode::ValueOutOfRange);

        let unknown = AppError::from(CompositionError::UnknownCategory("durnin".to_owned()));
        assert_eq!(unknown.code, ErrorCode::InvalidInput);
    }
}

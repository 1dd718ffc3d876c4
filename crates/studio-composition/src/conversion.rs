// ABOUTME: Body density to fat percentage conversion using the Siri two-compartment law
// ABOUTME: Guards the density band where the law is meaningful; provides display rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fat-Percentage Converter
//!
//! Siri, W.E. (1961). "Body composition from fluid spaces and density."
//! In *Techniques for Measuring Body Composition*, 223-244. National Academy of Sciences.

use crate::config::CompositionConfig;
use crate::errors::CompositionError;

/// Siri numerator constant
const SIRI_NUMERATOR: f64 = 495.0;

/// Siri offset constant
const SIRI_OFFSET: f64 = 450.0;

/// Raw Siri law: `%BF = 495 / D - 450`
///
/// No domain check; see [`fat_percentage`] for the guarded form.
#[must_use]
pub fn siri_fat_percentage(body_density: f64) -> f64 {
    SIRI_NUMERATOR / body_density - SIRI_OFFSET
}

/// Fat percentage for a density inside the configured valid band
///
/// The result keeps full precision; round only for display. It is clamped
/// to 0-100 so the band edges survive floating-point error.
///
/// # Errors
///
/// Returns `CompositionError::DegenerateMeasurement` for a non-finite density
/// and `CompositionError::DensityOutOfRange` outside
/// `[config.density_min, config.density_max]`
pub fn fat_percentage(
    body_density: f64,
    config: &CompositionConfig,
) -> Result<f64, CompositionError> {
    if !body_density.is_finite() {
        return Err(CompositionError::DegenerateMeasurement(format!(
            "body density is not finite: {body_density}"
        )));
    }

    if !(config.density_min..=config.density_max).contains(&body_density) {
        return Err(CompositionError::DensityOutOfRange {
            density: body_density,
            min: config.density_min,
            max: config.density_max,
        });
    }

    Ok(siri_fat_percentage(body_density).clamp(0.0, 100.0))
}

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals.min(15) as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::derivation::derive_masses;

    #[test]
    fn test_siri_reference_points() {
        // 495/1.1 - 450 = 0, 495/0.9 - 450 = 100
        assert!(siri_fat_percentage(1.1).abs() < 1e-9);
        assert!((siri_fat_percentage(0.9) - 100.0).abs() < 1e-9);
        assert!((siri_fat_percentage(1.0) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_guarded_conversion_accepts_band_edges() {
        let config = CompositionConfig::default();
        assert!(fat_percentage(1.10, &config).is_ok());
        assert!(fat_percentage(0.90, &config).is_ok());
        let value = fat_percentage(1.067_696_5, &config).unwrap();
        assert!((value - 13.614_894_3).abs() < 1e-6, "BF% = {value}");
    }

    #[test]
    fn test_band_edges_map_to_exact_percentage_limits() {
        let config = CompositionConfig::default();

        let lean = fat_percentage(1.10, &config).unwrap();
        assert!((0.0..=100.0).contains(&lean), "upper edge gave {lean}");
        let masses = derive_masses(80.0, lean).unwrap();
        assert!(masses.fat_mass_kg.abs() < 1e-9);
        assert!((masses.lean_mass_kg - 80.0).abs() < 1e-9);

        let fat = fat_percentage(0.90, &config).unwrap();
        assert!((0.0..=100.0).contains(&fat), "lower edge gave {fat}");
        let masses = derive_masses(80.0, fat).unwrap();
        assert!((masses.fat_mass_kg - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_density_outside_band_is_rejected() {
        let config = CompositionConfig::default();
        assert!(matches!(
            fat_percentage(1.105, &config),
            Err(CompositionError::DensityOutOfRange { .. })
        ));
        assert!(matches!(
            fat_percentage(0.85, &config),
            Err(CompositionError::DensityOutOfRange { .. })
        ));
        assert!(matches!(
            fat_percentage(f64::NAN, &config),
            Err(CompositionError::DegenerateMeasurement(_))
        ));
    }

    #[test]
    fn test_round_to() {
        assert!((round_to(13.614_894, 1) - 13.6).abs() < 1e-12);
        assert!((round_to(13.65, 0) - 14.0).abs() < 1e-12);
        assert!((round_to(69.108_084, 2) - 69.11).abs() < 1e-12);
    }
}

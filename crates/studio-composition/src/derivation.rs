// ABOUTME: Derives fat mass and lean mass from body weight and fat percentage
// ABOUTME: Lean mass is computed from fat mass so the pair always sums to body weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::errors::CompositionError;

/// Two-compartment split of body weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMasses {
    /// Fat-free mass in kg
    pub lean_mass_kg: f64,
    /// Fat mass in kg
    pub fat_mass_kg: f64,
}

/// Split `weight_kg` into fat and lean mass
///
/// `fat = weight * pct / 100`, `lean = weight - fat`.
///
/// # Errors
///
/// Returns `CompositionError::InvalidSubject` if the weight is not a finite
/// value above zero, and `CompositionError::DegenerateMeasurement` if the
/// percentage lies outside 0-100
pub fn derive_masses(weight_kg: f64, fat_percentage: f64) -> Result<BodyMasses, CompositionError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(CompositionError::InvalidSubject(format!(
            "weight must be above zero, got {weight_kg} kg"
        )));
    }
    if !(0.0..=100.0).contains(&fat_percentage) {
        return Err(CompositionError::DegenerateMeasurement(format!(
            "fat percentage {fat_percentage} is outside 0-100"
        )));
    }

    let fat_mass_kg = weight_kg * fat_percentage / 100.0;
    Ok(BodyMasses {
        lean_mass_kg: weight_kg - fat_mass_kg,
        fat_mass_kg,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_twenty_percent_of_eighty_kg() {
        let masses = derive_masses(80.0, 20.0).unwrap();
        assert!((masses.fat_mass_kg - 16.0).abs() < 1e-12);
        assert!((masses.lean_mass_kg - 64.0).abs() < 1e-12);
    }

    #[test]
    fn test_masses_sum_to_weight() {
        for weight in [41.3, 58.0, 80.0, 97.45, 143.2] {
            for pct in [0.0, 3.3, 13.614_894, 27.5, 59.9, 100.0] {
                let masses = derive_masses(weight, pct).unwrap();
                let total = masses.lean_mass_kg + masses.fat_mass_kg;
                assert!((total - weight).abs() < 1e-9, "{weight} kg at {pct}%");
            }
        }
    }

    #[test]
    fn test_rejects_bad_inputs() {
        assert!(matches!(
            derive_masses(0.0, 20.0),
            Err(CompositionError::InvalidSubject(_))
        ));
        assert!(matches!(
            derive_masses(f64::NAN, 20.0),
            Err(CompositionError::InvalidSubject(_))
        ));
        assert!(matches!(
            derive_masses(70.0, -0.5),
            Err(CompositionError::DegenerateMeasurement(_))
        ));
        assert!(matches!(
            derive_masses(70.0, 100.5),
            Err(CompositionError::DegenerateMeasurement(_))
        ));
    }
}

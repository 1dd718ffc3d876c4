// ABOUTME: Protocol catalog for skinfold body-composition methods
// ABOUTME: Maps each protocol and gender to its ordered set of required measurement sites
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Protocol Catalog
//!
//! Each protocol is a validated pairing of measurement sites and a density
//! regression. Site requirements differ by gender for the 3-site protocols;
//! the 7-site protocol uses every site for both.
//!
//! # Scientific References
//!
//! - Jackson, A.S. & Pollock, M.L. (1978). "Generalized equations for predicting body density of men."
//!   *British Journal of Nutrition*, 40(3), 497-504.
//! - Jackson, A.S., Pollock, M.L. & Ward, A. (1980). "Generalized equations for predicting body density of women."
//!   *Medicine & Science in Sports & Exercise*, 12(3), 175-181.
//! - Guedes, D.P. (1985). "Estudo da gordura corporal através da mensuração dos valores de densidade corporal
//!   e da espessura de dobras cutâneas em universitários." Master's thesis, Universidade Federal de Santa Maria.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CompositionError;
use crate::sites::{SkinfoldMeasurement, SkinfoldSite};

/// Biological sex category used to select the equation variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male equations and bands
    Male,
    /// Female equations and bands
    Female,
}

impl Gender {
    /// Both genders
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Stable machine name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = CompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(CompositionError::UnknownCategory(format!(
                "Unknown gender: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Skinfold-based body density estimation method
///
/// - `Pollock3`: Jackson-Pollock 3-site, gender-specific sites
/// - `Pollock7`: Jackson-Pollock 7-site, same sites for both genders
/// - `Guedes`: Guedes 3-site equations validated on Brazilian adults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    /// Jackson-Pollock 3-site
    ///
    /// Men: chest, abdominal, thigh. Women: triceps, suprailiac, thigh.
    Pollock3,

    /// Jackson-Pollock 7-site
    ///
    /// Chest, axillary, triceps, subscapular, abdominal, suprailiac, thigh.
    Pollock7,

    /// Guedes 3-site
    ///
    /// Men: triceps, suprailiac, abdominal. Women: subscapular, suprailiac, thigh.
    Guedes,
}

const POLLOCK3_MALE: [SkinfoldSite; 3] = [
    SkinfoldSite::Chest,
    SkinfoldSite::Abdominal,
    SkinfoldSite::Thigh,
];

const POLLOCK3_FEMALE: [SkinfoldSite; 3] = [
    SkinfoldSite::Triceps,
    SkinfoldSite::Suprailiac,
    SkinfoldSite::Thigh,
];

const POLLOCK7: [SkinfoldSite; 7] = [
    SkinfoldSite::Chest,
    SkinfoldSite::Axillary,
    SkinfoldSite::Triceps,
    SkinfoldSite::Subscapular,
    SkinfoldSite::Abdominal,
    SkinfoldSite::Suprailiac,
    SkinfoldSite::Thigh,
];

const GUEDES_MALE: [SkinfoldSite; 3] = [
    SkinfoldSite::Triceps,
    SkinfoldSite::Suprailiac,
    SkinfoldSite::Abdominal,
];

const GUEDES_FEMALE: [SkinfoldSite; 3] = [
    SkinfoldSite::Subscapular,
    SkinfoldSite::Suprailiac,
    SkinfoldSite::Thigh,
];

impl Protocol {
    /// Every supported protocol
    pub const ALL: [Self; 3] = [Self::Pollock3, Self::Pollock7, Self::Guedes];

    /// Ordered sites whose sum feeds the density equation
    #[must_use]
    pub const fn required_sites(&self, gender: Gender) -> &'static [SkinfoldSite] {
        match (self, gender) {
            (Self::Pollock3, Gender::Male) => &POLLOCK3_MALE,
            (Self::Pollock3, Gender::Female) => &POLLOCK3_FEMALE,
            (Self::Pollock7, _) => &POLLOCK7,
            (Self::Guedes, Gender::Male) => &GUEDES_MALE,
            (Self::Guedes, Gender::Female) => &GUEDES_FEMALE,
        }
    }

    /// Get protocol name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pollock3 => "pollock3",
            Self::Pollock7 => "pollock7",
            Self::Guedes => "guedes",
        }
    }

    /// Get protocol description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Pollock3 => "Jackson-Pollock 3 skinfolds (gender-specific sites)",
            Self::Pollock7 => "Jackson-Pollock 7 skinfolds",
            Self::Guedes => "Guedes 3 skinfolds (Brazilian adults)",
        }
    }

    /// Get the published source of the equations
    #[must_use]
    pub const fn reference(&self) -> &'static str {
        match self {
            Self::Pollock3 | Self::Pollock7 => {
                "Jackson & Pollock (1978), Br J Nutr 40:497; Jackson, Pollock & Ward (1980), Med Sci Sports Exerc 12:175"
            }
            Self::Guedes => "Guedes (1985), Universidade Federal de Santa Maria",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Protocol {
    type Err = CompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pollock3" | "jackson_pollock_3" => Ok(Self::Pollock3),
            "pollock7" | "jackson_pollock_7" => Ok(Self::Pollock7),
            "guedes" => Ok(Self::Guedes),
            other => Err(CompositionError::UnknownCategory(format!(
                "Unknown protocol: '{other}'. Valid options: pollock3, pollock7, guedes"
            ))),
        }
    }
}

/// Ordered sites required by `protocol` for `gender`
#[must_use]
pub const fn required_sites(protocol: Protocol, gender: Gender) -> &'static [SkinfoldSite] {
    protocol.required_sites(gender)
}

/// Required sites that `measurement` does not yet hold, in protocol order
#[must_use]
pub fn missing_sites(
    protocol: Protocol,
    gender: Gender,
    measurement: &SkinfoldMeasurement,
) -> Vec<SkinfoldSite> {
    measurement.missing_from(protocol.required_sites(gender))
}

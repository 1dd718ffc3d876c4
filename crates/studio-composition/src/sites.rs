// ABOUTME: Skinfold measurement sites and the partial site-to-millimeter measurement map
// ABOUTME: Keeps "not measured" distinct from any recorded value; rejects impossible readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::CompositionError;

/// Anatomical location of one caliper measurement
///
/// Declaration order is the order used when listing sites; measurements are
/// always in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinfoldSite {
    /// Vertical fold on the posterior midline of the upper arm
    Triceps,
    /// Diagonal fold between the anterior axillary line and the nipple
    Chest,
    /// Vertical fold 2 cm to the right of the umbilicus
    Abdominal,
    /// Diagonal fold above the iliac crest
    Suprailiac,
    /// Vertical fold on the anterior midline of the thigh
    Thigh,
    /// Diagonal fold below the inferior angle of the scapula
    Subscapular,
    /// Vertical fold on the midaxillary line at the xiphoid level
    Axillary,
}

impl SkinfoldSite {
    /// Every site, in declaration order
    pub const ALL: [Self; 7] = [
        Self::Triceps,
        Self::Chest,
        Self::Abdominal,
        Self::Suprailiac,
        Self::Thigh,
        Self::Subscapular,
        Self::Axillary,
    ];

    /// Stable machine name (matches the serde representation)
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Triceps => "triceps",
            Self::Chest => "chest",
            Self::Abdominal => "abdominal",
            Self::Suprailiac => "suprailiac",
            Self::Thigh => "thigh",
            Self::Subscapular => "subscapular",
            Self::Axillary => "axillary",
        }
    }

    /// Human-readable label for forms and reports
    #[must_use]
    pub const fn display_label(&self) -> &'static str {
        match self {
            Self::Triceps => "Triceps",
            Self::Chest => "Chest (pectoral)",
            Self::Abdominal => "Abdominal",
            Self::Suprailiac => "Suprailiac",
            Self::Thigh => "Thigh",
            Self::Subscapular => "Subscapular",
            Self::Axillary => "Midaxillary",
        }
    }
}

/// Human-readable label for a site
#[must_use]
pub const fn display_label(site: SkinfoldSite) -> &'static str {
    site.display_label()
}

impl fmt::Display for SkinfoldSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SkinfoldSite {
    type Err = CompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "triceps" => Ok(Self::Triceps),
            "chest" | "pectoral" => Ok(Self::Chest),
            "abdominal" | "abdomen" => Ok(Self::Abdominal),
            "suprailiac" => Ok(Self::Suprailiac),
            "thigh" => Ok(Self::Thigh),
            "subscapular" => Ok(Self::Subscapular),
            "axillary" | "midaxillary" => Ok(Self::Axillary),
            other => Err(CompositionError::UnknownCategory(format!(
                "Unknown skinfold site: '{other}'. Valid options: triceps, chest, abdominal, suprailiac, thigh, subscapular, axillary"
            ))),
        }
    }
}

/// Partial mapping from site to caliper reading in millimeters
///
/// A site is either absent or holds a finite value above zero. Zero is never
/// used as a stand-in for "not measured".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<SkinfoldSite, f64>",
    into = "BTreeMap<SkinfoldSite, f64>"
)]
pub struct SkinfoldMeasurement {
    values: BTreeMap<SkinfoldSite, f64>,
}

impl SkinfoldMeasurement {
    /// Create an empty measurement
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a measurement from `(site, millimeters)` pairs
    ///
    /// # Errors
    ///
    /// Returns `CompositionError::InvalidMeasurement` for the first value that
    /// is not finite or not above zero
    pub fn from_pairs<I>(pairs: I) -> Result<Self, CompositionError>
    where
        I: IntoIterator<Item = (SkinfoldSite, f64)>,
    {
        pairs
            .into_iter()
            .try_fold(Self::new(), |measurement, (site, value)| {
                measurement.with(site, value)
            })
    }

    /// Builder form of [`Self::set`]
    ///
    /// # Errors
    ///
    /// Returns `CompositionError::InvalidMeasurement` if `millimeters` is not
    /// a finite value above zero
    pub fn with(mut self, site: SkinfoldSite, millimeters: f64) -> Result<Self, CompositionError> {
        self.set(site, millimeters)?;
        Ok(self)
    }

    /// Record a reading, returning the previous value for that site
    ///
    /// # Errors
    ///
    /// Returns `CompositionError::InvalidMeasurement` if `millimeters` is not
    /// a finite value above zero; the stored measurement is left unchanged
    pub fn set(
        &mut self,
        site: SkinfoldSite,
        millimeters: f64,
    ) -> Result<Option<f64>, CompositionError> {
        if !millimeters.is_finite() || millimeters <= 0.0 {
            return Err(CompositionError::InvalidMeasurement {
                site,
                value: millimeters,
            });
        }
        Ok(self.values.insert(site, millimeters))
    }

    /// Remove a reading, returning it if it was present
    pub fn clear(&mut self, site: SkinfoldSite) -> Option<f64> {
        self.values.remove(&site)
    }

    /// Reading for a site, if measured
    #[must_use]
    pub fn get(&self, site: SkinfoldSite) -> Option<f64> {
        self.values.get(&site).copied()
    }

    /// Whether a site has been measured
    #[must_use]
    pub fn is_set(&self, site: SkinfoldSite) -> bool {
        self.values.contains_key(&site)
    }

    /// Number of measured sites
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no site has been measured yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Measured sites and readings, in site order
    pub fn iter(&self) -> impl Iterator<Item = (SkinfoldSite, f64)> + '_ {
        self.values.iter().map(|(site, value)| (*site, *value))
    }

    /// Sites from `sites` that are not measured, preserving their order
    #[must_use]
    pub fn missing_from(&self, sites: &[SkinfoldSite]) -> Vec<SkinfoldSite> {
        sites
            .iter()
            .copied()
            .filter(|site| !self.is_set(*site))
            .collect()
    }

    /// Sum of exactly the given sites, or `None` if any of them is absent
    ///
    /// Readings for sites outside `sites` are ignored.
    #[must_use]
    pub fn sum_of(&self, sites: &[SkinfoldSite]) -> Option<f64> {
        sites
            .iter()
            .try_fold(0.0, |total, site| self.get(*site).map(|value| total + value))
    }
}

impl TryFrom<BTreeMap<SkinfoldSite, f64>> for SkinfoldMeasurement {
    type Error = CompositionError;

    fn try_from(values: BTreeMap<SkinfoldSite, f64>) -> Result<Self, Self::Error> {
        Self::from_pairs(values)
    }
}

impl From<SkinfoldMeasurement> for BTreeMap<SkinfoldSite, f64> {
    fn from(measurement: SkinfoldMeasurement) -> Self {
        measurement.values
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_zero_is_rejected_not_stored() {
        let mut measurement = SkinfoldMeasurement::new();
        let result = measurement.set(SkinfoldSite::Chest, 0.0);

        assert!(matches!(
            result,
            Err(CompositionError::InvalidMeasurement {
                site: SkinfoldSite::Chest,
                ..
            })
        ));
        assert!(!measurement.is_set(SkinfoldSite::Chest));
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let mut measurement = SkinfoldMeasurement::new();
        assert!(measurement.set(SkinfoldSite::Thigh, f64::NAN).is_err());
        assert!(measurement.set(SkinfoldSite::Thigh, f64::INFINITY).is_err());
        assert!(measurement.set(SkinfoldSite::Thigh, -4.0).is_err());
        assert!(measurement.is_empty());
    }

    #[test]
    fn test_set_returns_previous_and_clear_removes() {
        let mut measurement = SkinfoldMeasurement::new();
        assert_eq!(measurement.set(SkinfoldSite::Triceps, 12.0).unwrap(), None);
        assert_eq!(
            measurement.set(SkinfoldSite::Triceps, 13.5).unwrap(),
            Some(12.0)
        );
        assert_eq!(measurement.clear(SkinfoldSite::Triceps), Some(13.5));
        assert!(!measurement.is_set(SkinfoldSite::Triceps));
    }

    #[test]
    fn test_sum_of_ignores_extra_sites_and_requires_all_listed() {
        let measurement = SkinfoldMeasurement::from_pairs([
            (SkinfoldSite::Chest, 10.0),
            (SkinfoldSite::Abdominal, 20.0),
            (SkinfoldSite::Thigh, 15.0),
            (SkinfoldSite::Triceps, 99.0),
        ])
        .unwrap();

        let sites = [
            SkinfoldSite::Chest,
            SkinfoldSite::Abdominal,
            SkinfoldSite::Thigh,
        ];
        assert!((measurement.sum_of(&sites).unwrap() - 45.0).abs() < 1e-12);
        assert_eq!(
            measurement.sum_of(&[SkinfoldSite::Chest, SkinfoldSite::Axillary]),
            None
        );
    }

    #[test]
    fn test_missing_from_preserves_order() {
        let measurement = SkinfoldMeasurement::new()
            .with(SkinfoldSite::Abdominal, 20.0)
            .unwrap();
        let missing = measurement.missing_from(&[
            SkinfoldSite::Chest,
            SkinfoldSite::Abdominal,
            SkinfoldSite::Thigh,
        ]);

        assert_eq!(missing, vec![SkinfoldSite::Chest, SkinfoldSite::Thigh]);
    }

    #[test]
    fn test_deserialize_validates_values() {
        let parsed: SkinfoldMeasurement =
            serde_json::from_str(r#"{"chest": 10.0, "thigh": 15.5}"#).unwrap();
        assert_eq!(parsed.get(SkinfoldSite::Thigh), Some(15.5));

        let rejected = serde_json::from_str::<SkinfoldMeasurement>(r#"{"chest": 0.0}"#);
        assert!(rejected.is_err());
    }

    #[test]
    fn test_site_parsing_accepts_aliases_and_rejects_unknown() {
        assert_eq!(
            "Midaxillary".parse::<SkinfoldSite>().unwrap(),
            SkinfoldSite::Axillary
        );
        assert_eq!(
            " abdomen ".parse::<SkinfoldSite>().unwrap(),
            SkinfoldSite::Abdominal
        );
        assert!(matches!(
            "biceps".parse::<SkinfoldSite>(),
            Err(CompositionError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_every_site_has_distinct_label() {
        let mut labels: Vec<_> = SkinfoldSite::ALL.iter().map(|s| display_label(*s)).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), SkinfoldSite::ALL.len());
    }
}

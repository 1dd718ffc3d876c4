// ABOUTME: Qualitative body-fat bands per gender with display style hints
// ABOUTME: Half-open thresholds covering every non-negative percentage exactly once
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classification Table
//!
//! Bands follow the American Council on Exercise body-fat chart, with the
//! ACE "average" range split into `average` and `above_average` at its
//! midpoint. Each band is `[low, high)`; the last band is unbounded.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::protocols::Gender;

/// Display styling hint for a band (maps onto UI badge colors)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleHint {
    /// Neutral informational tone
    Info,
    /// Positive tone
    Success,
    /// Primary accent
    Primary,
    /// Mild attention
    Warning,
    /// Stronger attention
    Caution,
    /// Alert tone
    Danger,
}

impl StyleHint {
    /// Stable machine name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Primary => "primary",
            Self::Warning => "warning",
            Self::Caution => "caution",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for StyleHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the classification table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationBand {
    /// Machine label
    pub label: &'static str,
    /// Display styling hint
    pub style_hint: StyleHint,
    /// Inclusive lower bound (% fat)
    pub low: f64,
    /// Exclusive upper bound (% fat), `None` for the open-ended last band
    pub high: Option<f64>,
}

impl ClassificationBand {
    /// Whether `percentage` falls in `[low, high)`
    #[must_use]
    pub fn contains(&self, percentage: f64) -> bool {
        percentage >= self.low && self.high.is_none_or(|high| percentage < high)
    }
}

/// Result of classifying a fat percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Machine label of the matched band
    pub label: &'static str,
    /// Display styling hint of the matched band
    pub style_hint: StyleHint,
}

const fn band(
    label: &'static str,
    style_hint: StyleHint,
    low: f64,
    high: Option<f64>,
) -> ClassificationBand {
    ClassificationBand {
        label,
        style_hint,
        low,
        high,
    }
}

const MALE_BANDS: [ClassificationBand; 6] = [
    band("essential_fat", StyleHint::Info, 0.0, Some(6.0)),
    band("athletic", StyleHint::Success, 6.0, Some(14.0)),
    band("fitness", StyleHint::Primary, 14.0, Some(18.0)),
    band("average", StyleHint::Warning, 18.0, Some(22.0)),
    band("above_average", StyleHint::Caution, 22.0, Some(25.0)),
    band("obese", StyleHint::Danger, 25.0, None),
];

const FEMALE_BANDS: [ClassificationBand; 6] = [
    band("essential_fat", StyleHint::Info, 0.0, Some(14.0)),
    band("athletic", StyleHint::Success, 14.0, Some(21.0)),
    band("fitness", StyleHint::Primary, 21.0, Some(25.0)),
    band("average", StyleHint::Warning, 25.0, Some(29.0)),
    band("above_average", StyleHint::Caution, 29.0, Some(32.0)),
    band("obese", StyleHint::Danger, 32.0, None),
];

/// Ordered bands for a gender
#[must_use]
pub const fn bands_for(gender: Gender) -> &'static [ClassificationBand] {
    match gender {
        Gender::Male => &MALE_BANDS,
        Gender::Female => &FEMALE_BANDS,
    }
}

/// Classify a body-fat percentage
///
/// Negative or non-finite input falls into the first band; the table itself
/// covers `[0, inf)`.
#[must_use]
pub fn classify(fat_percentage: f64, gender: Gender) -> Classification {
    let bands = bands_for(gender);
    let matched = bands
        .iter()
        .find(|band| band.contains(fat_percentage))
        .unwrap_or(if fat_percentage.is_nan() || fat_percentage < 0.0 {
            &bands[0]
        } else {
            &bands[bands.len() - 1]
        });

    Classification {
        label: matched.label,
        style_hint: matched.style_hint,
    }
}

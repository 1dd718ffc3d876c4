// ABOUTME: Skinfold body-composition engine for gym and studio assessments
// ABOUTME: Protocol catalog, density equations, Siri conversion, mass split and classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Studio Composition
//!
//! Estimates body-fat percentage and lean/fat mass from caliper skinfold
//! measurements. Data flows one way:
//!
//! 1. [`protocols`] decides which sites a protocol needs for a gender
//! 2. [`density`] applies the protocol's regression to the site sum
//! 3. [`conversion`] turns density into fat percentage (Siri)
//! 4. [`derivation`] splits body weight into fat and lean mass
//! 5. [`engine`] gates on completeness and assembles the result
//!
//! [`classification`] is a separate lookup callers apply to the result.
//!
//! ```rust
//! use studio_composition::{
//!     calculate_body_fat_with, classify, CompositionConfig, Gender, Protocol,
//!     SkinfoldMeasurement, SkinfoldSite,
//! };
//!
//! let skinfolds = SkinfoldMeasurement::from_pairs([
//!     (SkinfoldSite::Chest, 10.0),
//!     (SkinfoldSite::Abdominal, 20.0),
//!     (SkinfoldSite::Thigh, 15.0),
//! ])?;
//! let config = CompositionConfig::default();
//! let result = calculate_body_fat_with(&config, Protocol::Pollock3, Gender::Male, 30, 80.0, &skinfolds)
//!     .ok_or("not computable")?;
//! assert_eq!(classify(result.body_fat_percentage, Gender::Male).label, "athletic");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Parallel evaluation of assessment histories
pub mod batch;
/// Body-fat classification bands
pub mod classification;
/// Environment-driven engine configuration
pub mod config;
/// Density to fat percentage conversion
pub mod conversion;
/// Body density regression equations
pub mod density;
/// Fat and lean mass derivation
pub mod derivation;
/// Calculation facade
pub mod engine;
/// Domain error taxonomy
pub mod errors;
/// Protocol catalog and gender
pub mod protocols;
/// Skinfold sites and measurements
pub mod sites;

pub use batch::{calculate_batch, calculate_batch_with};
pub use classification::{bands_for, classify, Classification, ClassificationBand, StyleHint};
pub use config::{CompositionConfig, ConfigError};
pub use conversion::{fat_percentage, round_to, siri_fat_percentage};
pub use density::{body_density, DensityEquation};
pub use derivation::{derive_masses, BodyMasses};
pub use engine::{
    calculate_body_fat, calculate_body_fat_with, try_calculate_body_fat,
    try_calculate_body_fat_with, CalculationResult, CompositionInput,
};
pub use errors::CompositionError;
pub use protocols::{missing_sites, required_sites, Gender, Protocol};
pub use sites::{display_label, SkinfoldMeasurement, SkinfoldSite};

// ABOUTME: Main library entry point for the Studio Engine body-composition platform
// ABOUTME: Re-exports the composition engine and core error types, and owns logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Studio Engine
//!
//! Calculation core of a gym and studio management system. Persistence,
//! scheduling, billing and UI live elsewhere; they call into this crate with
//! plain inputs `(protocol, gender, age, weight, skinfolds)` and store the
//! numbers that come back.
//!
//! ## Architecture
//!
//! - **`studio-core`**: unified `AppError`/`ErrorCode` and shared constants
//! - **`studio-composition`**: skinfold protocols, density equations, Siri
//!   conversion, mass derivation, classification and configuration
//! - **logging**: tracing-subscriber setup used by `studio-cli`

/// Logging configuration and subscriber setup
pub mod logging;

/// Body-composition engine
pub use studio_composition as composition;

/// Shared constants
pub use studio_core::constants;

/// Unified error handling
pub use studio_core::errors;

pub use studio_composition::{
    calculate_body_fat, classify, required_sites, CalculationResult, CompositionInput, Gender,
    Protocol, SkinfoldMeasurement, SkinfoldSite,
};
pub use studio_core::errors::{AppError, AppResult, ErrorCode};

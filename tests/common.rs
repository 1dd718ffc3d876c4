// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet test logging and complete skinfold sets per protocol
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `studio_engine`

use std::sync::Once;
use studio_engine::composition::{Gender, Protocol, SkinfoldMeasurement, SkinfoldSite};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Every protocol/gender combination
pub fn all_combinations() -> Vec<(Protocol, Gender)> {
    Protocol::ALL
        .iter()
        .flat_map(|&protocol| Gender::ALL.iter().map(move |&gender| (protocol, gender)))
        .collect()
}

/// Measurement with every required site of `protocol`/`gender` set to `millimeters`
pub fn uniform_measurement(
    protocol: Protocol,
    gender: Gender,
    millimeters: f64,
) -> SkinfoldMeasurement {
    SkinfoldMeasurement::from_pairs(
        protocol
            .required_sites(gender)
            .iter()
            .map(|&site| (site, millimeters)),
    )
    .unwrap()
}

/// Measurement with all seven sites set
pub fn full_measurement() -> SkinfoldMeasurement {
    SkinfoldMeasurement::from_pairs([
        (SkinfoldSite::Triceps, 13.0),
        (SkinfoldSite::Chest, 10.0),
        (SkinfoldSite::Abdominal, 20.0),
        (SkinfoldSite::Suprailiac, 15.0),
        (SkinfoldSite::Thigh, 15.0),
        (SkinfoldSite::Subscapular, 16.0),
        (SkinfoldSite::Axillary, 11.0),
    ])
    .unwrap()
}

/// The reference assessment: chest 10, abdominal 20, thigh 15
pub fn reference_pollock3_male() -> SkinfoldMeasurement {
    SkinfoldMeasurement::from_pairs([
        (SkinfoldSite::Chest, 10.0),
        (SkinfoldSite::Abdominal, 20.0),
        (SkinfoldSite::Thigh, 15.0),
    ])
    .unwrap()
}

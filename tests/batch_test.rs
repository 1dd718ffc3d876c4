// ABOUTME: Integration tests for parallel recomputation of assessment histories
// ABOUTME: Checks order preservation and agreement with one-at-a-time evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{all_combinations, init_test_logging, uniform_measurement};
use studio_engine::composition::{
    calculate_batch_with, CompositionConfig, CompositionInput, SkinfoldMeasurement,
};

fn history() -> Vec<CompositionInput> {
    all_combinations()
        .into_iter()
        .enumerate()
        .flat_map(|(index, (protocol, gender))| {
            let offset = f64::from(u32::try_from(index).unwrap());
            let complete = CompositionInput {
                protocol,
                gender,
                age_years: 25 + u32::try_from(index).unwrap(),
                weight_kg: 60.0 + offset,
                skinfolds: uniform_measurement(protocol, gender, 8.0 + offset),
            };
            let pending = CompositionInput {
                skinfolds: SkinfoldMeasurement::new(),
                ..complete.clone()
            };
            [complete, pending]
        })
        .collect()
}

#[test]
fn test_batch_matches_sequential_evaluation() {
    init_test_logging();
    let config = CompositionConfig::default();
    let inputs = history();

    let batch = calculate_batch_with(&config, &inputs);
    assert_eq!(batch.len(), inputs.len());

    for (input, result) in inputs.iter().zip(&batch) {
        assert_eq!(*result, input.evaluate_with(&config));
    }
}

#[test]
fn test_batch_preserves_pending_entries_in_place() {
    let config = CompositionConfig::default();
    let batch = calculate_batch_with(&config, &history());

    for (index, result) in batch.iter().enumerate() {
        assert_eq!(result.is_some(), index % 2 == 0, "entry {index}");
    }
}

#[test]
fn test_empty_history() {
    let batch = calculate_batch_with(&CompositionConfig::default(), &[]);
    assert!(batch.is_empty());
}

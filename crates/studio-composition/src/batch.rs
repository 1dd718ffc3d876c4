// ABOUTME: Parallel recomputation of a member's assessment history
// ABOUTME: Evaluates many independent inputs with rayon while preserving input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use rayon::prelude::*;
use tracing::debug;

use crate::config::CompositionConfig;
use crate::engine::{CalculationResult, CompositionInput};

/// Evaluate every input with the global configuration
#[must_use]
pub fn calculate_batch(inputs: &[CompositionInput]) -> Vec<Option<CalculationResult>> {
    calculate_batch_with(CompositionConfig::global(), inputs)
}

/// Evaluate every input with an explicit configuration
///
/// Output index `i` corresponds to input index `i`.
#[must_use]
pub fn calculate_batch_with(
    config: &CompositionConfig,
    inputs: &[CompositionInput],
) -> Vec<Option<CalculationResult>> {
    let results: Vec<_> = inputs
        .par_iter()
        .map(|input| input.evaluate_with(config))
        .collect();

    debug!(
        total = inputs.len(),
        computed = results.iter().filter(|r| r.is_some()).count(),
        "batch body composition evaluated"
    );
    results
}

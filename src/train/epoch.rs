//! Epoch-driven training over in-memory sample batches.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::train::loss::mean_squared_error;
use crate::SupervisedTrain;

/// One `(input, target)` training pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample<F> {
    /// Input vector presented to the model.
    pub input: Vec<F>,
    /// Expected output vector.
    pub target: Vec<F>,
}

impl<F> Sample<F> {
    /// Creates a sample from its parts.
    pub fn new(input: Vec<F>, target: Vec<F>) -> Self {
        Self { input, target }
    }
}

/// Trains `model` for `epochs` full passes over `samples` in order and
/// returns the mean squared error measured after each pass.
///
/// Samples are visited in slice order every epoch; shuffling, if wanted, is
/// the caller's concern (a deterministic stream from
/// [`crate::utils::init::SplitMix64`] works well for reproducible runs).
pub fn run_epochs<F, M, R>(model: &mut M, rule: &R, samples: &[Sample<F>], epochs: usize) -> Vec<F>
where
    F: Float + Send + Sync,
    M: SupervisedTrain<F, R> + Sync,
{
    let mut history = Vec::with_capacity(epochs);
    for _ in 0..epochs {
        for sample in samples {
            model.supervised_train(rule, &sample.input, &sample.target);
        }
        history.push(mean_squared_error(model, samples));
    }
    history
}

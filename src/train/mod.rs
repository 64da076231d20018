//! Training rules and batch-training helpers.
//!
//! A rule is a plain hyperparameter carrier; the semantics of an update live
//! in the model's trait impl for that rule. This keeps rules trivially
//! serializable and lets one model support several rules side by side.

use num_traits::Float;
use serde::{Deserialize, Serialize};

pub mod epoch;
pub mod loss;

pub use epoch::{run_epochs, Sample};
pub use loss::mean_squared_error;

/// Classic perceptron learning rule.
///
/// Weight updates are proportional to the raw output error; no derivative is
/// involved, so it also trains through non-differentiable activations such as
/// [`Activation::Step`](crate::activation::Activation::Step).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerceptronRule<F> {
    /// Learning rate applied to every weight update.
    pub rate: F,
}

impl<F: Float> PerceptronRule<F> {
    /// Creates the rule with the given learning rate.
    pub fn new(rate: F) -> Self {
        Self { rate }
    }
}

/// Stochastic gradient descent on the squared output error.
///
/// Models implementing [`BackpropTrain`](crate::BackpropTrain) for this rule
/// propagate the error signal backwards, which is what allows multi-layer
/// stacks to train.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientDescent<F> {
    /// Learning rate applied to every weight update.
    pub rate: F,
}

impl<F: Float> GradientDescent<F> {
    /// Creates the rule with the given learning rate.
    pub fn new(rate: F) -> Self {
        Self { rate }
    }
}

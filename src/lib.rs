//! Deterministic feedforward neural networks with explicit training rules.
//!
//! The crate is organized around three capability traits — [`Compute`],
//! [`SupervisedTrain`] and [`BackpropTrain`] — implemented by concrete model
//! types such as [`DenseLayer`](layer::DenseLayer) and
//! [`Network`](network::Network). Training behavior is selected by the rule
//! type ([`PerceptronRule`](train::PerceptronRule),
//! [`GradientDescent`](train::GradientDescent)) rather than baked into the
//! model, so a model can support several rules through separate trait impls.
//!
//! Everything in the crate is deterministic: weight initialization is driven
//! by caller-supplied generators or the seeded helpers in [`utils::init`],
//! and the optional `parallel` feature is required to produce bit-identical
//! results to the sequential path.

use num_traits::Float;

pub mod activation;
pub mod layer;
pub mod network;
pub mod topology;
pub mod train;
pub mod utils;

pub use activation::Activation;
pub use layer::DenseLayer;
pub use network::{Network, NetworkError};
pub use topology::{NetworkTopology, TopologyBuilder, TopologyError};
pub use train::{GradientDescent, PerceptronRule, Sample};

/// Capability of computing an output vector from an input vector.
///
/// Implementors declare their nominal input and output widths. `compute`
/// tolerates inputs of a different length: missing entries read as zero and
/// extra trailing entries are ignored, so callers batching heterogeneous
/// data do not need to pad explicitly.
pub trait Compute<F: Float> {
    /// Computes the output associated with the provided input.
    fn compute(&self, input: &[F]) -> Vec<F>;

    /// Nominal input width of this model.
    fn input_size(&self) -> usize;

    /// Nominal output width of this model.
    fn output_size(&self) -> usize;
}

/// Capability of being trained from `(input, target)` pairs under rule `R`.
///
/// The rule carries the hyperparameters; the model carries the state being
/// fitted. One call performs a single update step, so epoch iteration belongs
/// to the caller (or to [`train::run_epochs`]).
pub trait SupervisedTrain<F: Float, R>: Compute<F> {
    /// Applies one training step for the given sample.
    fn supervised_train(&mut self, rule: &R, input: &[F], target: &[F]);
}

/// Capability of backward error propagation under rule `R`.
///
/// In addition to updating its own state, the implementor returns the error
/// signal expressed in its input space. Stacked models feed that vector to
/// the preceding stage as its training target, which is how
/// [`Network`](network::Network) trains multi-layer stacks.
pub trait BackpropTrain<F: Float, R>: SupervisedTrain<F, R> {
    /// Applies one training step and returns the propagated error signal.
    fn backprop_train(&mut self, rule: &R, input: &[F], target: &[F]) -> Vec<F>;
}

//! Fully-connected feedforward layer.

use std::cmp::min;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::activation::Activation;
use crate::train::{GradientDescent, PerceptronRule};
use crate::{BackpropTrain, Compute, SupervisedTrain};

/// A fully-connected layer of output neurons.
///
/// Every input is connected to every output. With `X` the input vector, `W`
/// the weight matrix, `B` the biases and `f` the activation applied
/// component-wise, the forward pass computes:
///
/// ```text
/// Y = f( W*X + B )
/// ```
///
/// Training fits `W`; the recovered update rules leave `B` at its
/// initialized value, which the rule impls document.
///
/// # Representation
///
/// Weights are stored flat in row-major order: the coefficient connecting
/// input `i` to output `j` lives at `weights[j * inputs + i]`. The invariants
/// `weights.len() == inputs * biases.len()` and `biases.len() == outputs`
/// hold for every constructed layer and are preserved by training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer<F> {
    inputs: usize,
    weights: Vec<F>,
    biases: Vec<F>,
    activation: Activation,
}

impl<F: Float> DenseLayer<F> {
    /// Creates a layer with all weights set to 1 and all biases set to 0.
    pub fn new(inputs: usize, outputs: usize, activation: Activation) -> Self {
        Self {
            inputs,
            weights: vec![F::one(); inputs * outputs],
            biases: vec![F::zero(); outputs],
            activation,
        }
    }

    /// Creates a layer with all weights and biases drawn from `generator`,
    /// typically a seeded stream such as [`crate::utils::init::uniform_init`].
    pub fn from_fn<G>(inputs: usize, outputs: usize, activation: Activation, mut generator: G) -> Self
    where
        G: FnMut() -> F,
    {
        Self {
            inputs,
            weights: (0..inputs * outputs).map(|_| generator()).collect(),
            biases: (0..outputs).map(|_| generator()).collect(),
            activation,
        }
    }

    /// Returns the activation applied by this layer.
    pub const fn activation(&self) -> Activation {
        self.activation
    }

    /// Read-only view of the flat row-major weight matrix.
    pub fn weights(&self) -> &[F] {
        &self.weights
    }

    /// Read-only view of the bias vector.
    pub fn biases(&self) -> &[F] {
        &self.biases
    }

    /// Pre-activation sums `W*X + B`, shared by the forward pass and the
    /// backward pass (which needs them to evaluate the derivative).
    fn raw_output(&self, input: &[F]) -> Vec<F> {
        let mut out = self.biases.clone();
        let width = min(self.inputs, input.len());
        for (j, sum) in out.iter_mut().enumerate() {
            let row = &self.weights[j * self.inputs..j * self.inputs + width];
            for (w, x) in row.iter().zip(input) {
                *sum = *sum + *w * *x;
            }
        }
        out
    }
}

impl<F: Float> Compute<F> for DenseLayer<F> {
    fn compute(&self, input: &[F]) -> Vec<F> {
        let mut out = self.raw_output(input);
        for o in &mut out {
            *o = self.activation.value(*o);
        }
        out
    }

    fn input_size(&self) -> usize {
        self.inputs
    }

    fn output_size(&self) -> usize {
        self.biases.len()
    }
}

/// Perceptron learning: `w_ji += rate * (t_j - y_j) * x_i`.
///
/// Targets shorter than the output vector read as zero. Biases are not
/// updated by this rule.
impl<F: Float> SupervisedTrain<F, PerceptronRule<F>> for DenseLayer<F> {
    fn supervised_train(&mut self, rule: &PerceptronRule<F>, input: &[F], target: &[F]) {
        let out = self.compute(input);
        let width = min(self.inputs, input.len());
        for (j, y) in out.iter().enumerate() {
            let diff = target.get(j).copied().unwrap_or_else(F::zero) - *y;
            for i in 0..width {
                self.weights[j * self.inputs + i] =
                    self.weights[j * self.inputs + i] + rule.rate * diff * input[i];
            }
        }
    }
}

/// Gradient descent with backward propagation.
///
/// The deltas are the activation derivative evaluated at the pre-activation
/// sums. The returned vector is the input adjusted against the transposed
/// weights, `x_i - Σ_j w_ij * δ_j`, which a stacked model feeds to the
/// preceding layer as its target. Biases are not updated by this rule.
impl<F: Float> BackpropTrain<F, GradientDescent<F>> for DenseLayer<F> {
    fn backprop_train(&mut self, rule: &GradientDescent<F>, input: &[F], target: &[F]) -> Vec<F> {
        let mut out = self.raw_output(input);
        let deltas: Vec<F> = out.iter().map(|x| self.activation.derivative(*x)).collect();
        for o in &mut out {
            *o = self.activation.value(*o);
        }

        let width = min(self.inputs, input.len());
        let mut propagated = input.to_owned();
        for j in 0..self.biases.len() {
            let error = out[j] - target.get(j).copied().unwrap_or_else(F::zero);
            for i in 0..width {
                propagated[i] = propagated[i] - self.weights[j * self.inputs + i] * deltas[j];
                self.weights[j * self.inputs + i] = self.weights[j * self.inputs + i]
                    - rule.rate * input[i] * deltas[j] * error;
            }
        }
        propagated
    }
}

impl<F: Float> SupervisedTrain<F, GradientDescent<F>> for DenseLayer<F> {
    fn supervised_train(&mut self, rule: &GradientDescent<F>, input: &[F], target: &[F]) {
        self.backprop_train(rule, input, target);
    }
}

//! Activation functions applied component-wise to layer outputs.
//!
//! Activations are a closed enumeration rather than closures so that layers
//! remain `Copy`-cheap to describe, serializable, and free of closure type
//! parameters. Both the function and its derivative are evaluated at the
//! pre-activation sum, which is the quantity backpropagation needs.

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Component-wise activation function selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// `f(x) = x`; derivative 1 everywhere.
    Identity,
    /// Heaviside step: 1 for positive input, 0 otherwise. The derivative is
    /// defined as 0 everywhere, so gradient-based rules cannot train through
    /// it; it is intended for perceptron-rule classifiers.
    Step,
    /// Rectified linear unit: `max(0, x)`; derivative 1 for positive input,
    /// 0 otherwise.
    Relu,
    /// Logistic sigmoid: `1 / (1 + e^-x)`.
    Sigmoid,
    /// Hyperbolic tangent.
    Tanh,
}

impl Activation {
    /// Evaluates the activation at `x`.
    pub fn value<F: Float>(self, x: F) -> F {
        match self {
            Activation::Identity => x,
            Activation::Step => {
                if x > F::zero() {
                    F::one()
                } else {
                    F::zero()
                }
            }
            Activation::Relu => {
                if x > F::zero() {
                    x
                } else {
                    F::zero()
                }
            }
            Activation::Sigmoid => F::one() / (F::one() + (-x).exp()),
            Activation::Tanh => x.tanh(),
        }
    }

    /// Evaluates the derivative of the activation at the pre-activation `x`.
    pub fn derivative<F: Float>(self, x: F) -> F {
        match self {
            Activation::Identity => F::one(),
            Activation::Step => F::zero(),
            Activation::Relu => {
                if x > F::zero() {
                    F::one()
                } else {
                    F::zero()
                }
            }
            Activation::Sigmoid => {
                let s = self.value(x);
                s * (F::one() - s)
            }
            Activation::Tanh => {
                let t = x.tanh();
                F::one() - t * t
            }
        }
    }

    /// Three-letter code used in topology identifiers.
    pub const fn code(self) -> &'static str {
        match self {
            Activation::Identity => "IDE",
            Activation::Step => "STP",
            Activation::Relu => "REL",
            Activation::Sigmoid => "SIG",
            Activation::Tanh => "TAN",
        }
    }
}

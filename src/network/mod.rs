//! Sequential composition of dense layers.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::layer::DenseLayer;
use crate::train::GradientDescent;
use crate::{BackpropTrain, Compute, SupervisedTrain};

pub mod errors;

pub use errors::{NetworkError, NetworkResult};

/// A stack of [`DenseLayer`]s evaluated front to back.
///
/// Width compatibility between adjacent layers is validated once at
/// construction; every later operation can therefore assume a well-formed
/// stack. Deserialization routes through [`Network::new`] so hand-crafted
/// payloads cannot smuggle in a mismatched stack. Training with
/// [`GradientDescent`] runs the layer-level backward propagation through the
/// whole stack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Network<F> {
    layers: Vec<DenseLayer<F>>,
}

impl<'de, F> Deserialize<'de> for Network<F>
where
    F: Float + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw<F> {
            layers: Vec<DenseLayer<F>>,
        }
        let raw = Raw::<F>::deserialize(deserializer)?;
        Network::new(raw.layers).map_err(serde::de::Error::custom)
    }
}

impl<F: Float> Network<F> {
    /// Builds a network from an ordered layer stack.
    ///
    /// Fails with [`NetworkError::Empty`] for an empty stack and with
    /// [`NetworkError::LayerSizeMismatch`] when a layer's input width does
    /// not equal the previous layer's output width.
    pub fn new(layers: Vec<DenseLayer<F>>) -> NetworkResult<Self> {
        if layers.is_empty() {
            return Err(NetworkError::Empty);
        }
        for (index, pair) in layers.windows(2).enumerate() {
            let expected = pair[0].output_size();
            let got = pair[1].input_size();
            if expected != got {
                return Err(NetworkError::LayerSizeMismatch {
                    index: index + 1,
                    expected,
                    got,
                });
            }
        }
        Ok(Self { layers })
    }

    /// Number of layers in the stack.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Read-only view of the layer stack.
    pub fn layers(&self) -> &[DenseLayer<F>] {
        &self.layers
    }
}

impl<F: Float> Compute<F> for Network<F> {
    fn compute(&self, input: &[F]) -> Vec<F> {
        let mut current = input.to_owned();
        for layer in &self.layers {
            current = layer.compute(&current);
        }
        current
    }

    fn input_size(&self) -> usize {
        self.layers.first().map_or(0, |layer| layer.input_size())
    }

    fn output_size(&self) -> usize {
        self.layers.last().map_or(0, |layer| layer.output_size())
    }
}

/// Backward propagation through the stack.
///
/// A forward pass records the input seen by each layer; the backward pass
/// then trains the layers in reverse, feeding each layer's propagated error
/// vector to the layer below as its target. The vector returned from the
/// first layer is the error signal in network-input space.
impl<F: Float> BackpropTrain<F, GradientDescent<F>> for Network<F> {
    fn backprop_train(&mut self, rule: &GradientDescent<F>, input: &[F], target: &[F]) -> Vec<F> {
        let mut stage_inputs = Vec::with_capacity(self.layers.len());
        let mut current = input.to_owned();
        for layer in &self.layers {
            let next = layer.compute(&current);
            stage_inputs.push(current);
            current = next;
        }

        let mut signal = target.to_owned();
        for (layer, stage_input) in self.layers.iter_mut().zip(stage_inputs).rev() {
            signal = layer.backprop_train(rule, &stage_input, &signal);
        }
        signal
    }
}

impl<F: Float> SupervisedTrain<F, GradientDescent<F>> for Network<F> {
    fn supervised_train(&mut self, rule: &GradientDescent<F>, input: &[F], target: &[F]) {
        self.backprop_train(rule, input, target);
    }
}

#[cfg(test)]
mod tests {
    use super::{Network, NetworkError};
    use crate::activation::Activation;
    use crate::layer::DenseLayer;
    use crate::Compute;

    #[test]
    fn rejects_empty_stack() {
        assert_eq!(Network::<f64>::new(Vec::new()), Err(NetworkError::Empty));
    }

    #[test]
    fn rejects_width_mismatch() {
        let layers = vec![
            DenseLayer::<f64>::new(4, 3, Activation::Identity),
            DenseLayer::<f64>::new(2, 1, Activation::Identity),
        ];
        assert_eq!(
            Network::new(layers),
            Err(NetworkError::LayerSizeMismatch {
                index: 1,
                expected: 3,
                got: 2,
            })
        );
    }

    #[test]
    fn chains_layer_outputs() {
        // Two identity layers of ones: first maps [1,1] to [2,2,2]
        // (sum 2, bias 0), second maps that to [6].
        let layers = vec![
            DenseLayer::<f64>::new(2, 3, Activation::Identity),
            DenseLayer::<f64>::new(3, 1, Activation::Identity),
        ];
        let net = Network::new(layers).expect("widths line up");
        assert_eq!(net.input_size(), 2);
        assert_eq!(net.output_size(), 1);
        assert_eq!(net.compute(&[1.0, 1.0]), vec![6.0]);
    }
}

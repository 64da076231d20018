//! Builder for [`NetworkTopology`] values.

use crate::activation::Activation;

use super::{LayerTopology, NetworkTopology, TopologyError, TOPOLOGY_VERSION};

/// Incremental builder for a [`NetworkTopology`].
///
/// Fields are public so tests and callers can adjust a shape after cloning a
/// base builder; [`build`](TopologyBuilder::build) re-validates everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyBuilder {
    /// Network input width.
    pub inputs: usize,
    /// Ordered layer shapes accumulated so far.
    pub layers: Vec<LayerTopology>,
}

impl TopologyBuilder {
    /// Starts a topology with the given input width.
    pub fn new(inputs: usize) -> Self {
        Self {
            inputs,
            layers: Vec::new(),
        }
    }

    /// Appends a dense layer with `outputs` neurons and the given activation.
    pub fn layer(mut self, outputs: usize, activation: Activation) -> Self {
        self.layers.push(LayerTopology {
            outputs,
            activation,
        });
        self
    }

    /// Validates the accumulated shape and produces the topology.
    pub fn build(self) -> Result<NetworkTopology, TopologyError> {
        let topology = NetworkTopology {
            topology_version: TOPOLOGY_VERSION,
            inputs: self.inputs,
            layers: self.layers,
        };
        topology.validate()?;
        Ok(topology)
    }
}

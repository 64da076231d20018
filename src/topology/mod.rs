//! Declarative network descriptions.
//!
//! A [`NetworkTopology`] is the serializable shape of a network: input width
//! plus an ordered list of layer widths and activations, with no weights.
//! Topologies are validated once at build time, carry a schema version for
//! forward compatibility, and expose a deterministic [`topology_id`] suitable
//! for cache keys and log lines.
//!
//! [`topology_id`]: NetworkTopology::topology_id

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::activation::Activation;
use crate::layer::DenseLayer;
use crate::network::Network;

pub mod builder;

pub use builder::TopologyBuilder;

/// Version of the topology schema.
pub const TOPOLOGY_VERSION: u16 = 1;

/// Shape of one dense layer inside a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerTopology {
    /// Number of output neurons.
    pub outputs: usize,
    /// Activation applied by the layer.
    pub activation: Activation,
}

/// Validated shape of a feedforward network.
///
/// Construct through [`TopologyBuilder`]. Deserialized values are checked
/// again by [`NetworkTopology::instantiate`]; call
/// [`NetworkTopology::validate`] directly to surface shape errors earlier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkTopology {
    pub(crate) topology_version: u16,
    pub(crate) inputs: usize,
    pub(crate) layers: Vec<LayerTopology>,
}

impl NetworkTopology {
    /// Returns the schema version the value was built against.
    pub const fn topology_version(&self) -> u16 {
        self.topology_version
    }

    /// Returns the network input width.
    pub const fn inputs(&self) -> usize {
        self.inputs
    }

    /// Returns the ordered layer shapes.
    pub fn layers(&self) -> &[LayerTopology] {
        &self.layers
    }

    /// Returns the output width of the final layer.
    pub fn outputs(&self) -> usize {
        self.layers.last().map_or(0, |layer| layer.outputs)
    }

    /// Checks the structural invariants: at least one layer, and no zero
    /// widths anywhere.
    pub fn validate(&self) -> Result<(), TopologyError> {
        if self.inputs == 0 {
            return Err(TopologyError::ZeroInputWidth);
        }
        if self.layers.is_empty() {
            return Err(TopologyError::NoLayers);
        }
        for (index, layer) in self.layers.iter().enumerate() {
            if layer.outputs == 0 {
                return Err(TopologyError::ZeroLayerWidth { index });
            }
        }
        Ok(())
    }

    /// Produces a deterministic ASCII identifier for the topology.
    ///
    /// The identifier encodes input width, each layer's width and activation
    /// code, and the schema version, e.g. `NET_IN4_L8SIG_L1TAN_V1`.
    pub fn topology_id(&self) -> String {
        let mut id = format!("NET_IN{}", self.inputs);
        for layer in &self.layers {
            id.push_str(&format!("_L{}{}", layer.outputs, layer.activation.code()));
        }
        id.push_str(&format!("_V{}", self.topology_version));
        id
    }

    /// Builds a [`Network`] of this shape with all parameters drawn from
    /// `generator`.
    ///
    /// The shape is re-validated first, so a topology obtained through
    /// deserialization (which bypasses [`TopologyBuilder`]) is rejected here
    /// instead of producing an inconsistent stack.
    pub fn instantiate<F, G>(&self, mut generator: G) -> Result<Network<F>, TopologyError>
    where
        F: Float,
        G: FnMut() -> F,
    {
        self.validate()?;
        let mut width = self.inputs;
        let mut layers = Vec::with_capacity(self.layers.len());
        for layer in &self.layers {
            layers.push(DenseLayer::from_fn(
                width,
                layer.outputs,
                layer.activation,
                &mut generator,
            ));
            width = layer.outputs;
        }
        Ok(Network::new(layers).expect("validated widths chain by construction"))
    }
}

/// Structural errors detected while validating a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyError {
    /// The topology declared no layers.
    NoLayers,
    /// The network input width was zero.
    ZeroInputWidth,
    /// A layer declared zero output neurons.
    ZeroLayerWidth {
        /// Index of the offending layer.
        index: usize,
    },
}

impl core::fmt::Display for TopologyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TopologyError::NoLayers => write!(f, "topology must declare at least one layer"),
            TopologyError::ZeroInputWidth => write!(f, "network input width must be non-zero"),
            TopologyError::ZeroLayerWidth { index } => {
                write!(f, "layer {index} must have at least one output neuron")
            }
        }
    }
}

impl std::error::Error for TopologyError {}

//! Layer primitives for feedforward networks.
//! Currently limited to the fully-connected [`DenseLayer`].

pub mod dense;

pub use dense::DenseLayer;

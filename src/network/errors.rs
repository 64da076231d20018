//! Errors raised while assembling layer stacks.

use core::fmt;

/// Structural errors detected when constructing a [`Network`](super::Network).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    /// The layer stack was empty.
    Empty,
    /// A layer's input width does not match the previous layer's output width.
    LayerSizeMismatch {
        /// Index of the offending layer in the stack.
        index: usize,
        /// Output width of the previous layer.
        expected: usize,
        /// Declared input width of the offending layer.
        got: usize,
    },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Empty => write!(f, "network must contain at least one layer"),
            NetworkError::LayerSizeMismatch {
                index,
                expected,
                got,
            } => write!(
                f,
                "layer {index} expects {got} inputs but the previous layer produces {expected}"
            ),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Convenient alias for network-construction results.
pub type NetworkResult<T> = core::result::Result<T, NetworkError>;

//! Shared utilities: deterministic initialization and batch planning.

pub mod batch;
pub mod init;

pub use batch::{set_parallelism, BatchPlan, ParallelismGuard};
pub use init::{uniform_init, SplitMix64};

//! Execution planning for passes over sample batches.
//!
//! Batch helpers build one [`BatchPlan`] per pass. The plan fixes the chunk
//! size from the batch length alone and captures whether rayon may be used,
//! so a single value answers both scheduling questions and the decision
//! cannot change mid-pass. The process-wide switch exists so tests can
//! compare both execution paths in one process; without the `parallel`
//! feature every plan is sequential.

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
static BATCH_PARALLELISM: AtomicBool = AtomicBool::new(true);

/// Upper bound on the number of samples a worker takes per task.
const MAX_SAMPLES_PER_TASK: usize = 32;

/// Plan for one pass over a sample batch.
///
/// The chunk size depends only on the batch length, never on the worker
/// count, so task boundaries and reduction order are identical on every
/// machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    chunk: usize,
    parallel: bool,
}

impl BatchPlan {
    /// Plans a pass over `total_samples`, consulting the parallelism switch.
    pub fn for_samples(total_samples: usize) -> Self {
        Self {
            chunk: if total_samples == 0 {
                1
            } else {
                MAX_SAMPLES_PER_TASK.min(total_samples)
            },
            parallel: switch_enabled(),
        }
    }

    /// Number of samples a worker takes per task. Never zero.
    pub const fn chunk_size(&self) -> usize {
        self.chunk
    }

    /// Whether this pass may use rayon.
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }
}

#[cfg(feature = "parallel")]
fn switch_enabled() -> bool {
    BATCH_PARALLELISM.load(Ordering::SeqCst)
}

#[cfg(not(feature = "parallel"))]
fn switch_enabled() -> bool {
    false
}

/// Sets the parallelism switch, returning a guard that restores the previous
/// value on drop. Plans built while the guard is alive see the new setting.
#[cfg(feature = "parallel")]
pub fn set_parallelism(enabled: bool) -> ParallelismGuard {
    let previous = BATCH_PARALLELISM.swap(enabled, Ordering::SeqCst);
    ParallelismGuard { previous }
}

/// Sets the parallelism switch, returning a guard that restores the previous
/// value on drop. Without the `parallel` feature the switch has no effect.
#[cfg(not(feature = "parallel"))]
pub fn set_parallelism(_enabled: bool) -> ParallelismGuard {
    ParallelismGuard {}
}

/// Restores the previous parallelism setting when dropped.
pub struct ParallelismGuard {
    #[cfg(feature = "parallel")]
    previous: bool,
}

#[cfg(feature = "parallel")]
impl Drop for ParallelismGuard {
    fn drop(&mut self) {
        BATCH_PARALLELISM.store(self.previous, Ordering::SeqCst);
    }
}

#[cfg(not(feature = "parallel"))]
impl Drop for ParallelismGuard {
    fn drop(&mut self) {}
}

//! Batch loss evaluation.

use num_traits::Float;

use crate::train::epoch::Sample;
use crate::Compute;

/// Squared error of one prediction against its target, summed over
/// components. Missing target entries read as zero, mirroring the layer
/// training contract.
fn sample_error<F: Float, M: Compute<F>>(model: &M, sample: &Sample<F>) -> F {
    let out = model.compute(&sample.input);
    let mut acc = F::zero();
    for (j, y) in out.iter().enumerate() {
        let diff = *y - sample.target.get(j).copied().unwrap_or_else(F::zero);
        acc = acc + diff * diff;
    }
    acc
}

/// Mean squared error of `model` over `samples`.
///
/// Returns zero for an empty batch. With the `parallel` feature enabled and
/// a parallel [`BatchPlan`](crate::utils::BatchPlan), per-sample errors are
/// evaluated with rayon using the plan's deterministic chunking and reduced
/// in index order afterwards, so the result is bit-identical to the
/// sequential path.
pub fn mean_squared_error<F, M>(model: &M, samples: &[Sample<F>]) -> F
where
    F: Float + Send + Sync,
    M: Compute<F> + Sync,
{
    if samples.is_empty() {
        return F::zero();
    }

    #[cfg(feature = "parallel")]
    let errors: Vec<F> = {
        let plan = crate::utils::BatchPlan::for_samples(samples.len());
        if plan.is_parallel() {
            use rayon::prelude::*;
            samples
                .par_iter()
                .with_min_len(plan.chunk_size())
                .with_max_len(plan.chunk_size())
                .map(|sample| sample_error(model, sample))
                .collect()
        } else {
            samples.iter().map(|s| sample_error(model, s)).collect()
        }
    };
    #[cfg(not(feature = "parallel"))]
    let errors: Vec<F> = samples.iter().map(|s| sample_error(model, s)).collect();

    let total = errors.into_iter().fold(F::zero(), |acc, x| acc + x);

    total / F::from(samples.len()).unwrap_or_else(F::one)
}

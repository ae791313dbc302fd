/*!

The Monte-Carlo batch runner.

A batch is `runs` statistically independent single runs over the same
read-only network and disease. Each run re-applies the random seeding
procedure and consumes its own seeded generator, so runs never observe each
other's draws and the batch can be forked across rayon workers with no shared
mutable state. The estimate is the plain arithmetic mean of the per-run final
susceptible fractions; by the law of large numbers it converges to the
expected final-susceptible fraction as the run count grows.

*/
use std::time::{Duration, Instant};

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use serde::Serialize;

use crate::disease::DiseaseModel;
use crate::error::DirnError;
use crate::network::ContactNetwork;
use crate::population::PopulationState;
use crate::simulation::simulate;

/// The result of a batch: the estimate plus enough context to report it.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct BatchSummary {
    /// Mean over all runs of (susceptible nodes at the final step / N),
    /// in [0, 1].
    pub mean_susceptible_fraction: f64,
    pub runs: usize,
    /// Wall-clock time for the whole batch.
    pub elapsed: Duration,
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.4} ({:.3} s)",
            self.mean_susceptible_fraction,
            self.elapsed.as_secs_f64()
        )
    }
}

// Per-run seed streams are decorrelated by striding the base seed with a
// 64-bit odd constant (splitmix64 increment).
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

fn run_seed(base_seed: u64, run: usize) -> u64 {
    base_seed.wrapping_add((run as u64 + 1).wrapping_mul(SEED_STRIDE))
}

/// Estimates the expected final-susceptible fraction over `runs` independent
/// runs of `steps` steps each, every run seeding `initial_infectious` random
/// nodes.
///
/// Any run's failure aborts the whole batch: the aggregate has no meaning
/// over a mixed set of completed and failed runs.
pub fn run_batch(
    network: &ContactNetwork,
    disease: &DiseaseModel,
    initial_infectious: usize,
    steps: usize,
    runs: usize,
    base_seed: u64,
) -> Result<BatchSummary, DirnError> {
    if runs == 0 {
        return Err(DirnError::InvalidParameter(
            "batch must contain at least one run".to_string(),
        ));
    }

    let started = Instant::now();
    let node_count = network.node_count();
    let total: f64 = (0..runs)
        .into_par_iter()
        .map(|run| -> Result<f64, DirnError> {
            let mut rng = StdRng::seed_from_u64(run_seed(base_seed, run));
            let initial = PopulationState::seed_infectious(node_count, initial_infectious, &mut rng)?;
            let seeded_fraction = initial.susceptible_fraction();
            let history = simulate(network, disease, initial, steps, &mut rng)?;
            // A zero-step run never evolves past its seeding.
            Ok(history
                .final_state()
                .map_or(seeded_fraction, PopulationState::susceptible_fraction))
        })
        .try_reduce(|| 0.0, |a, b| Ok(a + b))?;

    let summary = BatchSummary {
        mean_susceptible_fraction: total / runs as f64,
        runs,
        elapsed: started.elapsed(),
    };
    info!("batch of {runs} runs finished: {summary}");
    Ok(summary)
}

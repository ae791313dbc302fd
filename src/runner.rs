/*!

File-paths-in facades over the simulation core, mirroring the two ways the
tool is driven: a single visualized run and a Monte-Carlo batch.

*/
use std::path::Path;
use std::time::Instant;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::batch::{BatchSummary, run_batch};
use crate::error::DirnError;
use crate::history;
use crate::io::{read_adjacency_file, read_disease_file};
use crate::parameters::Scenario;
use crate::population::PopulationState;
use crate::simulation::simulate;

/// A finished single run: the full visualization text plus a one-line
/// summary for display.
#[derive(Clone, Debug)]
pub struct VisualizationRun {
    /// Adjacency preamble, encoded history, `end` sentinel.
    pub text: String,
    /// Final susceptible fraction and wall-clock time, e.g. `0.4000 (0.012 s)`.
    pub summary: String,
}

/// Runs one simulation from input files and renders it for the external
/// visualizer.
pub fn run_visualization(
    network_path: impl AsRef<Path>,
    disease_path: impl AsRef<Path>,
    steps: usize,
    seed: u64,
) -> Result<VisualizationRun, DirnError> {
    let started = Instant::now();
    let network = read_adjacency_file(network_path)?;
    let (disease, initial_infectious) = read_disease_file(disease_path)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let initial =
        PopulationState::seed_infectious(network.node_count(), initial_infectious, &mut rng)?;
    let seeded_fraction = initial.susceptible_fraction();
    let history = simulate(&network, &disease, initial, steps, &mut rng)?;

    let mut text = network.adjacency_text();
    text.push_str(&history::encode(&history));
    let final_fraction = history
        .final_state()
        .map_or(seeded_fraction, PopulationState::susceptible_fraction);
    let summary = format!(
        "{:.4} ({:.3} s)",
        final_fraction,
        started.elapsed().as_secs_f64()
    );
    info!("visualized run finished: {summary}");
    Ok(VisualizationRun { text, summary })
}

/// Runs a Monte-Carlo batch from input files.
pub fn run_batch_files(
    network_path: impl AsRef<Path>,
    disease_path: impl AsRef<Path>,
    steps: usize,
    runs: usize,
    seed: u64,
) -> Result<BatchSummary, DirnError> {
    let network = read_adjacency_file(network_path)?;
    let (disease, initial_infectious) = read_disease_file(disease_path)?;
    run_batch(&network, &disease, initial_infectious, steps, runs, seed)
}

/// Runs the batch described by a [`Scenario`].
pub fn run_scenario(scenario: &Scenario) -> Result<BatchSummary, DirnError> {
    run_batch_files(
        &scenario.network,
        &scenario.disease,
        scenario.steps,
        scenario.runs,
        scenario.seed,
    )
}

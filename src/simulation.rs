/*!

The single-run driver: a fixed number of engine steps from an initial
population, recording a snapshot after every step.

*/
use log::debug;
use rand::Rng;

use crate::disease::DiseaseModel;
use crate::engine::step;
use crate::error::DirnError;
use crate::history::StateHistory;
use crate::network::ContactNetwork;
use crate::population::PopulationState;

/// Runs `steps` engine steps and returns the full history, one snapshot per
/// step.
///
/// The initial state is validated against the network before any step
/// executes; a failed run never emits a partial history. Given a seeded rng
/// the run is fully deterministic.
pub fn simulate<R: Rng + ?Sized>(
    network: &ContactNetwork,
    disease: &DiseaseModel,
    initial: PopulationState,
    steps: usize,
    rng: &mut R,
) -> Result<StateHistory, DirnError> {
    if initial.node_count() != network.node_count() {
        return Err(DirnError::InvalidParameter(format!(
            "initial population has {} nodes but the network has {}",
            initial.node_count(),
            network.node_count()
        )));
    }

    debug!(
        "simulating {steps} steps over {} nodes",
        network.node_count()
    );
    let mut state = initial;
    let mut history = StateHistory::with_capacity(steps);
    for _ in 0..steps {
        step(&mut state, network, disease, rng);
        history.record(state.clone());
    }
    Ok(history)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::population::Compartment;

    fn ring_network(n: usize) -> ContactNetwork {
        ContactNetwork::from_edges(n, (0..n).map(|i| (i, (i + 1) % n))).unwrap()
    }

    #[test]
    fn history_has_one_snapshot_per_step() {
        let network = ring_network(6);
        let disease = DiseaseModel::new(1, 2, 0.4).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let initial = PopulationState::seed_infectious(6, 1, &mut rng).unwrap();

        let history = simulate(&network, &disease, initial, 10, &mut rng).unwrap();
        assert_eq!(history.len(), 10);
        assert!(history.final_state().is_some());
    }

    #[test]
    fn zero_steps_is_an_empty_history() {
        let network = ring_network(4);
        let disease = DiseaseModel::new(0, 0, 0.5).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let initial = PopulationState::all_susceptible(4);

        let history = simulate(&network, &disease, initial, 0, &mut rng).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn rejects_mismatched_population() {
        let network = ring_network(4);
        let disease = DiseaseModel::new(0, 0, 0.5).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let initial = PopulationState::all_susceptible(5);

        assert!(matches!(
            simulate(&network, &disease, initial, 3, &mut rng),
            Err(DirnError::InvalidParameter(_))
        ));
    }

    #[test]
    fn identical_seeds_give_identical_histories() {
        let network = ring_network(8);
        let disease = DiseaseModel::new(1, 3, 0.35).unwrap();

        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let initial = PopulationState::seed_infectious(8, 2, &mut rng).unwrap();
            simulate(&network, &disease, initial, 25, &mut rng).unwrap()
        };

        assert_eq!(run(99), run(99));
    }

    #[test]
    fn removed_nodes_stay_removed_across_a_run() {
        let network = ring_network(8);
        let disease = DiseaseModel::new(0, 1, 0.8).unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        let initial = PopulationState::seed_infectious(8, 2, &mut rng).unwrap();

        let history = simulate(&network, &disease, initial, 30, &mut rng).unwrap();
        for node in 0..8 {
            let mut removed_seen = false;
            for state in history.iter() {
                if removed_seen {
                    assert_eq!(state.compartment(node), Compartment::Removed);
                }
                removed_seen |= state.compartment(node) == Compartment::Removed;
            }
        }
    }
}

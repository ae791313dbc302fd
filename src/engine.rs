/*!

The per-step transition engine.

One call to [`step`] advances a [`PopulationState`] by exactly one discrete
time unit. The three transition rules run in a fixed order — Infectious →
Removed, then Exposed → Infectious, then Susceptible → Exposed — and their
eligible sets are disjoint by pre-step compartment, so a node undergoes at
most one transition per step. Removed is terminal.

*/
use log::trace;
use rand::Rng;

use crate::disease::DiseaseModel;
use crate::network::ContactNetwork;
use crate::population::{Compartment, PopulationState};

/// Advances `state` by one step.
///
/// Dwell checks are strict: a node leaves a timed compartment only once its
/// accumulated day count exceeds the configured duration, so it spends
/// `duration + 1` steps there (day 1 is the entry step).
///
/// Transmission is computed over the nodes that are still Infectious after
/// the first two rules: a node leaving Infectious this step does not transmit
/// on its exit step, and a node entering Infectious this step does not
/// transmit on its entry step. Each transmitting neighbor of a Susceptible
/// node independently attempts exposure with the per-edge hazard; one uniform
/// draw per Susceptible node decides against the combined probability.
pub fn step<R: Rng + ?Sized>(
    state: &mut PopulationState,
    network: &ContactNetwork,
    disease: &DiseaseModel,
    rng: &mut R,
) {
    let node_count = state.node_count();
    let before: Vec<Compartment> = (0..node_count).map(|i| state.compartment(i)).collect();
    let mut moved = vec![false; node_count];

    // Infectious -> Removed
    for node in 0..node_count {
        if before[node] == Compartment::Infectious
            && state.days_in_compartment(node) > disease.infectious_duration
        {
            state.transition(node, Compartment::Removed);
            moved[node] = true;
        }
    }

    // Exposed -> Infectious
    for node in 0..node_count {
        if before[node] == Compartment::Exposed
            && state.days_in_compartment(node) > disease.exposed_duration
        {
            state.transition(node, Compartment::Infectious);
            moved[node] = true;
        }
    }

    // Susceptible -> Exposed. The transmitting set is recomputed every step:
    // pre-step Infectious nodes that did not just move to Removed.
    let transmitting: Vec<bool> = (0..node_count)
        .map(|node| before[node] == Compartment::Infectious && !moved[node])
        .collect();
    for node in 0..node_count {
        if before[node] != Compartment::Susceptible {
            continue;
        }
        let miss_all: f64 = network
            .neighbors(node)
            .filter(|&neighbor| transmitting[neighbor])
            .map(|_| 1.0 - disease.transmission_probability)
            .product();
        let exposure_probability = 1.0 - miss_all;
        // One draw per Susceptible node, taken unconditionally so the stream
        // consumed does not depend on the infectious set.
        let u: f64 = rng.random();
        if u < exposure_probability {
            trace!("node {node} exposed (p = {exposure_probability})");
            state.transition(node, Compartment::Exposed);
            moved[node] = true;
        }
    }

    // Day-counter advance: movers begin day 1 of their new compartment,
    // everyone else accrues a day.
    for node in 0..node_count {
        state.advance_day(node);
        debug_assert!(!moved[node] || state.days_in_compartment(node) == 1);
    }
}

/*!

Per-node disease state.

Every node is in exactly one compartment at all times; the `Compartment` enum
makes the exclusivity invariant unrepresentable rather than checked. Alongside
its compartment each node carries `days_in_compartment`, the count of
consecutive steps spent there, starting at 1 on the entry step.

*/
use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::error::DirnError;

/// One of the four mutually exclusive SEIR disease states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compartment {
    Susceptible,
    Exposed,
    Infectious,
    Removed,
}

impl Compartment {
    /// The wire code used by the visualization format: S=0, E=1, I=2, R=3.
    #[must_use]
    #[inline(always)]
    pub fn code(self) -> u8 {
        match self {
            Compartment::Susceptible => 0,
            Compartment::Exposed => 1,
            Compartment::Infectious => 2,
            Compartment::Removed => 3,
        }
    }

    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Compartment::Susceptible),
            1 => Some(Compartment::Exposed),
            2 => Some(Compartment::Infectious),
            3 => Some(Compartment::Removed),
            _ => None,
        }
    }
}

/// A node's compartment plus its day counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeState {
    pub compartment: Compartment,
    pub days_in_compartment: u32,
}

/// The mutable state of the whole population, evolved one step at a time by
/// the engine and snapshotted into a history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopulationState {
    nodes: Vec<NodeState>,
}

impl PopulationState {
    /// Every node Susceptible on day 1.
    #[must_use]
    pub fn all_susceptible(node_count: usize) -> Self {
        PopulationState {
            nodes: vec![
                NodeState {
                    compartment: Compartment::Susceptible,
                    days_in_compartment: 1,
                };
                node_count
            ],
        }
    }

    /// One node per compartment in the given order, each on day 1 of its
    /// compartment.
    #[must_use]
    pub fn from_compartments(compartments: impl IntoIterator<Item = Compartment>) -> Self {
        PopulationState {
            nodes: compartments
                .into_iter()
                .map(|compartment| NodeState {
                    compartment,
                    days_in_compartment: 1,
                })
                .collect(),
        }
    }

    /// The standard initial seeding: `initial_infectious` distinct nodes,
    /// drawn uniformly without replacement, start Infectious on day 1; every
    /// other node starts Susceptible on day 1.
    pub fn seed_infectious<R: Rng + ?Sized>(
        node_count: usize,
        initial_infectious: usize,
        rng: &mut R,
    ) -> Result<Self, DirnError> {
        if node_count == 0 {
            return Err(DirnError::InvalidParameter(
                "population must have at least one node".to_string(),
            ));
        }
        if initial_infectious > node_count {
            return Err(DirnError::InvalidParameter(format!(
                "cannot seed {initial_infectious} infectious nodes in a population of {node_count}"
            )));
        }
        let mut state = Self::all_susceptible(node_count);
        for node in index::sample(rng, node_count, initial_infectious) {
            state.nodes[node].compartment = Compartment::Infectious;
        }
        Ok(state)
    }

    #[must_use]
    #[inline(always)]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    #[inline(always)]
    pub fn compartment(&self, node: usize) -> Compartment {
        self.nodes[node].compartment
    }

    #[must_use]
    #[inline(always)]
    pub fn days_in_compartment(&self, node: usize) -> u32 {
        self.nodes[node].days_in_compartment
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeState> {
        self.nodes.iter()
    }

    /// How many nodes are currently in `compartment`.
    #[must_use]
    pub fn count(&self, compartment: Compartment) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.compartment == compartment)
            .count()
    }

    /// Fraction of the population still Susceptible, in [0, 1].
    #[must_use]
    pub fn susceptible_fraction(&self) -> f64 {
        self.count(Compartment::Susceptible) as f64 / self.nodes.len() as f64
    }

    pub(crate) fn transition(&mut self, node: usize, to: Compartment) {
        self.nodes[node].compartment = to;
        self.nodes[node].days_in_compartment = 0;
    }

    pub(crate) fn advance_day(&mut self, node: usize) {
        self.nodes[node].days_in_compartment += 1;
    }
}

/*!

Run histories and the visualization text encoding.

A [`StateHistory`] is the artifact a run leaves behind: one population
snapshot per completed step. The encoding consumed by the external renderer
lists, for each step, the members of each compartment in S, E, I, R order as
`"<node> <code>"` lines, separates steps with a blank line, and terminates
with the literal line `end`. Day counters are never emitted.

*/
use std::fmt::Write as _;
use std::io;
use std::ops::Index;

use crate::network::ContactNetwork;
use crate::population::{Compartment, PopulationState};

/// Ordered snapshots of a single run, one per completed step.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct StateHistory {
    steps: Vec<PopulationState>,
}

impl StateHistory {
    #[must_use]
    pub fn new() -> Self {
        StateHistory { steps: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(steps: usize) -> Self {
        StateHistory {
            steps: Vec::with_capacity(steps),
        }
    }

    pub(crate) fn record(&mut self, snapshot: PopulationState) {
        self.steps.push(snapshot);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PopulationState> {
        self.steps.iter()
    }

    /// The state after the last completed step, if any step ran.
    #[must_use]
    pub fn final_state(&self) -> Option<&PopulationState> {
        self.steps.last()
    }
}

impl Index<usize> for StateHistory {
    type Output = PopulationState;

    fn index(&self, step: usize) -> &PopulationState {
        &self.steps[step]
    }
}

const TERMINATOR: &str = "end";

/// Encodes a history into the renderer's step format (without the topology
/// preamble).
#[must_use]
pub fn encode(history: &StateHistory) -> String {
    let mut text = String::new();
    for state in history.iter() {
        for compartment in [
            Compartment::Susceptible,
            Compartment::Exposed,
            Compartment::Infectious,
            Compartment::Removed,
        ] {
            for node in 0..state.node_count() {
                if state.compartment(node) == compartment {
                    let _ = writeln!(text, "{node} {}", compartment.code());
                }
            }
        }
        // Blank line between steps, emitted even for an empty step.
        text.push('\n');
    }
    text.push_str(TERMINATOR);
    text.push('\n');
    text
}

/// Writes the complete visualization file: the raw adjacency-list text, so
/// the renderer has the topology, followed by the encoded history.
pub fn write_visualization<W: io::Write>(
    writer: &mut W,
    network: &ContactNetwork,
    history: &StateHistory,
) -> io::Result<()> {
    writer.write_all(network.adjacency_text().as_bytes())?;
    writer.write_all(encode(history).as_bytes())
}

/*!

A static contact network: one node per individual, one undirected edge per
possible transmission channel.

The adjacency relation is symmetric by construction and immutable once a
network is built, so a `ContactNetwork` can be shared read-only across
concurrent simulation runs.

*/
use std::fmt::Write as _;

use crate::error::DirnError;

/// Symmetric 0/1 adjacency over a fixed set of nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactNetwork {
    node_count: usize,
    // Row-major N×N. `adjacency[i*n + j] == adjacency[j*n + i]` always holds;
    // the diagonal is stored but irrelevant to transmission.
    adjacency: Vec<bool>,
}

impl ContactNetwork {
    /// Creates an edgeless network over `node_count` nodes.
    pub fn with_node_count(node_count: usize) -> Result<Self, DirnError> {
        if node_count == 0 {
            return Err(DirnError::InvalidParameter(
                "contact network must have at least one node".to_string(),
            ));
        }
        Ok(ContactNetwork {
            node_count,
            adjacency: vec![false; node_count * node_count],
        })
    }

    /// Builds a network from an undirected edge list. Each pair is recorded
    /// in both orientations; listing an edge twice, or in both orientations,
    /// is harmless.
    pub fn from_edges(
        node_count: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, DirnError> {
        let mut network = Self::with_node_count(node_count)?;
        for (i, j) in edges {
            network.insert_edge(i, j)?;
        }
        Ok(network)
    }

    fn insert_edge(&mut self, i: usize, j: usize) -> Result<(), DirnError> {
        let n = self.node_count;
        if i >= n || j >= n {
            return Err(DirnError::InvalidParameter(format!(
                "edge ({i}, {j}) out of range for {n} nodes"
            )));
        }
        self.adjacency[i * n + j] = true;
        self.adjacency[j * n + i] = true;
        Ok(())
    }

    #[must_use]
    #[inline(always)]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    #[must_use]
    #[inline(always)]
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.adjacency[i * self.node_count + j]
    }

    /// Iterates the neighbors of `node` in ascending index order. A stored
    /// self-loop is not a neighbor.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        let n = self.node_count;
        self.adjacency[node * n..(node + 1) * n]
            .iter()
            .enumerate()
            .filter(move |(j, present)| **present && *j != node)
            .map(|(j, _)| j)
    }

    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.neighbors(node).count()
    }

    /// Renders the network back into the adjacency-list input format: the
    /// node count, one `"i j"` line per edge with `i < j`, and a terminating
    /// blank line. Used as the topology preamble of a visualization file.
    #[must_use]
    pub fn adjacency_text(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "{}", self.node_count);
        for i in 0..self.node_count {
            for j in (i + 1)..self.node_count {
                if self.has_edge(i, j) {
                    let _ = writeln!(text, "{i} {j}");
                }
            }
        }
        text.push('\n');
        text
    }
}

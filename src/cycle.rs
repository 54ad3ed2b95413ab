use std::fmt;

use itertools::Itertools;

use crate::encoding::VarMap;
use crate::graph::Graph;
use crate::solver::Model;

/// An ordered traversal of the graph: `vertices()[i]` is the vertex at
/// cycle position `i + 1`. Stored open; `Display` renders the closed walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    path: Vec<u32>,
}

/// Read the cycle out of a satisfying model: vertex `v` sits at position
/// `p` iff `var(v, p)` is true. A model of a correctly encoded instance
/// assigns exactly one vertex per position, so no validation happens here;
/// `is_hamiltonian` is available for harnesses that want the check.
pub fn decode(vars: &VarMap, model: &Model) -> Cycle {
    let n = vars.vertex_count();
    let mut path = vec![0; n as usize];
    for v in 1..=n {
        for p in 1..=n {
            if model.contains(vars.var(v, p)) {
                path[p as usize - 1] = v;
            }
        }
    }
    Cycle { path }
}

impl Cycle {
    pub fn vertices(&self) -> &[u32] {
        &self.path
    }

    /// True iff this is a hamiltonian cycle of `graph`: every vertex
    /// appears exactly once and consecutive positions, wraparound
    /// included, are joined by edges.
    pub fn is_hamiltonian(&self, graph: &Graph) -> bool {
        let n = graph.vertex_count();
        if self.path.len() != n as usize {
            return false;
        }
        let mut seen = self.path.clone();
        seen.sort_unstable();
        if !seen.into_iter().eq(graph.vertices()) {
            return false;
        }
        (0..self.path.len()).all(|i| {
            let next = (i + 1) % self.path.len();
            graph.adjacent(self.path[i], self.path[next])
        })
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let closed = self.path.iter().chain(self.path.first());
        write!(f, "{}", closed.map(|v| v.to_string()).join(" -> "))
    }
}

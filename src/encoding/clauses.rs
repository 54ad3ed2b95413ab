use itertools::Itertools;
use log::{debug, trace};

use crate::encoding::VarMap;
use crate::graph::Graph;
use crate::{Clause, CnfInstance, Literal};

/// Generates the CNF whose satisfying assignments are exactly the
/// hamiltonian cycles of the graph. Five clause families, emitted in a
/// fixed order with ascending loop indices so output is deterministic.
pub struct Encoder<'a> {
    graph: &'a Graph,
    vars: VarMap,
}

impl<'a> Encoder<'a> {
    pub fn new(graph: &'a Graph) -> Encoder<'a> {
        Encoder {
            graph,
            vars: VarMap::new(graph.vertex_count()),
        }
    }

    pub fn var_map(&self) -> VarMap {
        self.vars
    }

    pub fn encode(&self) -> CnfInstance {
        let mut clauses = vec![];
        self.position_cover(&mut clauses);
        self.position_uniqueness(&mut clauses);
        self.vertex_cover(&mut clauses);
        self.vertex_uniqueness(&mut clauses);
        self.adjacency(&mut clauses);
        debug!(
            "encoded {} vertices into {} clauses over {} variables",
            self.graph.vertex_count(),
            clauses.len(),
            self.vars.variable_count()
        );
        CnfInstance::new(self.vars.variable_count(), clauses)
    }

    fn positions(&self) -> impl Iterator<Item = u32> + Clone {
        1..=self.graph.vertex_count()
    }

    fn lit(&self, vertex: u32, position: u32, polarity: bool) -> Literal {
        Literal::new(self.vars.var(vertex, position), polarity)
    }

    // At least one vertex occupies each position.
    fn position_cover(&self, out: &mut Vec<Clause>) {
        for p in self.positions() {
            let lits = self.graph.vertices().map(|v| self.lit(v, p, true)).collect();
            out.push(Clause::new(lits));
        }
        trace!("position-cover: {} clauses total", out.len());
    }

    // At most one vertex occupies each position.
    fn position_uniqueness(&self, out: &mut Vec<Clause>) {
        for p in self.positions() {
            for (u, v) in self.graph.vertices().tuple_combinations() {
                out.push(Clause::new(vec![
                    self.lit(u, p, false),
                    self.lit(v, p, false),
                ]));
            }
        }
        trace!("position-uniqueness: {} clauses total", out.len());
    }

    // Every vertex is placed at some position.
    fn vertex_cover(&self, out: &mut Vec<Clause>) {
        for v in self.graph.vertices() {
            let lits = self.positions().map(|p| self.lit(v, p, true)).collect();
            out.push(Clause::new(lits));
        }
        trace!("vertex-cover: {} clauses total", out.len());
    }

    // No vertex is placed at two positions.
    fn vertex_uniqueness(&self, out: &mut Vec<Clause>) {
        for v in self.graph.vertices() {
            for (i, j) in self.positions().tuple_combinations() {
                out.push(Clause::new(vec![
                    self.lit(v, i, false),
                    self.lit(v, j, false),
                ]));
            }
        }
        trace!("vertex-uniqueness: {} clauses total", out.len());
    }

    // Non-adjacent vertices never occupy consecutive positions. Position
    // pairs run (1,2)..(n-1,n) and then wrap with (n,1); self-pairs are
    // skipped since a vertex cannot follow itself in the cycle.
    fn adjacency(&self, out: &mut Vec<Clause>) {
        let n = self.graph.vertex_count();
        for p in 1..=n {
            let q = p % n + 1;
            for u in self.graph.vertices() {
                for v in self.graph.vertices() {
                    if u == v || self.graph.adjacent(u, v) {
                        continue;
                    }
                    out.push(Clause::new(vec![
                        self.lit(u, p, false),
                        self.lit(v, q, false),
                    ]));
                }
            }
        }
        trace!("adjacency: {} clauses total", out.len());
    }
}

use super::Clause;

/// A complete CNF formula: a variable count and the clauses over those
/// variables. Every literal references a variable in `[1, variable_count]`.
#[derive(Clone, Debug)]
pub struct CnfInstance {
    variable_count: u64,
    clauses: Vec<Clause>,
}

impl CnfInstance {
    pub fn new(variable_count: u64, clauses: Vec<Clause>) -> CnfInstance {
        debug_assert!(clauses
            .iter()
            .flat_map(|cl| cl.literals())
            .all(|lit| lit.var().0 >= 1 && lit.var().0 <= variable_count));
        CnfInstance {
            variable_count,
            clauses,
        }
    }

    pub fn variable_count(&self) -> u64 {
        self.variable_count
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}

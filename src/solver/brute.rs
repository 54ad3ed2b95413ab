// A tiny backtracking solver so scenario tests don't depend on a solver
// binary being installed. Test-only; the crate's public surface delegates
// solving to an external engine.
use fnv::FnvHashMap;

use crate::solver::{Model, Outcome, SatSolver, SolverError};
use crate::{Clause, CnfInstance, Literal, Variable};

pub(crate) struct BruteForceSolver;

enum Evaluation {
    True,
    False,
    Unknown,
}

fn evaluate(clause: &Clause, assignment: &FnvHashMap<Variable, bool>) -> Evaluation {
    let mut unknown = false;
    for lit in clause.literals() {
        match assignment.get(&lit.var()) {
            Some(&value) if value == lit.polarity() => return Evaluation::True,
            Some(_) => {}
            None => unknown = true,
        }
    }
    if unknown {
        Evaluation::Unknown
    } else {
        Evaluation::False
    }
}

fn search(cnf: &CnfInstance, next: u64, assignment: &mut FnvHashMap<Variable, bool>) -> bool {
    let mut undecided = false;
    for clause in cnf.clauses() {
        match evaluate(clause, assignment) {
            Evaluation::False => return false,
            Evaluation::Unknown => undecided = true,
            Evaluation::True => {}
        }
    }
    if !undecided || next > cnf.variable_count() {
        return true;
    }
    for value in [true, false] {
        assignment.insert(Variable(next), value);
        if search(cnf, next + 1, assignment) {
            return true;
        }
    }
    assignment.remove(&Variable(next));
    false
}

impl SatSolver for BruteForceSolver {
    fn solve(&mut self, cnf: &CnfInstance) -> Result<Outcome, SolverError> {
        let mut assignment = FnvHashMap::default();
        if search(cnf, 1, &mut assignment) {
            let literals = assignment
                .iter()
                .map(|(&var, &value)| Literal::new(var, value));
            Ok(Outcome::Satisfiable(Model::from_literals(literals)))
        } else {
            Ok(Outcome::Unsatisfiable)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn cnf(variable_count: u64, clauses: Vec<Vec<i64>>) -> CnfInstance {
        let clauses = clauses
            .into_iter()
            .map(|codes| {
                Clause::new(
                    codes
                        .into_iter()
                        .map(|c| Literal::from_code(c).unwrap())
                        .collect(),
                )
            })
            .collect();
        CnfInstance::new(variable_count, clauses)
    }

    #[test]
    fn test_contradiction_is_unsat() {
        let instance = cnf(1, vec![vec![1], vec![-1]]);
        let outcome = BruteForceSolver.solve(&instance).unwrap();
        assert!(outcome.model().is_none());
    }

    #[test]
    fn test_unit_chain_is_sat() {
        let instance = cnf(2, vec![vec![1, 2], vec![-1]]);
        let outcome = BruteForceSolver.solve(&instance).unwrap();
        let model = outcome.model().unwrap();
        assert!(model.contains(Variable(2)));
        assert!(!model.contains(Variable(1)));
    }
}

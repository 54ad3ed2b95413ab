use std::{io, num};

use fnv::FnvHashSet;
use thiserror::Error;

use crate::{CnfInstance, Literal, Variable};

mod external;
pub use crate::solver::external::ExternalSolver;

#[cfg(test)]
pub(crate) mod brute;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("failed to launch solver `{0}`")]
    Launch(String, #[source] io::Error),
    #[error("io error")]
    IO(#[from] io::Error),
    #[error("solver `{program}` failed: {status}")]
    Internal { program: String, status: std::process::ExitStatus },
    #[error("unexpected solver output: {0}")]
    MalformedOutput(String),
    #[error("not a valid value")]
    ParseError(#[from] num::ParseIntError),
}

/// The variables a satisfying assignment makes true. Variables absent from
/// the model are false.
#[derive(Clone, Debug, Default)]
pub struct Model {
    values: FnvHashSet<Variable>,
}

impl Model {
    pub fn new() -> Model {
        Model {
            values: FnvHashSet::default(),
        }
    }

    pub fn from_literals<I: IntoIterator<Item = Literal>>(lits: I) -> Model {
        let mut model = Model::new();
        for lit in lits {
            if lit.polarity() {
                model.insert(lit.var());
            }
        }
        model
    }

    pub fn insert(&mut self, var: Variable) {
        self.values.insert(var);
    }

    pub fn contains(&self, var: Variable) -> bool {
        self.values.contains(&var)
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }
}

#[derive(Clone, Debug)]
pub enum Outcome {
    Satisfiable(Model),
    Unsatisfiable,
}

impl Outcome {
    pub fn model(&self) -> Option<&Model> {
        match self {
            Outcome::Satisfiable(model) => Some(model),
            Outcome::Unsatisfiable => None,
        }
    }
}

/// The boundary to the SAT engine: one synchronous call per instance.
/// UNSAT is a valid outcome, never an error.
pub trait SatSolver {
    fn solve(&mut self, cnf: &CnfInstance) -> Result<Outcome, SolverError>;
}

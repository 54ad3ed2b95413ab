// The `instance` module contains the CNF data model. These types are immutable.
mod literal;
pub use crate::instance::literal::{Literal, Variable, MAX_VARIABLE};

mod clause;
pub use crate::instance::clause::Clause;

mod cnf;
pub use crate::instance::cnf::CnfInstance;

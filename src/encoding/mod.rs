// The reduction itself: a (vertex, position) variable scheme and the clause
// families that force satisfying assignments to be hamiltonian cycles.
mod var_map;
pub use crate::encoding::var_map::VarMap;

mod clauses;
pub use crate::encoding::clauses::Encoder;

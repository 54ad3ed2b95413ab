pub mod cycle;
pub mod dimacs;
pub mod encoding;
pub mod graph;
pub mod instance;
pub mod solver;

use instance::*;

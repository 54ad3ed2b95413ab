use std::{env, io, process};

use hamsat::encoding::Encoder;
use hamsat::graph::{Graph, GraphError};
use hamsat::solver::{ExternalSolver, Outcome, SatSolver, SolverError};
use hamsat::{cycle, dimacs};

use thiserror::Error;

#[derive(Error, Debug)]
enum Error {
    #[error("failed to read graph: {0}")]
    Graph(#[from] GraphError),
    #[error("solving failed: {0}")]
    Solver(#[from] SolverError),
    #[error("io error")]
    IO(#[from] io::Error),
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let filepath = match args.len() {
        2 => args.get(1).unwrap(),
        _ => {
            eprintln!("hamsat [path to graph file]");
            process::exit(-1);
        }
    };
    match run(filepath) {
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("execution failed");
            process::exit(-1);
        }
        Ok(()) => return,
    }
}

fn run(filepath: &str) -> Result<(), Error> {
    let graph = Graph::parse(filepath)?;
    let encoder = Encoder::new(&graph);
    let cnf = encoder.encode();

    let mut stdout = io::stdout().lock();
    dimacs::write(&mut stdout, &cnf)?;
    drop(stdout);

    let program = env::var("HAMSAT_SOLVER").unwrap_or_else(|_| "cadical".to_string());
    let mut solver = ExternalSolver::new(&program);
    match solver.solve(&cnf)? {
        Outcome::Satisfiable(model) => {
            println!("SAT");
            println!(
                "Hamiltonian Cycle: {}",
                cycle::decode(&encoder.var_map(), &model)
            );
        }
        Outcome::Unsatisfiable => {
            println!("UNSAT");
            println!("No Hamiltonian Cycle exists.");
        }
    }
    Ok(())
}

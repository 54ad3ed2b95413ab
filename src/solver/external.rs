use std::io::Write;
use std::process::{Command, ExitStatus};

use log::{debug, trace};
use tempfile::NamedTempFile;

use crate::solver::{Model, Outcome, SatSolver, SolverError};
use crate::{dimacs, CnfInstance, Literal, MAX_VARIABLE};

// SAT-competition convention
const EXIT_SATISFIABLE: i32 = 10;
const EXIT_UNSATISFIABLE: i32 = 20;

/// Adapter for a SAT-competition style solver binary (cadical, kissat,
/// glucose, ...): DIMACS goes in via a staged file, the answer comes back
/// as `s`/`v` output lines with exit code 10 or 20.
pub struct ExternalSolver {
    program: String,
}

impl ExternalSolver {
    pub fn new(program: &str) -> ExternalSolver {
        ExternalSolver {
            program: program.to_string(),
        }
    }
}

impl SatSolver for ExternalSolver {
    fn solve(&mut self, cnf: &CnfInstance) -> Result<Outcome, SolverError> {
        let mut file = NamedTempFile::new()?;
        dimacs::write(&mut file, cnf)?;
        file.flush()?;
        debug!(
            "staged {} clauses at {:?} for `{}`",
            cnf.clause_count(),
            file.path(),
            self.program
        );

        let output = Command::new(&self.program)
            .arg(file.path())
            .output()
            .map_err(|err| SolverError::Launch(self.program.clone(), err))?;
        trace!("`{}` exited with {}", self.program, output.status);

        parse_output(
            &self.program,
            output.status,
            &String::from_utf8_lossy(&output.stdout),
        )
    }
}

fn parse_output(
    program: &str,
    status: ExitStatus,
    stdout: &str,
) -> Result<Outcome, SolverError> {
    let mut answer: Option<String> = None;
    let mut model = Model::new();

    for line in stdout.lines() {
        let mut words = line.split_ascii_whitespace();
        match words.next() {
            Some("s") => answer = Some(words.collect::<Vec<_>>().join(" ")),
            Some("v") => {
                for word in words {
                    let code = word.parse::<i64>()?;
                    if code.unsigned_abs() > MAX_VARIABLE {
                        return Err(SolverError::MalformedOutput(line.to_string()));
                    }
                    if let Some(lit) = Literal::from_code(code) {
                        if lit.polarity() {
                            model.insert(lit.var());
                        }
                    }
                }
            }
            // comments, timing noise, etc
            _ => {}
        }
    }

    match answer.as_deref() {
        Some("SATISFIABLE") => Ok(Outcome::Satisfiable(model)),
        Some("UNSATISFIABLE") => Ok(Outcome::Unsatisfiable),
        _ => match status.code() {
            Some(EXIT_SATISFIABLE) | Some(EXIT_UNSATISFIABLE) => {
                Err(SolverError::MalformedOutput(stdout.to_string()))
            }
            _ => Err(SolverError::Internal {
                program: program.to_string(),
                status,
            }),
        },
    }
}

#[cfg(test)]
mod test {
    use std::os::unix::process::ExitStatusExt;

    use super::*;
    use crate::Variable;

    fn status(code: i32) -> ExitStatus {
        ExitStatus::from_raw(code << 8)
    }

    #[test]
    fn test_parse_satisfiable_output() {
        let stdout = "c a comment\ns SATISFIABLE\nv 1 -2 3 0\nv 4 0\n";
        let outcome = parse_output("fake", status(EXIT_SATISFIABLE), stdout).unwrap();
        let model = outcome.model().unwrap();
        assert!(model.contains(Variable(1)));
        assert!(!model.contains(Variable(2)));
        assert!(model.contains(Variable(3)));
        assert!(model.contains(Variable(4)));
    }

    #[test]
    fn test_parse_unsatisfiable_output() {
        let outcome = parse_output("fake", status(EXIT_UNSATISFIABLE), "s UNSATISFIABLE\n").unwrap();
        assert!(outcome.model().is_none());
    }

    #[test]
    fn test_rejects_oversized_literal_in_model() {
        // magnitudes beyond 2^62 cannot name a variable; corrupt output
        // must surface as an error, not a panic
        for lit in ["9223372036854775807", "-9223372036854775808"] {
            let stdout = format!("s SATISFIABLE\nv {} 0\n", lit);
            assert!(matches!(
                parse_output("fake", status(EXIT_SATISFIABLE), &stdout),
                Err(SolverError::MalformedOutput(_))
            ));
        }
    }

    #[test]
    fn test_rejects_garbage_output() {
        assert!(matches!(
            parse_output("fake", status(EXIT_SATISFIABLE), "hello\n"),
            Err(SolverError::MalformedOutput(_))
        ));
        assert!(matches!(
            parse_output("fake", status(1), "segfault\n"),
            Err(SolverError::Internal { .. })
        ));
    }

    #[test]
    fn test_launch_failure_is_distinct_from_unsat() {
        let graph = crate::graph::Graph::new(3, vec![(1, 2), (2, 3), (3, 1)]).unwrap();
        let cnf = crate::encoding::Encoder::new(&graph).encode();
        let mut solver = ExternalSolver::new("definitely-not-a-sat-solver");
        assert!(matches!(
            solver.solve(&cnf),
            Err(SolverError::Launch(_, _))
        ));
    }
}

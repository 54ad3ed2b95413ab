use std::io::{self, Write};

use itertools::Itertools;

use crate::CnfInstance;

/// Serialize a CNF instance as DIMACS CNF: a `p cnf <vars> <clauses>`
/// header, then one `0`-terminated line of signed literals per clause.
/// Clause order is preserved exactly as generated.
pub fn write<W: Write>(out: &mut W, cnf: &CnfInstance) -> io::Result<()> {
    writeln!(
        out,
        "p cnf {} {}",
        cnf.variable_count(),
        cnf.clause_count()
    )?;
    for clause in cnf.clauses() {
        let literals = clause
            .literals()
            .iter()
            .map(|lit| lit.code().to_string())
            .join(" ");
        writeln!(out, "{} 0", literals)?;
    }
    Ok(())
}

pub fn to_string(cnf: &CnfInstance) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail
    write(&mut buf, cnf).unwrap();
    String::from_utf8(buf).unwrap()
}

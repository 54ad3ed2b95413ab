use core::fmt;

use super::Literal;

/// A disjunction of literals. Literal order is the order of emission; the
/// encoder relies on this being preserved through export.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(lits: Vec<Literal>) -> Clause {
        Clause { literals: lits }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut fst = true;
        for &lit in &self.literals {
            if !fst {
                write!(f, ", ")?;
            }
            fst = false;
            write!(f, "{:?}", lit)?;
        }
        Ok(())
    }
}

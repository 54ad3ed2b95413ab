use std::fmt;

/// A propositional variable, identified by its 1-based DIMACS id.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Variable(pub u64);

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal(u64);

pub const MAX_VARIABLE: u64 = 1 << 62;

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.polarity() {
            write!(f, "{:?}", self.var())
        } else {
            write!(f, "!{:?}", self.var())
        }
    }
}

impl Literal {
    pub fn new(var: Variable, polarity: bool) -> Literal {
        if var.0 == 0 || var.0 > MAX_VARIABLE {
            panic!("variable id must be in [1, 2^62]");
        }
        Literal((var.0 << 1) | (polarity as u64))
    }

    pub fn var(&self) -> Variable {
        Variable(self.0 >> 1)
    }

    pub fn polarity(&self) -> bool {
        (self.0 & 1) != 0
    }

    pub fn invert(&self) -> Literal {
        Literal(self.0 ^ 1)
    }

    /// The signed DIMACS form: the variable id, negated for negative polarity.
    pub fn code(&self) -> i64 {
        let id = self.var().0 as i64;
        if self.polarity() {
            id
        } else {
            -id
        }
    }

    /// Inverse of `code`. None for zero (the DIMACS clause terminator).
    pub fn from_code(code: i64) -> Option<Literal> {
        if code == 0 {
            return None;
        }
        Some(Literal::new(Variable(code.unsigned_abs()), code > 0))
    }
}

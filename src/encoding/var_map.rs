use crate::instance::MAX_VARIABLE;
use crate::Variable;

/// Bijection between (vertex, position) pairs and the variable ids
/// `[1, n*n]`. `var(v, p)` is true iff vertex `v` sits at cycle position
/// `p`; both range over `[1, n]`. Pure closed-form lookup in both
/// directions, shared read-only by the encoder and the decoder.
#[derive(Clone, Copy, Debug)]
pub struct VarMap {
    n: u32,
}

impl VarMap {
    pub fn new(n: u32) -> VarMap {
        if (n as u64).pow(2) > MAX_VARIABLE {
            panic!("vertex count too large to encode");
        }
        VarMap { n }
    }

    pub fn vertex_count(&self) -> u32 {
        self.n
    }

    pub fn variable_count(&self) -> u64 {
        (self.n as u64).pow(2)
    }

    pub fn var(&self, vertex: u32, position: u32) -> Variable {
        debug_assert!(vertex >= 1 && vertex <= self.n);
        debug_assert!(position >= 1 && position <= self.n);
        Variable((vertex as u64 - 1) * self.n as u64 + position as u64)
    }

    /// Inverse of `var`: the (vertex, position) pair a variable stands for.
    pub fn pair(&self, var: Variable) -> (u32, u32) {
        debug_assert!(var.0 >= 1 && var.0 <= self.variable_count());
        let vertex = (var.0 - 1) / self.n as u64 + 1;
        let position = (var.0 - 1) % self.n as u64 + 1;
        (vertex as u32, position as u32)
    }
}

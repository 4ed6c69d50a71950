use super::Val;
use crate::lang::Register;
use tracing::trace;

/// ## Register memory
///
/// One slot per register, indexed by register ordinal. Every slot always
/// holds a value; a fresh or cleared slot holds numeric zero.

#[derive(Debug, Default)]
pub struct Var {
    vars: [Val; 4],
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, register: Register) -> &Val {
        &self.vars[register.index()]
    }

    pub fn store(&mut self, register: Register, value: Val) {
        trace!(%register, %value, "store");
        self.vars[register.index()] = value;
    }

    pub fn clear(&mut self, register: Register) {
        trace!(%register, "clear");
        self.vars[register.index()] = Val::default();
    }

    /// Registers and their values in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Register, &Val)> + '_ {
        Register::ALL.iter().map(move |r| (*r, self.fetch(*r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let var = Var::new();
        for (_, val) in var.iter() {
            assert_eq!(val, &Val::Number(0.0));
        }
    }

    #[test]
    fn test_store_and_clear() {
        let mut var = Var::new();
        var.store(Register::B, Val::Text("hi".into()));
        var.store(Register::C, Val::Number(-1.5));
        assert_eq!(var.fetch(Register::A), &Val::Number(0.0));
        assert_eq!(var.fetch(Register::B), &Val::Text("hi".into()));
        assert_eq!(var.fetch(Register::C), &Val::Number(-1.5));
        var.clear(Register::B);
        assert_eq!(var.fetch(Register::B), &Val::Number(0.0));
    }

    #[test]
    fn test_iter_order() {
        let order: Vec<Register> = Var::new().iter().map(|(r, _)| r).collect();
        assert_eq!(order, Register::ALL);
    }
}

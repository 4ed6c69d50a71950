use super::Error;
use crate::error;

/// ## Register names
///
/// The four storage slots. Input is case-insensitive and only the first
/// character of a token is significant; display is always uppercase.

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Register {
    A,
    B,
    C,
    D,
}

impl Register {
    pub const ALL: [Register; 4] = [Register::A, Register::B, Register::C, Register::D];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_char(ch: char) -> Option<Register> {
        use Register::*;
        match ch.to_ascii_lowercase() {
            'a' => Some(A),
            'b' => Some(B),
            'c' => Some(C),
            'd' => Some(D),
            _ => None,
        }
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Register::*;
        match self {
            A => write!(f, "A"),
            B => write!(f, "B"),
            C => write!(f, "C"),
            D => write!(f, "D"),
        }
    }
}

pub fn is_register_token(s: &str) -> bool {
    s.chars().next().and_then(Register::from_char).is_some()
}

pub fn to_register(s: &str) -> Result<Register, Error> {
    match s.chars().next().and_then(Register::from_char) {
        Some(register) => Ok(register),
        None => Err(error!(InvalidRegister)),
    }
}

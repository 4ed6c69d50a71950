use super::{ident::Register, token::Command, Error};
use crate::error;
use crate::mach::Val;

type Result<T> = std::result::Result<T, Error>;

/// Splits a command line into its command and whatever follows the
/// command word. Only the first character of the command word matters.
pub fn lex(s: &str) -> Result<(Command, &str)> {
    let s = s.trim_start();
    let word_end = s.find(char::is_whitespace).unwrap_or(s.len());
    let (word, rest) = s.split_at(word_end);
    let ch = match word.chars().next() {
        Some(ch) => ch,
        None => return Err(error!(EmptyCommand)),
    };
    match Command::from_char(ch) {
        Some(command) => Ok((command, rest)),
        None => Err(error!(UnknownCommand; format!("'{}'", ch.to_lowercase()))),
    }
}

/// A number only when the whole string is a float literal in range, text
/// otherwise.
pub fn parse_literal(s: &str) -> Val {
    match s.parse::<f64>() {
        Ok(n) if !out_of_range(s, n) => Val::Number(n),
        _ => Val::Text(s.to_string()),
    }
}

// Overflow to infinity or underflow to zero from a literal that spells
// neither.
fn out_of_range(s: &str, n: f64) -> bool {
    let unsigned = s.trim_start_matches(|c| c == '+' || c == '-');
    if n.is_infinite() {
        return !unsigned.to_ascii_lowercase().starts_with("inf");
    }
    if n == 0.0 {
        let mantissa = unsigned.split(|c| c == 'e' || c == 'E').next().unwrap_or("");
        return mantissa.chars().any(|c| ('1'..='9').contains(&c));
    }
    false
}

/// Reads two register characters, whitespace between them optional.
pub fn parse_operands(s: &str) -> Result<(Register, Register)> {
    let mut chars = s.chars().filter(|ch| !ch.is_whitespace());
    let (first, second) = match (chars.next(), chars.next()) {
        (Some(first), Some(second)) => (first, second),
        _ => return Err(error!(InvalidInput)),
    };
    match (Register::from_char(first), Register::from_char(second)) {
        (Some(lhs), Some(rhs)) => Ok((lhs, rhs)),
        _ => Err(error!(InvalidRegister)),
    }
}

use super::val::{fmt_coerced, fmt_general};
use super::Val;
use crate::error;
use crate::lang::{Error, Operator};
use std::convert::TryFrom;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// Largest string, in bytes, a repetition may produce.
pub const MAX_STRING_LEN: usize = 256 << 20;

pub struct Operation {}

impl Operation {
    /// Applies `op` and renders the outcome the way the calculator prints
    /// it: numbers in general notation, text bare.
    pub fn apply(op: Operator, lhs: &Val, rhs: &Val) -> Result<String> {
        let result = match op {
            Operator::Plus => Operation::sum(lhs, rhs),
            Operator::Minus => Operation::subtract(lhs, rhs),
            Operator::Multiply => Operation::multiply(lhs, rhs),
            Operator::Divide => Operation::divide(lhs, rhs),
        };
        match result {
            Ok(Val::Number(n)) => Ok(fmt_general(n)),
            Ok(Val::Text(s)) => Ok(s),
            Err(error) => {
                debug!(%op, %lhs, %rhs, %error, "operation failed");
                Err(error)
            }
        }
    }

    pub fn sum(lhs: &Val, rhs: &Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Number(l) => match rhs {
                Number(r) => Ok(Number(l + r)),
                Text(r) => Ok(Text(fmt_coerced(*l) + r)),
            },
            Text(l) => match rhs {
                Number(r) => Ok(Text(l.clone() + &fmt_coerced(*r))),
                Text(r) => Ok(Text(l.clone() + r)),
            },
        }
    }

    pub fn subtract(lhs: &Val, rhs: &Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Number(l) => match rhs {
                Number(r) => Ok(Number(l - r)),
                Text(_) => Err(error!(InvalidOperandCombination)),
            },
            Text(l) => match rhs {
                Number(_) => Err(error!(InvalidOperandCombination)),
                Text(r) => {
                    let mut s = l.clone();
                    if let Some(pos) = s.find(r.as_str()) {
                        s.replace_range(pos..pos + r.len(), "");
                    }
                    Ok(Text(s))
                }
            },
        }
    }

    pub fn multiply(lhs: &Val, rhs: &Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Number(l) => match rhs {
                Number(r) => Ok(Number(l * r)),
                Text(r) => Operation::repeat(r, *l),
            },
            Text(l) => match rhs {
                Number(r) => Operation::repeat(l, *r),
                Text(_) => Err(error!(InvalidStringMultiplication)),
            },
        }
    }

    pub fn divide(lhs: &Val, rhs: &Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Number(l) => match rhs {
                Number(r) => {
                    if *r == 0.0 {
                        Err(error!(DivisionByZero))
                    } else {
                        Ok(Number(l / r))
                    }
                }
                Text(_) => Err(error!(InvalidOperandCombination)),
            },
            Text(_) => match rhs {
                Number(_) => Err(error!(InvalidOperandCombination)),
                Text(_) => Err(error!(StringDivisionUnsupported)),
            },
        }
    }

    fn repeat(s: &str, count: f64) -> Result<Val> {
        // Truncates toward zero and saturates; NaN counts as zero.
        let count = count as i64;
        if count <= 0 || s.is_empty() {
            return Ok(Val::Text(String::new()));
        }
        let len = usize::try_from(count)
            .ok()
            .and_then(|count| s.len().checked_mul(count))
            .filter(|len| *len <= MAX_STRING_LEN)
            .ok_or_else(|| error!(StringTooLong))?;
        let mut out = String::new();
        if out.try_reserve_exact(len).is_err() {
            return Err(error!(StringTooLong));
        }
        for _ in 0..count {
            out.push_str(s);
        }
        Ok(Val::Text(out))
    }
}

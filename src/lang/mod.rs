/*!
# Rust Language Module

This Rust module classifies calculator input: command words, register
names, operands and literal values.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::{is_register_token, to_register, Register};
pub use lex::{lex, parse_literal, parse_operands};
pub use token::{Command, Operator};

#[cfg(test)]
mod tests;

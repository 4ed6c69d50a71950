/*!
## Rust Machine Module

This Rust module holds the register memory, the operators that combine
register values and the runtime that drives a calculator session.

*/

mod operation;
mod runtime;
mod val;
mod var;

pub use operation::{Operation, MAX_STRING_LEN};
pub use runtime::Event;
pub use runtime::Runtime;
pub use val::{fmt_coerced, fmt_general, fmt_register, Val};
pub use var::Var;

#[cfg(test)]
mod tests;

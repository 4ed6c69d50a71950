//! # ClaudiaCalc
//!
//! A calculator with four registers, `A` through `D`, each holding either
//! a number or a string.
//!
//! Run the executable and pick a command from the menu:
//! ```text
//! ----------------------------------------
//!             ClaudiaCalc v2.0
//! ----------------------------------------
//! +       Add
//! -       Subtract
//! *       Multiply
//! /       Divide
//! a-d     Enter a number or string for A,B,C,D
//! 1-4     Clear register A,B,C,D
//! m       Prints the menu
//! p       Prints the registers
//! q       Quits the app
//! ----------------------------------------
//! ```
//!
//! Whatever parses completely as a number is stored as a number; anything
//! else is stored as a string. Operators work on both:
//!
//! | op  | numbers    | strings             | number and string      |
//! |-----|------------|---------------------|------------------------|
//! | `+` | sum        | concatenation       | concatenation          |
//! | `-` | difference | remove first match  | error                  |
//! | `*` | product    | error               | repeat the string      |
//! | `/` | quotient   | error               | error                  |
//!
//! ```
//! use calc::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.enter("a");
//! runtime.enter("ab");
//! runtime.enter("b");
//! runtime.enter("3");
//! runtime.enter("* b a");
//! let mut out = String::new();
//! while let Event::Print(s) = runtime.execute() {
//!     out.push_str(&s);
//! }
//! assert!(out.ends_with("B * A = ababab\n"));
//! ```

pub mod lang;
pub mod mach;
pub mod term;

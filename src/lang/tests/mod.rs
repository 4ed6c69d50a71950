use super::*;
use crate::mach::Val;

mod lex_test;

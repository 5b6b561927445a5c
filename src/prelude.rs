//! String-based convenience API for quick experimentation.

pub use crate::ui::{add, div, equation, fraction, invert, mul, simplify, solve, sub, verify};

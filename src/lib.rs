//! Exact polynomial fitting through data points. Every step, from decimal input to the
//! inverted design matrix to the coefficient vector, stays in arbitrary-precision
//! rational arithmetic.

pub mod error;
pub mod format;
pub mod fraction;
pub mod matrix;
pub mod options;
pub mod parser;
pub mod prelude;
pub mod solver;
mod ui;

pub use error::{FitError, Result};
pub use format::{equation_latex, equation_text, show_fraction, verify_latex, verify_latex_at};
pub use fraction::Fraction;
pub use matrix::{FractionMatrix, invert_matrix};
pub use options::{Basis, FitOptions, Pivoting};
pub use parser::{parse_decimal, parse_fraction_token};
pub use solver::{Fit, design_matrix, fit, fit_decimal, solve_coefficients};

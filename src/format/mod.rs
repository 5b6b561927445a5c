//! Rendering of fitted coefficients for display.

pub mod latex;
pub mod text;

pub use latex::{equation_latex, verify_latex, verify_latex_at};
pub use text::{equation_text, show_fraction};

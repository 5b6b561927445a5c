use num_traits::Signed;

use crate::error::{FitError, Result};
use crate::fraction::Fraction;
use crate::options::Basis;

/// `\displaystyle f(x) = \frac{a}{b} x+\frac{c}{d} x^2...`
///
/// Every coefficient is printed as a fraction, including zeros and whole numbers. Only
/// a negative leading term carries a sign.
pub fn equation_latex(coefficients: &[Fraction], basis: Basis) -> String {
    let first = basis.first_power();
    let terms: String = coefficients
        .iter()
        .enumerate()
        .map(|(i, coeff)| {
            let r = coeff.simplify();
            let sign = match (i, r.is_negative()) {
                (_, true) => "-",
                (0, false) => "",
                (_, false) => "+",
            };
            format!(
                "{sign}\\frac{{{}}}{{{}}}{}",
                r.numer().abs(),
                r.denom(),
                variable(i + first)
            )
        })
        .collect();
    if terms.is_empty() {
        return "\\displaystyle f(x) = 0".to_string();
    }
    format!("\\displaystyle f(x) = {terms}")
}

fn variable(power: usize) -> String {
    match power {
        0 => String::new(),
        1 => " x".to_string(),
        p if p < 10 => format!(" x^{p}"),
        p => format!(" x^{{{p}}}"),
    }
}

/// `\displaystyle f(1) = y1, f(2) = y2, ` with the points numbered from one.
pub fn verify_latex<S: AsRef<str>>(ys: &[S]) -> String {
    let checks: String = ys
        .iter()
        .enumerate()
        .map(|(i, y)| format!("f({}) = {}, ", i + 1, y.as_ref()))
        .collect();
    format!("\\displaystyle {checks}")
}

/// Like [`verify_latex`], but labels each check with its x-value.
pub fn verify_latex_at<S: AsRef<str>>(xs: &[S], ys: &[S]) -> Result<String> {
    if xs.len() != ys.len() {
        return Err(FitError::LengthMismatch {
            x: xs.len(),
            y: ys.len(),
        });
    }
    let checks: String = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| format!("f({}) = {}, ", x.as_ref(), y.as_ref()))
        .collect();
    Ok(format!("\\displaystyle {checks}"))
}

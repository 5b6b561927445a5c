//! String-in, string-out helpers working on `"num/den"` tokens.

use crate::error::Result;
use crate::format::{equation_latex, verify_latex};
use crate::fraction::Fraction;
use crate::matrix::invert_matrix;
use crate::options::FitOptions;
use crate::parser::{parse_decimal, parse_fraction_token};
use crate::solver::{fit_decimal, solve_coefficients};

/// Decimal numeral to an unsimplified `"num/den"` token.
pub fn fraction(decimal: &str) -> Result<String> {
    Ok(parse_decimal(decimal)?.to_string())
}

pub fn simplify(token: &str) -> Result<String> {
    Ok(parse_fraction_token(token)?.simplify().to_string())
}

pub fn add(lhs: &str, rhs: &str) -> Result<String> {
    let (a, b) = operands(lhs, rhs)?;
    Ok((&a + &b).to_string())
}

pub fn sub(lhs: &str, rhs: &str) -> Result<String> {
    let (a, b) = operands(lhs, rhs)?;
    Ok((&a - &b).to_string())
}

pub fn mul(lhs: &str, rhs: &str) -> Result<String> {
    let (a, b) = operands(lhs, rhs)?;
    Ok((&a * &b).to_string())
}

pub fn div(lhs: &str, rhs: &str) -> Result<String> {
    let (a, b) = operands(lhs, rhs)?;
    Ok(a.divide(&b)?.to_string())
}

pub fn invert<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Vec<Vec<String>>> {
    Ok(invert_matrix(rows)?.tokens())
}

pub fn solve<S: AsRef<str>>(xs: &[S], ys: &[S]) -> Result<Vec<String>> {
    solve_coefficients(xs, ys)
}

/// LaTeX equation of the polynomial through the points.
pub fn equation<S: AsRef<str>>(xs: &[S], ys: &[S]) -> Result<String> {
    let options = FitOptions::default();
    let fit = fit_decimal(xs, ys, &options)?;
    Ok(equation_latex(&fit.coefficients, fit.basis))
}

pub fn verify<S: AsRef<str>>(ys: &[S]) -> String {
    verify_latex(ys)
}

fn operands(lhs: &str, rhs: &str) -> Result<(Fraction, Fraction)> {
    Ok((parse_fraction_token(lhs)?, parse_fraction_token(rhs)?))
}

use tracing::debug;

use crate::error::{FitError, Result};
use crate::fraction::Fraction;
use crate::matrix::FractionMatrix;
use crate::options::{Basis, FitOptions};
use crate::parser::parse_decimal;

/// Coefficients of the polynomial through a set of points, lowest power first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fit {
    pub coefficients: Vec<Fraction>,
    pub basis: Basis,
}

impl Fit {
    /// Power of x that `coefficients[index]` multiplies.
    pub fn power(&self, index: usize) -> usize {
        index + self.basis.first_power()
    }

    /// Exact value of the fitted polynomial at `x`.
    pub fn evaluate(&self, x: &Fraction) -> Fraction {
        self.coefficients
            .iter()
            .enumerate()
            .fold(Fraction::zero(), |acc, (i, c)| {
                (&acc + &(c * &x.pow(self.power(i)))).simplify()
            })
    }

    /// Coefficients as `"num/den"` tokens.
    pub fn tokens(&self) -> Vec<String> {
        self.coefficients.iter().map(ToString::to_string).collect()
    }
}

/// Row `i` holds the powers of `xs[i]` selected by `basis`, one column per point.
pub fn design_matrix(xs: &[Fraction], basis: Basis) -> Result<FractionMatrix> {
    let n = xs.len();
    let first = basis.first_power();
    let rows: Vec<Vec<Fraction>> = xs
        .iter()
        .map(|x| (first..first + n).map(|p| x.pow(p).simplify()).collect())
        .collect();
    FractionMatrix::from_rows(rows)
}

/// Solves `design_matrix(xs) · c = ys` for `c` by explicit inversion.
pub fn fit(xs: &[Fraction], ys: &[Fraction], options: &FitOptions) -> Result<Fit> {
    if xs.len() != ys.len() {
        return Err(FitError::LengthMismatch {
            x: xs.len(),
            y: ys.len(),
        });
    }
    debug!(
        points = xs.len(),
        basis = ?options.basis,
        pivoting = ?options.pivoting,
        "fitting polynomial"
    );

    let inverse = design_matrix(xs, options.basis)?.inverse(options.pivoting)?;
    let coefficients = inverse.mul_vec_simplified(ys)?;
    Ok(Fit {
        coefficients,
        basis: options.basis,
    })
}

pub fn fit_decimal<S: AsRef<str>>(xs: &[S], ys: &[S], options: &FitOptions) -> Result<Fit> {
    if xs.len() != ys.len() {
        return Err(FitError::LengthMismatch {
            x: xs.len(),
            y: ys.len(),
        });
    }
    let xs = parse_all(xs)?;
    let ys = parse_all(ys)?;
    fit(&xs, &ys, options)
}

/// Coefficients of `x^1 ..= x^n` for the polynomial through `(xs[i], ys[i])`, each as a
/// `"num/den"` token.
pub fn solve_coefficients<S: AsRef<str>>(xs: &[S], ys: &[S]) -> Result<Vec<String>> {
    Ok(fit_decimal(xs, ys, &FitOptions::default())?.tokens())
}

fn parse_all<S: AsRef<str>>(values: &[S]) -> Result<Vec<Fraction>> {
    values.iter().map(|v| parse_decimal(v.as_ref())).collect()
}

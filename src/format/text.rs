use num_traits::One;

use crate::fraction::Fraction;
use crate::solver::Fit;

/// Reduced, sign-first form: `-3/4`, or `5` when the denominator is one.
pub fn show_fraction(value: &Fraction) -> String {
    let r = value.simplify();
    if r.denom().is_one() {
        format!("{}", r.numer())
    } else {
        format!("{}/{}", r.numer(), r.denom())
    }
}

/// Plain-text polynomial such as `f(x) = 2*x - 1/2*x^2`. Zero terms are dropped.
pub fn equation_text(fit: &Fit) -> String {
    let mut body = String::new();
    for (i, coeff) in fit.coefficients.iter().enumerate() {
        if coeff.is_zero() {
            continue;
        }
        let negative = coeff.is_negative();
        let magnitude = show_fraction(&if negative { -coeff } else { coeff.clone() });
        let term = match fit.power(i) {
            0 => magnitude,
            power => {
                let var = if power == 1 {
                    "x".to_string()
                } else {
                    format!("x^{power}")
                };
                if magnitude == "1" {
                    var
                } else {
                    format!("{magnitude}*{var}")
                }
            }
        };
        match (body.is_empty(), negative) {
            (true, false) => body.push_str(&term),
            (true, true) => body.push_str(&format!("-{term}")),
            (false, false) => body.push_str(&format!(" + {term}")),
            (false, true) => body.push_str(&format!(" - {term}")),
        }
    }
    if body.is_empty() {
        body.push('0');
    }
    format!("f(x) = {body}")
}

//! Exact fractions over arbitrary-precision integers.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::error::{FitError, Result};

/// A numerator/denominator pair.
///
/// Arithmetic never reduces its result and never touches the sign of either part;
/// reduction is an explicit step through [`Fraction::simplify`], which also moves the
/// sign onto the numerator. Equality compares values, so `25/100 == 1/4`.
#[derive(Clone, Debug)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(FitError::DivisionByZero);
        }
        Ok(Fraction {
            numer: numer.into(),
            denom,
        })
    }

    /// Callers guarantee `denom` is non-zero.
    pub(crate) fn from_parts(numer: BigInt, denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero());
        Fraction { numer, denom }
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Fraction {
            numer: value.into(),
            denom: BigInt::one(),
        }
    }

    /// Parses a decimal numeral such as `"-12.375"` into an unsimplified fraction.
    pub fn from_decimal(input: &str) -> Result<Self> {
        crate::parser::parse_decimal(input)
    }

    pub fn zero() -> Self {
        Fraction::from_integer(BigInt::zero())
    }

    pub fn one() -> Self {
        Fraction::from_integer(BigInt::one())
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.numer == self.denom
    }

    pub fn is_negative(&self) -> bool {
        self.numer.is_negative() != self.denom.is_negative() && !self.numer.is_zero()
    }

    /// Divides out the gcd of numerator and denominator and makes the denominator
    /// positive. The zero fraction becomes `0/1`.
    pub fn simplify(&self) -> Fraction {
        let g = self.numer.gcd(&self.denom);
        let mut numer = &self.numer / &g;
        let mut denom = &self.denom / &g;
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        Fraction { numer, denom }
    }

    /// `(a·d)/(b·c)`. Fails when `other` is zero.
    pub fn divide(&self, other: &Fraction) -> Result<Fraction> {
        if other.is_zero() {
            return Err(FitError::DivisionByZero);
        }
        Ok(Fraction {
            numer: &self.numer * &other.denom,
            denom: &self.denom * &other.numer,
        })
    }

    pub fn pow(&self, exp: usize) -> Fraction {
        Fraction {
            numer: num_traits::pow(self.numer.clone(), exp),
            denom: num_traits::pow(self.denom.clone(), exp),
        }
    }

    pub fn to_rational(&self) -> BigRational {
        BigRational::new(self.numer.clone(), self.denom.clone())
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::zero()
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        &self.numer * &other.denom == &other.numer * &self.denom
    }
}

impl Eq for Fraction {}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl FromStr for Fraction {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_fraction_token(s)
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction::from_integer(value)
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Fraction::from_integer(value)
    }
}

impl From<BigRational> for Fraction {
    fn from(value: BigRational) -> Self {
        let (numer, denom) = value.into_raw();
        Fraction { numer, denom }
    }
}

impl From<&Fraction> for BigRational {
    fn from(value: &Fraction) -> Self {
        value.to_rational()
    }
}

impl<'a> Add<&'a Fraction> for &'a Fraction {
    type Output = Fraction;

    fn add(self, rhs: &'a Fraction) -> Fraction {
        Fraction {
            numer: &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            denom: &self.denom * &rhs.denom,
        }
    }
}

impl<'a> Sub<&'a Fraction> for &'a Fraction {
    type Output = Fraction;

    fn sub(self, rhs: &'a Fraction) -> Fraction {
        Fraction {
            numer: &self.numer * &rhs.denom - &rhs.numer * &self.denom,
            denom: &self.denom * &rhs.denom,
        }
    }
}

impl<'a> Mul<&'a Fraction> for &'a Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &'a Fraction) -> Fraction {
        Fraction {
            numer: &self.numer * &rhs.numer,
            denom: &self.denom * &rhs.denom,
        }
    }
}

macro_rules! forward_by_value {
    ($tr:ident, $method:ident) => {
        impl $tr for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                (&self).$method(&rhs)
            }
        }
    };
}

forward_by_value!(Add, add);
forward_by_value!(Sub, sub);
forward_by_value!(Mul, mul);

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn arithmetic_does_not_reduce() {
        let sum = &frac(1, 2) + &frac(1, 2);
        assert_eq!(sum.to_string(), "4/4");
        let product = &frac(2, 4) * &frac(2, 4);
        assert_eq!(product.to_string(), "4/16");
        let quotient = frac(1, 2).divide(&frac(3, 4)).unwrap();
        assert_eq!(quotient.to_string(), "4/6");
    }

    #[test]
    fn simplify_moves_sign_to_numerator() {
        assert_eq!(frac(6, -8).simplify().to_string(), "-3/4");
        assert_eq!(frac(-6, -8).simplify().to_string(), "3/4");
        assert_eq!(frac(0, -5).simplify().to_string(), "0/1");
    }

    #[test]
    fn zero_denominator_rejected() {
        assert_eq!(Fraction::new(1, 0), Err(FitError::DivisionByZero));
        assert_eq!(frac(1, 2).divide(&frac(0, 3)), Err(FitError::DivisionByZero));
    }

    #[test]
    fn negativity_ignores_sign_placement() {
        assert!(frac(-1, 2).is_negative());
        assert!(frac(1, -2).is_negative());
        assert!(!frac(-1, -2).is_negative());
        assert!(!frac(0, -2).is_negative());
    }

    #[test]
    fn rational_interop() {
        let r = frac(10, -4).to_rational();
        assert_eq!(r, BigRational::new((-5).into(), 2.into()));
        assert_eq!(Fraction::from(r).to_string(), "-5/2");
    }
}

use crate::error::{FitError, Result};
use crate::fraction::Fraction;
use nom::IResult;
use nom::character::complete::{char, digit1, multispace0, one_of};
use nom::combinator::{all_consuming, map, map_res, opt};
use nom::error::VerboseError;
use nom::sequence::{delimited, pair, preceded, tuple};
use num_bigint::{BigInt, BigUint};
use num_traits::One;

type PResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Converts a decimal numeral into an unsimplified fraction over a power of ten.
///
/// `"0.25"` becomes `25/100`, `"-1.5"` becomes `-15/10` and `"7"` becomes `7/1`. The
/// sign applies to the whole magnitude, including the fractional digits.
pub fn parse_decimal(input: &str) -> Result<Fraction> {
    match all_consuming(ws(decimal))(input) {
        Ok((_, frac)) => Ok(frac),
        Err(e) => Err(FitError::Parse(format!("invalid decimal {input:?}: {e:?}"))),
    }
}

/// Reads a `"num/den"` token back into a fraction, exactly as written. A bare integer is
/// read as `n/1`.
pub fn parse_fraction_token(input: &str) -> Result<Fraction> {
    let (numer, denom) = match all_consuming(fraction_token)(input) {
        Ok((_, parts)) => parts,
        Err(e) => {
            return Err(FitError::Parse(format!(
                "invalid fraction {input:?}: {e:?}"
            )));
        }
    };
    Fraction::new(numer, denom.unwrap_or_else(BigInt::one))
}

fn decimal(input: &str) -> PResult<'_, Fraction> {
    map(
        tuple((sign, unsigned, opt(preceded(char('.'), fractional_digits)))),
        |(negative, integer, fractional)| {
            let integer = BigInt::from(integer);
            let (numer, denom) = match fractional {
                None => (integer, BigInt::one()),
                Some((digits, len)) => {
                    let denom = num_traits::pow(BigInt::from(10u32), len);
                    (integer * &denom + BigInt::from(digits), denom)
                }
            };
            let numer = if negative { -numer } else { numer };
            Fraction::from_parts(numer, denom)
        },
    )(input)
}

fn fractional_digits(input: &str) -> PResult<'_, (BigUint, usize)> {
    map_res(digit1, |s: &str| s.parse::<BigUint>().map(|d| (d, s.len())))(input)
}

fn fraction_token(input: &str) -> PResult<'_, (BigInt, Option<BigInt>)> {
    pair(ws(integer), opt(preceded(char('/'), ws(integer))))(input)
}

fn integer(input: &str) -> PResult<'_, BigInt> {
    map(pair(sign, unsigned), |(negative, magnitude)| {
        let value = BigInt::from(magnitude);
        if negative { -value } else { value }
    })(input)
}

fn sign(input: &str) -> PResult<'_, bool> {
    map(opt(one_of("+-")), |s: Option<char>| s == Some('-'))(input)
}

fn unsigned(input: &str) -> PResult<'_, BigUint> {
    map_res(digit1, |s: &str| s.parse::<BigUint>())(input)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> PResult<'a, O>
where
    F: FnMut(&'a str) -> PResult<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}

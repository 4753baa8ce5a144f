use crate::error::{ParseErrorKind, PolyError, Result};
use crate::polynomial::{Coeff, Exp, Mono, Poly};
use nom::IResult;
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, cut, map_res, opt, recognize};
use nom::error::{ErrorKind, FromExternalError, ParseError};
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded};
use tracing::debug;

/// Maximum parenthesis nesting accepted by [`parse_poly`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parses a polynomial literal such as `(1,2)+((3,1),0)` into canonical form.
///
/// The whole input must be consumed. Whitespace is not allowed anywhere.
pub fn parse_poly(input: &str) -> Result<Poly> {
    parse_poly_with_limit(input, DEFAULT_MAX_DEPTH)
}

pub fn parse_poly_with_limit(input: &str, max_depth: usize) -> Result<Poly> {
    match all_consuming(|i| poly(i, max_depth))(input) {
        Ok((_, poly)) => Ok(poly),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
            let offset = input.len() - e.input.len();
            debug!(offset, kind = %e.kind, "rejected polynomial literal");
            Err(PolyError::Parse {
                offset,
                kind: e.kind,
            })
        }
        Err(nom::Err::Incomplete(_)) => Err(PolyError::Parse {
            offset: input.len(),
            kind: ParseErrorKind::UnexpectedEnd,
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SyntaxError<'a> {
    input: &'a str,
    kind: ParseErrorKind,
}

impl<'a> ParseError<&'a str> for SyntaxError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        let kind = match kind {
            ErrorKind::Eof => ParseErrorKind::TrailingInput,
            _ if input.is_empty() => ParseErrorKind::UnexpectedEnd,
            _ => ParseErrorKind::Malformed,
        };
        SyntaxError { input, kind }
    }

    fn append(_: &'a str, _: ErrorKind, other: Self) -> Self {
        other
    }

    fn from_char(input: &'a str, c: char) -> Self {
        let kind = if input.is_empty() {
            ParseErrorKind::UnexpectedEnd
        } else {
            ParseErrorKind::Expected(c)
        };
        SyntaxError { input, kind }
    }
}

impl<'a> FromExternalError<&'a str, ParseErrorKind> for SyntaxError<'a> {
    fn from_external_error(input: &'a str, _: ErrorKind, kind: ParseErrorKind) -> Self {
        SyntaxError { input, kind }
    }
}

type PResult<'a, T> = IResult<&'a str, T, SyntaxError<'a>>;

fn poly(input: &str, depth: usize) -> PResult<'_, Poly> {
    if !input.starts_with('(') {
        return coefficient(input);
    }
    if depth == 0 {
        return Err(nom::Err::Failure(SyntaxError {
            input,
            kind: ParseErrorKind::TooDeep,
        }));
    }
    mono_sum(input, depth - 1)
}

fn mono_sum(input: &str, depth: usize) -> PResult<'_, Poly> {
    let (rest, first) = mono(input, depth)?;
    let (rest, tail) = many0(preceded(char('+'), cut(|i| mono(i, depth))))(rest)?;
    let mut monos = Vec::with_capacity(tail.len() + 1);
    monos.push(first);
    monos.extend(tail);
    match Poly::checked_from_monos(monos) {
        Ok(poly) => Ok((rest, poly)),
        Err(_) => Err(nom::Err::Failure(SyntaxError {
            input,
            kind: ParseErrorKind::CoeffOutOfRange,
        })),
    }
}

fn mono(input: &str, depth: usize) -> PResult<'_, Mono> {
    let (rest, (sub, exp)) = delimited(
        char('('),
        pair(|i| poly(i, depth), preceded(char(','), exponent)),
        char(')'),
    )(input)?;
    let exp = if sub.is_zero() { 0 } else { exp };
    Ok((rest, Mono::new(sub, exp)))
}

fn coefficient(input: &str) -> PResult<'_, Poly> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<Coeff>()
            .map(Poly::from_coeff)
            .map_err(|_| ParseErrorKind::CoeffOutOfRange)
    })(input)
}

fn exponent(input: &str) -> PResult<'_, Exp> {
    map_res(digit1, |s: &str| {
        s.parse::<Exp>().map_err(|_| ParseErrorKind::ExpOutOfRange)
    })(input)
}

//! String-based helpers: parse literals, apply one operation, render the result.
//!
//! Arithmetic goes through the `checked_*` methods, so overflow comes back
//! as [`PolyError::Overflow`](crate::PolyError::Overflow).

use crate::error::Result;
use crate::parser::parse_poly;
use crate::polynomial::{Coeff, Poly};

pub fn parse(input: &str) -> Result<Poly> {
    parse_poly(input)
}

/// Canonical rendering of a literal.
pub fn canon(input: &str) -> Result<String> {
    Ok(parse(input)?.to_string())
}

pub fn add(lhs: &str, rhs: &str) -> Result<String> {
    Ok(parse(lhs)?.checked_add(&parse(rhs)?)?.to_string())
}

pub fn sub(lhs: &str, rhs: &str) -> Result<String> {
    Ok(parse(lhs)?.checked_sub(&parse(rhs)?)?.to_string())
}

pub fn mul(lhs: &str, rhs: &str) -> Result<String> {
    Ok(parse(lhs)?.checked_mul(&parse(rhs)?)?.to_string())
}

pub fn neg(input: &str) -> Result<String> {
    Ok(parse(input)?.checked_neg()?.to_string())
}

pub fn at(input: &str, x: Coeff) -> Result<String> {
    Ok(parse(input)?.checked_at(x)?.to_string())
}

pub fn compose(input: &str, substitutions: &[&str]) -> Result<String> {
    let p = parse(input)?;
    let qs = substitutions
        .iter()
        .map(|s| parse(s))
        .collect::<Result<Vec<_>>>()?;
    Ok(p.checked_compose(&qs)?.to_string())
}

pub fn deg(input: &str) -> Result<i64> {
    Ok(parse(input)?.deg())
}

pub fn deg_by(input: &str, var: usize) -> Result<i64> {
    Ok(parse(input)?.deg_by(var))
}

pub fn is_eq(lhs: &str, rhs: &str) -> Result<bool> {
    Ok(parse(lhs)? == parse(rhs)?)
}

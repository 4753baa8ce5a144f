//! Recursive sparse polynomials in canonical form.
//!
//! A [`Poly`] is either a constant or a sum of monomials in variable 0 whose
//! coefficients are themselves polynomials in variable 1, and so on. Every
//! value handed out by this crate satisfies:
//!
//! 1. a sum never represents zero (zero is always `Coeff(0)`),
//! 2. exponents within a sum are distinct and strictly descending,
//! 3. no monomial carries a zero sub-polynomial,
//! 4. a sum whose only term is `(c, 0)` with `c` constant is stored as `c`.
//!
//! [`Poly::from_monos`] is the one place these rules are established.

use crate::error::Result;
use crate::ops::expect_in_range;

pub type Coeff = i64;
pub type Exp = i32;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Poly {
    Coeff(Coeff),
    Sum(Vec<Mono>),
}

/// One term `poly * x_i^exp` of a [`Poly::Sum`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mono {
    pub(crate) exp: Exp,
    pub(crate) poly: Poly,
}

impl Mono {
    /// # Panics
    ///
    /// Panics if `exp` is negative.
    pub fn new(poly: Poly, exp: Exp) -> Self {
        assert!(exp >= 0, "negative exponent {exp}");
        Mono { exp, poly }
    }

    pub fn exp(&self) -> Exp {
        self.exp
    }

    pub fn poly(&self) -> &Poly {
        &self.poly
    }

    pub fn into_parts(self) -> (Poly, Exp) {
        (self.poly, self.exp)
    }
}

impl Poly {
    pub fn zero() -> Self {
        Poly::Coeff(0)
    }

    pub fn one() -> Self {
        Poly::Coeff(1)
    }

    pub fn from_coeff(c: Coeff) -> Self {
        Poly::Coeff(c)
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Poly::Coeff(0))
    }

    pub fn is_coeff(&self) -> bool {
        matches!(self, Poly::Coeff(_))
    }

    pub fn as_coeff(&self) -> Option<Coeff> {
        match self {
            Poly::Coeff(c) => Some(*c),
            Poly::Sum(_) => None,
        }
    }

    /// Terms in descending exponent order; empty for a constant.
    pub fn monos(&self) -> &[Mono] {
        match self {
            Poly::Coeff(_) => &[],
            Poly::Sum(monos) => monos,
        }
    }

    /// Builds a canonical polynomial from an arbitrary list of monomials.
    ///
    /// The list may be unsorted, repeat exponents and contain zero terms.
    /// Terms sharing an exponent are summed, zero terms are dropped and a
    /// lone constant term is collapsed to [`Poly::Coeff`].
    ///
    /// # Panics
    ///
    /// Panics if summing terms that share an exponent overflows a
    /// coefficient; see [`Poly::checked_from_monos`].
    pub fn from_monos(monos: Vec<Mono>) -> Self {
        expect_in_range(Poly::checked_from_monos(monos))
    }

    pub fn checked_from_monos(mut monos: Vec<Mono>) -> Result<Self> {
        monos.sort_by(|a, b| b.exp.cmp(&a.exp));

        let mut merged: Vec<Mono> = Vec::with_capacity(monos.len());
        for mono in monos {
            match merged.last_mut() {
                Some(last) if last.exp == mono.exp => {
                    let acc = std::mem::take(&mut last.poly);
                    last.poly = acc.checked_add_owned(mono.poly)?;
                }
                _ => merged.push(mono),
            }
        }
        merged.retain(|mono| !mono.poly.is_zero());

        if merged.is_empty() {
            return Ok(Poly::zero());
        }
        if let [Mono { exp: 0, poly: Poly::Coeff(c) }] = merged[..] {
            return Ok(Poly::Coeff(c));
        }

        merged.shrink_to_fit();
        let poly = Poly::Sum(merged);
        debug_assert!(poly.is_canonical(), "non-canonical result {poly:?}");
        Ok(poly)
    }

    /// Like [`Poly::from_monos`], leaving the caller's terms untouched.
    pub fn from_mono_slice(monos: &[Mono]) -> Self {
        Poly::from_monos(monos.to_vec())
    }

    /// Checks the canonical-form rules recursively.
    pub fn is_canonical(&self) -> bool {
        match self {
            Poly::Coeff(_) => true,
            Poly::Sum(monos) => {
                let collapsible = matches!(
                    monos.as_slice(),
                    [Mono { exp: 0, poly: Poly::Coeff(_) }]
                );
                !monos.is_empty()
                    && !collapsible
                    && monos.windows(2).all(|w| w[0].exp > w[1].exp)
                    && monos
                        .iter()
                        .all(|m| m.exp >= 0 && !m.poly.is_zero() && m.poly.is_canonical())
            }
        }
    }
}

impl Default for Poly {
    fn default() -> Self {
        Poly::zero()
    }
}

impl From<Coeff> for Poly {
    fn from(c: Coeff) -> Self {
        Poly::Coeff(c)
    }
}

impl From<Mono> for Poly {
    fn from(mono: Mono) -> Self {
        Poly::from_monos(vec![mono])
    }
}

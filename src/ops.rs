//! Ring operations, degrees and evaluation.
//!
//! Every operation that can leave the range of [`Coeff`] or [`Exp`] comes in
//! two forms. The `checked_*` methods return [`PolyError::Overflow`]; the
//! plain methods and operators panic on overflow, like the integer operators.

use num_traits::{One, Zero};

use crate::error::{OverflowKind, PolyError, Result};
use crate::polynomial::{Coeff, Exp, Mono, Poly};

impl Poly {
    /// # Panics
    ///
    /// Panics on coefficient overflow; see [`Poly::checked_add`].
    pub fn add(&self, other: &Self) -> Self {
        expect_in_range(self.checked_add(other))
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.clone().checked_add_owned(other.clone())
    }

    pub fn sub(&self, other: &Self) -> Self {
        expect_in_range(self.checked_sub(other))
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.clone().checked_add_owned(other.checked_neg()?)
    }

    pub fn neg(&self) -> Self {
        expect_in_range(self.checked_neg())
    }

    /// Fails only for a coefficient equal to [`Coeff::MIN`].
    pub fn checked_neg(&self) -> Result<Self> {
        self.checked_scale(-1)
    }

    /// Multiplies every coefficient by `c`.
    ///
    /// # Panics
    ///
    /// Panics if a scaled coefficient leaves the [`Coeff`] range.
    pub fn scale(&self, c: Coeff) -> Self {
        expect_in_range(self.checked_scale(c))
    }

    pub fn checked_scale(&self, c: Coeff) -> Result<Self> {
        match (c, self) {
            (0, _) => Ok(Poly::zero()),
            (1, p) => Ok(p.clone()),
            (_, Poly::Coeff(a)) => mul_coeffs(*a, c).map(Poly::Coeff),
            (_, Poly::Sum(monos)) => {
                let scaled = monos
                    .iter()
                    .map(|m| -> Result<Mono> { Ok(Mono::new(m.poly.checked_scale(c)?, m.exp)) })
                    .collect::<Result<Vec<_>>>()?;
                Poly::checked_from_monos(scaled)
            }
        }
    }

    /// # Panics
    ///
    /// Panics if a coefficient or an exponent of the product overflows.
    pub fn mul(&self, other: &Self) -> Self {
        expect_in_range(self.checked_mul(other))
    }

    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        match (self, other) {
            (Poly::Coeff(c), q) => q.checked_scale(*c),
            (p, Poly::Coeff(c)) => p.checked_scale(*c),
            (Poly::Sum(ps), Poly::Sum(qs)) => {
                let mut monos = Vec::with_capacity(ps.len() * qs.len());
                for a in ps {
                    for b in qs {
                        let poly = a.poly.checked_mul(&b.poly)?;
                        let exp = if poly.is_zero() {
                            0
                        } else {
                            add_exps(a.exp, b.exp)?
                        };
                        monos.push(Mono::new(poly, exp));
                    }
                }
                Poly::checked_from_monos(monos)
            }
        }
    }

    /// Total degree; `-1` for the zero polynomial.
    pub fn deg(&self) -> i64 {
        match self {
            Poly::Coeff(0) => -1,
            Poly::Coeff(_) => 0,
            Poly::Sum(monos) => monos
                .iter()
                .map(|m| i64::from(m.exp) + m.poly.deg())
                .max()
                .unwrap_or(0),
        }
    }

    /// Degree in variable `var`; `-1` for the zero polynomial.
    ///
    /// Variables nested deeper than the polynomial itself have degree 0.
    pub fn deg_by(&self, var: usize) -> i64 {
        match self {
            Poly::Coeff(0) => -1,
            Poly::Coeff(_) => 0,
            Poly::Sum(monos) if var == 0 => monos.first().map_or(0, |m| i64::from(m.exp)),
            Poly::Sum(monos) => monos
                .iter()
                .map(|m| m.poly.deg_by(var - 1))
                .max()
                .unwrap_or(0)
                .max(0),
        }
    }

    /// Substitutes `x` for variable 0.
    ///
    /// The result is a polynomial in the remaining variables, shifted one
    /// level up.
    pub fn at(&self, x: Coeff) -> Self {
        expect_in_range(self.checked_at(x))
    }

    pub fn checked_at(&self, x: Coeff) -> Result<Self> {
        match self {
            Poly::Coeff(_) => Ok(self.clone()),
            Poly::Sum(monos) => monos.iter().try_fold(Poly::zero(), |acc, m| {
                let term = m.poly.checked_scale(coeff_pow(x, m.exp.unsigned_abs())?)?;
                acc.checked_add_owned(term)
            }),
        }
    }

    pub(crate) fn checked_add_owned(self, rhs: Poly) -> Result<Poly> {
        match (self, rhs) {
            (p, q) if q.is_zero() => Ok(p),
            (p, q) if p.is_zero() => Ok(q),
            (Poly::Coeff(a), Poly::Coeff(b)) => add_coeffs(a, b).map(Poly::Coeff),
            (p, q) => {
                let mut monos = into_monos(p);
                monos.extend(into_monos(q));
                Poly::checked_from_monos(monos)
            }
        }
    }
}

pub(crate) fn expect_in_range<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

pub(crate) fn coeff_pow(base: Coeff, exp: u32) -> Result<Coeff> {
    base.checked_pow(exp)
        .ok_or(PolyError::Overflow(OverflowKind::Coefficient))
}

fn add_coeffs(a: Coeff, b: Coeff) -> Result<Coeff> {
    a.checked_add(b)
        .ok_or(PolyError::Overflow(OverflowKind::Coefficient))
}

fn mul_coeffs(a: Coeff, b: Coeff) -> Result<Coeff> {
    a.checked_mul(b)
        .ok_or(PolyError::Overflow(OverflowKind::Coefficient))
}

fn add_exps(a: Exp, b: Exp) -> Result<Exp> {
    a.checked_add(b)
        .ok_or(PolyError::Overflow(OverflowKind::Exponent))
}

fn into_monos(poly: Poly) -> Vec<Mono> {
    match poly {
        Poly::Coeff(c) => vec![Mono::new(Poly::Coeff(c), 0)],
        Poly::Sum(monos) => monos,
    }
}

impl std::ops::Add for Poly {
    type Output = Poly;
    fn add(self, rhs: Poly) -> Poly {
        expect_in_range(self.checked_add_owned(rhs))
    }
}

impl std::ops::Add<&Poly> for Poly {
    type Output = Poly;
    fn add(self, rhs: &Poly) -> Poly {
        self + rhs.clone()
    }
}

impl std::ops::Sub for Poly {
    type Output = Poly;
    fn sub(self, rhs: Poly) -> Poly {
        self + rhs.scale(-1)
    }
}

impl std::ops::Sub<&Poly> for Poly {
    type Output = Poly;
    fn sub(self, rhs: &Poly) -> Poly {
        self + rhs.scale(-1)
    }
}

impl std::ops::Mul for Poly {
    type Output = Poly;
    fn mul(self, rhs: Poly) -> Poly {
        Poly::mul(&self, &rhs)
    }
}

impl std::ops::Mul<&Poly> for Poly {
    type Output = Poly;
    fn mul(self, rhs: &Poly) -> Poly {
        Poly::mul(&self, rhs)
    }
}

impl std::ops::Neg for Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        self.scale(-1)
    }
}

impl std::ops::Neg for &Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        self.scale(-1)
    }
}

impl std::iter::Sum for Poly {
    fn sum<I: Iterator<Item = Poly>>(iter: I) -> Poly {
        iter.fold(Poly::zero(), |acc, p| acc + p)
    }
}

impl Zero for Poly {
    fn zero() -> Self {
        Poly::zero()
    }

    fn is_zero(&self) -> bool {
        Poly::is_zero(self)
    }
}

impl One for Poly {
    fn one() -> Self {
        Poly::one()
    }
}

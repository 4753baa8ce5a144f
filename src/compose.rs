use tracing::debug;

use crate::error::Result;
use crate::ops::{coeff_pow, expect_in_range};
use crate::polynomial::Poly;

impl Poly {
    /// Raises `self` to `exp` by repeated squaring.
    ///
    /// # Panics
    ///
    /// Panics on overflow; see [`Poly::checked_pow`].
    pub fn pow(&self, exp: u32) -> Self {
        expect_in_range(self.checked_pow(exp))
    }

    pub fn checked_pow(&self, exp: u32) -> Result<Self> {
        if let Poly::Coeff(c) = self {
            return coeff_pow(*c, exp).map(Poly::Coeff);
        }
        let mut result = Poly::one();
        let mut base = self.clone();
        let mut n = exp;
        while n > 0 {
            if n & 1 == 1 {
                result = result.checked_mul(&base)?;
            }
            n >>= 1;
            if n > 0 {
                base = base.checked_mul(&base)?;
            }
        }
        Ok(result)
    }

    /// Substitutes `qs[i]` for variable `i` and 0 for every variable past
    /// `qs.len() - 1`.
    ///
    /// The cost grows with the powers of `qs[0]` that have to be built, which
    /// can be exponential in the number of terms.
    ///
    /// # Panics
    ///
    /// Panics on overflow; see [`Poly::checked_compose`].
    pub fn compose(&self, qs: &[Poly]) -> Self {
        expect_in_range(self.checked_compose(qs))
    }

    pub fn checked_compose(&self, qs: &[Poly]) -> Result<Self> {
        debug!(
            substitutions = qs.len(),
            terms = self.monos().len(),
            "composing polynomial"
        );
        compose_rec(self, qs).inspect_err(|e| debug!(error = %e, "composition failed"))
    }
}

fn compose_rec(p: &Poly, qs: &[Poly]) -> Result<Poly> {
    match (p, qs.split_first()) {
        (_, None) => Ok(compose_zero(p)),
        (Poly::Coeff(_), Some(_)) => Ok(p.clone()),
        (Poly::Sum(monos), Some((head, tail))) => monos.iter().try_fold(Poly::zero(), |acc, m| {
            let power = head.checked_pow(m.exp.unsigned_abs())?;
            let term = compose_rec(&m.poly, tail)?.checked_mul(&power)?;
            acc.checked_add_owned(term)
        }),
    }
}

/// Value of `p` with every variable set to 0.
fn compose_zero(p: &Poly) -> Poly {
    let mut current = p;
    loop {
        match current {
            Poly::Coeff(_) => return current.clone(),
            Poly::Sum(monos) => match monos.last() {
                Some(m) if m.exp == 0 => current = &m.poly,
                _ => return Poly::zero(),
            },
        }
    }
}

//! Canonical text rendering, accepted back by [`crate::parse_poly`].

use std::fmt;

use crate::polynomial::{Mono, Poly};

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Poly::Coeff(c) => write!(f, "{c}"),
            Poly::Sum(monos) => {
                for (i, mono) in monos.iter().enumerate() {
                    if i > 0 {
                        f.write_str("+")?;
                    }
                    write!(f, "{mono}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Mono {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.poly, self.exp)
    }
}

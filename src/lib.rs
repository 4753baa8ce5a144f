//! Sparse multivariate polynomials with integer coefficients, kept in a
//! recursive canonical form, plus a parser for their textual notation.

mod compose;
pub mod error;
mod format;
mod ops;
pub mod parser;
pub mod polynomial;
pub mod prelude;
pub mod ui;

pub use error::{OverflowKind, ParseErrorKind, PolyError, Result};
pub use parser::{DEFAULT_MAX_DEPTH, parse_poly, parse_poly_with_limit};
pub use polynomial::{Coeff, Exp, Mono, Poly};

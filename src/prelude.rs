//! String-based convenience API for quick experimentation.

pub use crate::ui::{add, at, canon, compose, deg, deg_by, is_eq, mul, neg, parse, sub};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PolyError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    #[error("parse error at offset {offset}: {kind}")]
    Parse { offset: usize, kind: ParseErrorKind },
    #[error("{0} overflow")]
    Overflow(OverflowKind),
}

impl PolyError {
    pub fn parse_kind(&self) -> Option<ParseErrorKind> {
        match self {
            PolyError::Parse { kind, .. } => Some(*kind),
            PolyError::Overflow(_) => None,
        }
    }
}

/// Why a polynomial literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("malformed literal")]
    Malformed,
    #[error("expected '{0}'")]
    Expected(char),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("coefficient out of range")]
    CoeffOutOfRange,
    #[error("exponent out of range")]
    ExpOutOfRange,
    #[error("nesting too deep")]
    TooDeep,
    #[error("trailing input")]
    TrailingInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OverflowKind {
    #[error("coefficient")]
    Coefficient,
    #[error("exponent")]
    Exponent,
}

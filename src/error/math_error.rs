use crate::error::{EvalError, SyntaxError};

/// Result type used by the per-line entry points.
///
/// Either a value of type `T` or the unified [`MathError`] describing why
/// the line was rejected.
pub type MathResult<T> = Result<T, MathError>;

#[derive(Debug)]
/// The unified error kind for a single input line.
///
/// A line fails in exactly one of two phases: validation, before any token
/// is interpreted, or evaluation, while the expression is being reduced.
/// This enum keeps the two vocabularies separate while giving callers one
/// closed type to match on.
pub enum MathError {
    /// The line failed validation.
    Syntax(SyntaxError),
    /// The line failed during evaluation.
    Eval(EvalError),
}

impl From<SyntaxError> for MathError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<EvalError> for MathError {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl std::fmt::Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(error) => error.fmt(f),
            Self::Eval(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for MathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(error) => Some(error),
            Self::Eval(error) => Some(error),
        }
    }
}

#[derive(Debug)]
/// Represents all errors that can occur while evaluating a validated line.
pub enum EvalError {
    /// A numeric literal could not be parsed, such as `1..2`.
    InvalidNumber {
        /// The normalized expression containing the bad literal.
        expression: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// The expression could not be reduced to a single value, for example a
    /// line consisting only of operators or one with residual operands.
    MalformedExpression {
        /// The normalized expression.
        expression: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { expression } => {
                write!(f, "Runtime error: Invalid number in expression: {expression}")
            },

            Self::DivisionByZero => write!(f, "Arithmetic error"),

            Self::MalformedExpression { expression } => {
                write!(f, "Runtime error: Malformed expression: {expression}")
            },
        }
    }
}

impl std::error::Error for EvalError {}

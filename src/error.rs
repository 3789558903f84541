/// Syntax errors.
///
/// Defines all error types that can occur while validating a raw input line,
/// before any evaluation takes place. Syntax errors cover characters outside
/// the accepted set, unbalanced parentheses, and a missing `=` marker.
pub mod syntax_error;

/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a validated
/// expression: malformed numeric literals, division by zero, and expressions
/// whose operand stack cannot be reduced to a single value.
pub mod eval_error;

/// The unified per-line error kind.
///
/// Wraps the phase-specific errors into a single closed enumeration so that
/// callers can handle every failure mode of a line exhaustively.
pub mod math_error;

pub use eval_error::EvalError;
pub use math_error::{MathError, MathResult};
pub use syntax_error::SyntaxError;

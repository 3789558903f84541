/// Validation of raw input lines.
///
/// The validator checks a line character by character before anything is
/// interpreted: the character set, parenthesis balance, and the presence of
/// the `=` marker. It produces the normalized (whitespace-free) expression
/// that every later phase works on.
///
/// # Responsibilities
/// - Rejects lines containing characters outside the accepted set.
/// - Detects unbalanced parentheses in either direction.
/// - Requires at least one `=` per line.
/// - Strips whitespace, producing the normalized expression.
pub mod validator;

/// The lexer module tokenizes normalized expressions.
///
/// Numeric literals are recognized as maximal runs of digits and decimal
/// points; operators, parentheses and `=` are single-character tokens.
pub mod lexer;

/// Stack-based evaluation of tokenized expressions.
///
/// The evaluator reduces a token stream with one operand stack and one
/// operator stack, deferring each operator until precedence rules allow it
/// to be applied. This is the execution core of the analyzer.
///
/// # Responsibilities
/// - Evaluates `+ - * /` with standard precedence and left associativity.
/// - Resolves parenthesized groups.
/// - Reports division by zero, invalid literals, and expressions that do
///   not reduce to a single value.
pub mod evaluator;

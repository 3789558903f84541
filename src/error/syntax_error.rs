#[derive(Debug)]
/// Represents all errors that can be detected before evaluating a line.
///
/// Every variant maps to a fixed, user-visible message; the message text is
/// produced only by the `Display` impl so that callers can still match on
/// the structured kind.
pub enum SyntaxError {
    /// The line contains a character outside the accepted set
    /// `0-9 . + - * / ( ) = space`.
    IllegalCharacters {
        /// The first offending character.
        found: char,
    },
    /// A `)` appeared before any `(` that could match it.
    UnbalancedCloseParen,
    /// A `(` was still open at the end of the line.
    UnbalancedOpenParen,
    /// The line contains no `=` marker.
    MissingEquals,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacters { .. } => write!(f, "Illegal characters"),

            Self::UnbalancedCloseParen => write!(f, "Syntax error: '(' expected"),

            Self::UnbalancedOpenParen => write!(f, "Syntax error: ')' expected"),

            Self::MissingEquals => write!(f, "Syntax error: '=' expected"),
        }
    }
}

impl std::error::Error for SyntaxError {}

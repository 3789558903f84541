use crate::error::SyntaxError;

/// Characters a raw line may contain: digits, the decimal point, the four
/// arithmetic operators, parentheses, `=` and spaces.
const fn is_allowed(c: char) -> bool {
    matches!(c, '0'..='9' | '.' | '+' | '-' | '*' | '/' | '(' | ')' | '=' | ' ')
}

/// Validates a raw input line and produces the normalized expression.
///
/// Checks run in a fixed order: character set first, then parenthesis
/// balance on the whitespace-stripped text, then the `=` marker. The first
/// failing check decides the error, so a line can only ever report one
/// syntax problem.
///
/// An empty line passes the per-character checks vacuously and is rejected
/// by the `=` check.
///
/// # Parameters
/// - `raw`: The input line exactly as read.
///
/// # Returns
/// The normalized expression with all whitespace removed.
///
/// # Errors
/// - `IllegalCharacters` for the first character outside the accepted set.
/// - `UnbalancedCloseParen` when a `)` has no `(` left to match.
/// - `UnbalancedOpenParen` when a `(` is still open at the end.
/// - `MissingEquals` when the line contains no `=`.
///
/// # Example
/// ```
/// use mathline::calculator::validator::validate;
///
/// let normalized = validate("( 1 + 2 ) * 3 =").unwrap();
/// assert_eq!(normalized, "(1+2)*3=");
///
/// assert!(validate("2^3=").is_err());
/// ```
pub fn validate(raw: &str) -> Result<String, SyntaxError> {
    if let Some(found) = raw.chars().find(|&c| !is_allowed(c)) {
        return Err(SyntaxError::IllegalCharacters { found });
    }

    let normalized: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    let mut open = 0_u32;
    for c in normalized.chars() {
        match c {
            '(' => open += 1,
            ')' => {
                if open == 0 {
                    return Err(SyntaxError::UnbalancedCloseParen);
                }
                open -= 1;
            },
            _ => {},
        }
    }
    if open != 0 {
        return Err(SyntaxError::UnbalancedOpenParen);
    }

    if !normalized.contains('=') {
        return Err(SyntaxError::MissingEquals);
    }

    Ok(normalized)
}

use logos::Logos;

/// Represents a lexical token in a normalized expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all tokens the evaluator understands.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens such as `42`, `2.5` or `.5`.
    ///
    /// A literal is the maximal run of digits and decimal points, so `1..2`
    /// is a single malformed literal rather than two tokens. Malformed runs
    /// surface as lexer errors.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`; required by the validator, inert during evaluation.
    #[token("=")]
    Equals,
    /// Spaces and feeds. Normalization strips them before the lexer runs,
    /// but stray blanks are tolerated.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the run is a valid literal.
/// - `None`: If the run is malformed, which turns the token into an error.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

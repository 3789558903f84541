use logos::Logos;

use crate::{calculator::lexer::Token, error::EvalError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinOp {
    /// `*` and `/` bind tighter than `+` and `-`.
    const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Applies the operator to `a` and `b`, where `a` was pushed first.
    ///
    /// # Errors
    /// `DivisionByZero` when dividing by exactly zero; division never
    /// produces an infinity or NaN.
    fn apply(self, a: f64, b: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Sub => Ok(a - b),
            Self::Mul => Ok(a * b),
            Self::Div => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(a / b)
            },
        }
    }
}

/// An entry on the pending-operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    /// A deferred binary operator.
    Op(BinOp),
    /// An unmatched `(` delimiting a group.
    LParen,
}

/// Evaluates a validator-accepted expression to a single value.
///
/// The expression is scanned left to right once, with two stacks: numbers
/// are pushed onto the operand stack, operators wait on the pending stack
/// until precedence rules allow them to be applied, and each application
/// replaces the two most recent operands with the result. `=` tokens are
/// skipped; the validator requires them but they carry no meaning here.
///
/// Both stacks live only for the duration of the call, so repeated
/// evaluation of the same expression always yields the same result.
///
/// # Parameters
/// - `expression`: The normalized expression produced by the validator.
///
/// # Returns
/// The single value the expression reduces to.
///
/// # Errors
/// - `InvalidNumber` if a literal run does not parse, such as `1..2`.
/// - `DivisionByZero` if a division has an exact-zero right operand.
/// - `MalformedExpression` if an application runs out of operands or the
///   operand stack does not hold exactly one value at the end.
///
/// # Example
/// ```
/// use mathline::calculator::evaluator::evaluate;
///
/// let value = evaluate("(2+3)*4=").unwrap();
/// assert_eq!(value, 20.0);
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let mut operands: Vec<f64> = Vec::new();
    let mut pending: Vec<Pending> = Vec::new();

    for token in Token::lexer(expression) {
        let Ok(token) = token else {
            return Err(EvalError::InvalidNumber { expression: expression.to_string() });
        };

        match token {
            Token::Number(value) => operands.push(value),

            Token::LParen => pending.push(Pending::LParen),

            Token::RParen => close_group(&mut operands, &mut pending, expression)?,

            Token::Plus => push_operator(BinOp::Add, &mut operands, &mut pending, expression)?,
            Token::Minus => push_operator(BinOp::Sub, &mut operands, &mut pending, expression)?,
            Token::Star => push_operator(BinOp::Mul, &mut operands, &mut pending, expression)?,
            Token::Slash => push_operator(BinOp::Div, &mut operands, &mut pending, expression)?,

            // The validator requires '=' but it contributes no token here.
            Token::Equals | Token::Ignored => {},
        }
    }

    while let Some(entry) = pending.pop() {
        match entry {
            Pending::Op(op) => apply_deferred(op, &mut operands, expression)?,
            Pending::LParen => return Err(malformed(expression)),
        }
    }

    match operands.pop() {
        Some(value) if operands.is_empty() => Ok(value),
        _ => Err(malformed(expression)),
    }
}

/// Defers `op`, first applying every pending operator that binds at least
/// as tightly. An open `(` stops the draining, which keeps the group's
/// operators deferred until the matching `)`.
fn push_operator(op: BinOp,
                 operands: &mut Vec<f64>,
                 pending: &mut Vec<Pending>,
                 expression: &str)
                 -> EvalResult<()> {
    while let Some(Pending::Op(top)) = pending.last().copied() {
        if top.precedence() < op.precedence() {
            break;
        }
        pending.pop();
        apply_deferred(top, operands, expression)?;
    }
    pending.push(Pending::Op(op));
    Ok(())
}

/// Applies pending operators until the `(` that opened the group, then
/// discards it.
fn close_group(operands: &mut Vec<f64>,
               pending: &mut Vec<Pending>,
               expression: &str)
               -> EvalResult<()> {
    loop {
        match pending.pop() {
            Some(Pending::Op(op)) => apply_deferred(op, operands, expression)?,
            Some(Pending::LParen) => return Ok(()),
            None => return Err(malformed(expression)),
        }
    }
}

/// Applies a deferred operator to the two most recent operands and pushes
/// the result back.
fn apply_deferred(op: BinOp, operands: &mut Vec<f64>, expression: &str) -> EvalResult<()> {
    let b = pop_operand(operands, expression)?;
    let a = pop_operand(operands, expression)?;
    operands.push(op.apply(a, b)?);
    Ok(())
}

fn pop_operand(operands: &mut Vec<f64>, expression: &str) -> EvalResult<f64> {
    match operands.pop() {
        Some(value) => Ok(value),
        None => Err(malformed(expression)),
    }
}

fn malformed(expression: &str) -> EvalError {
    EvalError::MalformedExpression { expression: expression.to_string() }
}

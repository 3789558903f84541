//! # mathline
//!
//! mathline is a line-oriented analyzer for simple arithmetic expressions.
//! Each input line is validated (character set, balanced parentheses, a
//! required `=` marker) and then evaluated with standard operator
//! precedence, so `*` and `/` bind tighter than `+` and `-`. Every line
//! reports either its value or a description of why it was rejected, and a
//! failing line never stops the batch.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    calculator::{evaluator::evaluate, validator::validate},
    error::MathResult,
};

/// Line-oriented batch processing.
///
/// Drives the analyzer over a whole input source: each line is evaluated
/// independently and written back annotated with its value or error, with
/// progress mirrored to the console.
pub mod batch;
/// The calculator pipeline: validation, tokenization and evaluation.
///
/// This module ties together the phases a line passes through on its way
/// to a numeric result. The validator screens and normalizes the raw text,
/// the lexer recognizes tokens, and the evaluator reduces them with two
/// stacks.
///
/// # Responsibilities
/// - Coordinates the core components: validator, lexer, and evaluator.
/// - Keeps each phase free of I/O so the pipeline stays a pure function of
///   the input line.
pub mod calculator;
/// Provides unified error types for validation and evaluation.
///
/// This module defines all errors that a single input line can produce,
/// split by phase and unified under one closed kind. Message formatting
/// lives in the `Display` impls, so the structured kinds stay available
/// for exhaustive handling while the user-visible text stays fixed.
///
/// # Responsibilities
/// - Defines error enums for both failure phases (validation, evaluation).
/// - Carries minimal context, such as the offending character.
/// - Supports integration with standard error handling traits.
pub mod error;

/// Evaluates a single input line.
///
/// This is the core entry point of the crate: a pure function from one
/// line of text to either its numeric value or the error kind describing
/// why it was rejected. Validation runs first; only accepted lines are
/// evaluated. No state survives the call.
///
/// # Errors
/// Returns the unified error kind for any validation or evaluation
/// failure; see [`error::MathError`].
///
/// # Examples
/// ```
/// use mathline::evaluate_line;
///
/// let value = evaluate_line("2 + 3 * 4 =").unwrap();
/// assert_eq!(value, 14.0);
///
/// // The '=' terminator is required for a line to be accepted.
/// assert!(evaluate_line("2 + 2").is_err());
/// ```
pub fn evaluate_line(line: &str) -> MathResult<f64> {
    let normalized = validate(line)?;
    let value = evaluate(&normalized)?;
    Ok(value)
}

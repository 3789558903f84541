use mathline::{
    error::{EvalError, MathError, SyntaxError},
    evaluate_line,
};

fn assert_value(line: &str, expected: f64) {
    match evaluate_line(line) {
        Ok(value) => {
            assert_eq!(value, expected, "{line} evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("{line} failed: {e}"),
    }
}

fn assert_syntax_error(line: &str, check: fn(&SyntaxError) -> bool) {
    match evaluate_line(line) {
        Ok(value) => panic!("{line} evaluated to {value} but was expected to fail"),
        Err(MathError::Syntax(e)) => assert!(check(&e), "{line} failed with the wrong kind: {e:?}"),
        Err(e) => panic!("{line} failed in the wrong phase: {e:?}"),
    }
}

fn assert_eval_error(line: &str, check: fn(&EvalError) -> bool) {
    match evaluate_line(line) {
        Ok(value) => panic!("{line} evaluated to {value} but was expected to fail"),
        Err(MathError::Eval(e)) => assert!(check(&e), "{line} failed with the wrong kind: {e:?}"),
        Err(e) => panic!("{line} failed in the wrong phase: {e:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1+1=", 2.0);
    assert_value("10-4=", 6.0);
    assert_value("6*7=", 42.0);
    assert_value("8/2=", 4.0);
}

#[test]
fn precedence_and_associativity() {
    assert_value("2+3*4=", 14.0);
    assert_value("2*3+4=", 10.0);
    assert_value("8-4-2=", 2.0);
    assert_value("100/10/5=", 2.0);
    assert_value("2+8/4=", 4.0);
    assert_value("1-2+3=", 2.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)*4=", 20.0);
    assert_value("2*(3+4)=", 14.0);
    assert_value("((1+2)*(3+4))=", 21.0);
    assert_value("24/(2*(1+2))=", 4.0);
}

#[test]
fn decimal_literals() {
    assert_value("1.5+2.5=", 4.0);
    assert_value(".5*4=", 2.0);
    assert_value("3.=", 3.0);
}

#[test]
fn whitespace_is_ignored() {
    assert_value("  2 + 2 = ", 4.0);
    assert_value(" ( 1 + 2 ) * 3 =", 9.0);
}

#[test]
fn equals_is_required_but_inert() {
    // The marker itself contributes nothing to the evaluation.
    assert_value("10=", 10.0);
    assert_value("=1+1=", 2.0);
}

#[test]
fn evaluation_is_idempotent() {
    let first = evaluate_line("(2+3)*4=").unwrap();
    let second = evaluate_line("(2+3)*4=").unwrap();
    assert_eq!(first, second);
}

#[test]
fn illegal_characters_are_rejected() {
    for line in ["2^3=", "two+2=", "1+1=2;", "sqrt(4)=", "1%2="] {
        assert_syntax_error(line, |e| matches!(e, SyntaxError::IllegalCharacters { .. }));
    }
}

#[test]
fn the_offending_character_is_reported() {
    match evaluate_line("2^3=") {
        Err(MathError::Syntax(SyntaxError::IllegalCharacters { found })) => {
            assert_eq!(found, '^');
        },
        other => panic!("expected IllegalCharacters, got {other:?}"),
    }
}

#[test]
fn unbalanced_parentheses_report_their_direction() {
    assert_syntax_error("2+(3*4=", |e| matches!(e, SyntaxError::UnbalancedOpenParen));
    assert_syntax_error("((1+2)=", |e| matches!(e, SyntaxError::UnbalancedOpenParen));
    assert_syntax_error(")1+2=", |e| matches!(e, SyntaxError::UnbalancedCloseParen));
    assert_syntax_error("(1+2))=", |e| matches!(e, SyntaxError::UnbalancedCloseParen));
}

#[test]
fn missing_equals_is_rejected() {
    assert_syntax_error("1+1", |e| matches!(e, SyntaxError::MissingEquals));
    assert_syntax_error("", |e| matches!(e, SyntaxError::MissingEquals));
    assert_syntax_error("   ", |e| matches!(e, SyntaxError::MissingEquals));
}

#[test]
fn division_by_zero_is_an_arithmetic_error() {
    assert_eval_error("5/0=", |e| matches!(e, EvalError::DivisionByZero));
    assert_eval_error("0/0=", |e| matches!(e, EvalError::DivisionByZero));
    // The zero only has to be exact, not literal.
    assert_eval_error("1/(2-2)=", |e| matches!(e, EvalError::DivisionByZero));
}

#[test]
fn malformed_literals_are_invalid_numbers() {
    assert_eval_error("1..2+3=", |e| matches!(e, EvalError::InvalidNumber { .. }));
    assert_eval_error("1.2.3=", |e| matches!(e, EvalError::InvalidNumber { .. }));
}

#[test]
fn expressions_that_do_not_reduce_are_malformed() {
    // Operators with no operands to consume.
    assert_eval_error("+=", |e| matches!(e, EvalError::MalformedExpression { .. }));
    assert_eval_error("3*=", |e| matches!(e, EvalError::MalformedExpression { .. }));
    // An empty group leaves nothing on the operand stack.
    assert_eval_error("()=", |e| matches!(e, EvalError::MalformedExpression { .. }));
    // A residual right-hand side leaves two values on the operand stack.
    assert_eval_error("1+1=2", |e| matches!(e, EvalError::MalformedExpression { .. }));
    assert_eval_error("10=2+3", |e| matches!(e, EvalError::MalformedExpression { .. }));
}

#[test]
fn messages_match_the_report_format() {
    let cases = [("2^3=", "Illegal characters"),
                 (")1+2=", "Syntax error: '(' expected"),
                 ("2+(3*4=", "Syntax error: ')' expected"),
                 ("1+1", "Syntax error: '=' expected"),
                 ("5/0=", "Arithmetic error"),
                 ("1..2+3=", "Runtime error: Invalid number in expression: 1..2+3="),
                 ("3*=", "Runtime error: Malformed expression: 3*=")];

    for (line, message) in cases {
        let error = evaluate_line(line).unwrap_err();
        assert_eq!(error.to_string(), message, "wrong message for {line}");
    }
}

//! Error Reporting Integration Tests
//!
//! Verifies that malformed scripts fail compilation with the expected
//! classification and message, and that diagnostics carry the
//! offending source fragment.

use core_types::{ErrorKind, ScriptError};
use interpreter::{compile, ScriptResult};
use lexer::tokenize;

fn compile_err<T: ScriptResult + std::fmt::Debug>(source: &str) -> ScriptError {
    let tokens = tokenize(source).expect("Tokenization failed");
    compile::<T>(tokens).expect_err("Compilation should have failed")
}

/// Test: Unknown character sequences fail tokenization
#[test]
fn test_unrecognized_input() {
    let err = tokenize("ergebnis 1 & 2.").expect_err("Tokenization should have failed");
    assert_eq!(err.kind, ErrorKind::SyntaxError);
    assert!(err.message.contains("Unrecognized"));
}

/// Test: Unbalanced delimiters
#[test]
fn test_delimiter_mismatch() {
    let err = compile_err::<f64>("ergebnis ((1 + 2).");
    assert!(err.message.contains("count mismatch"));

    let err = compile_err::<f64>("wenn wahr mache { ergebnis 1.");
    assert!(err.message.contains("count mismatch"));
}

/// Test: A statement without its terminator
#[test]
fn test_missing_terminator() {
    let err = compile_err::<f64>("ergebnis 1");
    assert!(err.message.contains("Invalid expression end"));
}

/// Test: A block-bodied chain still needs its trailing terminator
#[test]
fn test_unterminated_conditional_chain() {
    let err = compile_err::<f64>("wenn wahr mache { ergebnis 1. }");
    assert!(err.message.contains("Invalid expression end"));
}

/// Test: A sonst clause after the chain already closed
#[test]
fn test_else_after_closed_chain() {
    let err = compile_err::<f64>(
        "wenn wahr mache ergebnis 1. sonst ergebnis 2. sonst ergebnis 3.",
    );
    assert!(err.message.contains("without a preceding"));
}

/// Test: Double assignment in one statement
#[test]
fn test_double_assignment() {
    let err = compile_err::<f64>("A ist B ist 1.");
    assert!(err.message.contains("Only one assignment per expression is allowed"));
}

/// Test: Reading a variable that was never assigned
#[test]
fn test_undeclared_variable() {
    let err = compile_err::<f64>("ergebnis A + 1.");
    assert_eq!(err.kind, ErrorKind::ReferenceError);
    assert!(err.message.contains("has not been declared"));
}

/// Test: Dangling unary minus
#[test]
fn test_dangling_negative() {
    let err = compile_err::<f64>("ergebnis -.");
    assert!(err.message.contains("Invalid negative numeric expression"));
}

/// Test: Adjacent values with no operator between them
#[test]
fn test_adjacent_values() {
    let err = compile_err::<f64>("ergebnis 1 2.");
    assert!(err.message.contains("Invalid value expression"));
}

/// Test: Arithmetic over a boolean operand
#[test]
fn test_arithmetic_on_boolean() {
    let err = compile_err::<f64>("ergebnis 1 + wahr.");
    assert_eq!(err.kind, ErrorKind::TypeError);
    assert!(err.message.contains("not a valid numerical expression"));
}

/// Test: Logic over a number operand
#[test]
fn test_logic_on_number() {
    let err = compile_err::<bool>("ergebnis 1 + 2 und wahr.");
    assert_eq!(err.kind, ErrorKind::TypeError);
    assert!(err.message.contains("not a valid boolean expression"));
}

/// Test: A mixed-type return is rejected regardless of result type
#[test]
fn test_mixed_return_fails_for_number_result() {
    let err = compile_err::<f64>("ergebnis 1 + 2 und wahr.");
    assert_eq!(err.kind, ErrorKind::TypeError);
}

/// Test: Return without an expression
#[test]
fn test_empty_return() {
    let err = compile_err::<f64>("ergebnis.");
    assert!(err.message.contains("Return operation is invalid"));
}

/// Test: Return type must match the compiled result type
#[test]
fn test_return_type_mismatch() {
    let err = compile_err::<f64>("ergebnis wahr.");
    assert_eq!(err.kind, ErrorKind::TypeError);

    let err = compile_err::<bool>("ergebnis 1 + 2.");
    assert_eq!(err.kind, ErrorKind::TypeError);
}

/// Test: Bare expressions are not statements
#[test]
fn test_bare_expression_statement() {
    let err = compile_err::<f64>("1 + 2.");
    assert!(err.message.contains("can be used as statements"));
}

/// Test: A lone variable is not a statement
#[test]
fn test_bare_variable_statement() {
    let err = compile_err::<f64>("A ist 1. A.");
    assert!(err
        .message
        .contains("Only variable expressions from type Assignment"));
}

/// Test: Truncated assignments
#[test]
fn test_malformed_assignments() {
    let err = compile_err::<f64>("ist 1.");
    assert!(err.message.contains("at least 3 tokens"));

    let err = compile_err::<f64>("1 ist 2.");
    assert!(err.message.contains("First token of a variable"));

    let err = compile_err::<f64>("A B ist 1.");
    assert!(err.message.contains("Second token of a variable"));
}

/// Test: Reassignment cannot change a variable's type
#[test]
fn test_reassignment_type_change() {
    let err = compile_err::<f64>("A ist 1. A ist wahr. ergebnis A.");
    assert_eq!(err.kind, ErrorKind::TypeError);
    assert!(err.message.contains("Type mismatch in assignment"));
}

/// Test: Equality across different types
#[test]
fn test_equality_type_mismatch() {
    let err = compile_err::<bool>("ergebnis 1 = wahr.");
    assert_eq!(err.kind, ErrorKind::TypeError);
    assert!(err.message.contains("Type mismatch in equality"));
}

/// Test: Diagnostics render the offending fragment after the message
#[test]
fn test_error_carries_source_fragment() {
    let err = compile_err::<f64>("ergebnis B.");
    let rendered = err.to_string();
    assert!(rendered.contains("has not been declared"));
    assert!(rendered.contains('B'));
}

//! Full Pipeline Integration Tests
//!
//! Tests the complete flow: Source -> Tokenizer -> Parser -> Program -> Evaluator -> Result

use interpreter::{compile, ScriptResult};
use lexer::tokenize;

/// Helper function to compile and run a script source
fn run<T: ScriptResult>(source: &str) -> T {
    let tokens = tokenize(source).expect("Tokenization failed");
    let script = compile::<T>(tokens).expect("Compilation failed");
    script.invoke().expect("Invocation failed")
}

/// Test: Division binds tighter than addition
#[test]
fn test_full_pipeline_mixed_precedence() {
    assert_eq!(run::<f64>("ergebnis 1 + 2 / 4."), 1.5);
}

/// Test: Exponentiation
#[test]
fn test_full_pipeline_exponentiation() {
    assert_eq!(run::<f64>("ergebnis 2^2."), 4.0);
}

/// Test: Unary minus wraps the exponentiation chain
#[test]
fn test_full_pipeline_negated_exponentiation() {
    assert_eq!(run::<f64>("ergebnis -2^2."), -4.0);
}

/// Test: Brackets override precedence, comma decimals parse
#[test]
fn test_full_pipeline_bracketed_expression() {
    assert_eq!(run::<f64>("ergebnis (2,5 - (1 - 2)) * 2."), 7.0);
}

/// Test: Modulo
#[test]
fn test_full_pipeline_modulo() {
    assert_eq!(run::<f64>("ergebnis 10 % 3."), 1.0);
}

/// Test: Subtraction chains fold left to right
#[test]
fn test_full_pipeline_subtraction_chain() {
    assert_eq!(run::<f64>("ergebnis 10 - 3 - 2."), 5.0);
}

/// Test: Negated bracket group
#[test]
fn test_full_pipeline_negated_group() {
    assert_eq!(run::<f64>("ergebnis -(2 + 3)^2."), -25.0);
}

/// Test: Boolean composition of comparisons
#[test]
fn test_full_pipeline_boolean_composition() {
    assert!(run::<bool>("ergebnis 1 <= 2 oder 3 >= 4."));
    assert!(!run::<bool>("ergebnis 1 <= 2 und 3 >= 4."));
    assert!(run::<bool>("ergebnis 1 < 2 und 4 >= 4."));
    assert!(!run::<bool>("ergebnis 1 = 2 oder nicht wahr."));
    assert!(run::<bool>("ergebnis nicht (1 > 2)."));
}

/// Test: Equality on all three types
#[test]
fn test_full_pipeline_equality() {
    assert!(run::<bool>("ergebnis 1 + 1 = 2."));
    assert!(run::<bool>("ergebnis wahr = wahr."));
    assert!(run::<bool>("ergebnis 'Wort' = 'Wort'."));
    assert!(!run::<bool>("ergebnis 'Wort' = 'Anderes'."));
}

/// Test: Variables thread values across statements
#[test]
fn test_full_pipeline_variables() {
    assert_eq!(run::<f64>("A ist 3. B ist A * 2. ergebnis A + B."), 9.0);
}

/// Test: Reassignment keeps the slot and replaces the value
#[test]
fn test_full_pipeline_reassignment() {
    assert_eq!(run::<f64>("A ist 1. A ist A + 10. ergebnis A."), 11.0);
}

/// Test: Text result type
#[test]
fn test_full_pipeline_text_result() {
    assert_eq!(run::<String>("A ist 'Hallo'. ergebnis A."), "Hallo");
}

/// Test: First return wins
#[test]
fn test_full_pipeline_first_return_wins() {
    assert_eq!(run::<f64>("ergebnis 1. ergebnis 2."), 1.0);
}

/// Test: A script without ergebnis yields the result type's default
#[test]
fn test_full_pipeline_missing_return_defaults() {
    assert_eq!(run::<f64>("A ist 5."), 0.0);
    assert!(!run::<bool>("A ist 5."));
    assert_eq!(run::<String>("A ist 5."), "");
}

/// Test: Compiled scripts are reusable and invocations are isolated
#[test]
fn test_full_pipeline_invocation_idempotence() {
    let tokens = tokenize("A ist 2. A ist A * A. ergebnis A.").expect("Tokenization failed");
    let script = compile::<f64>(tokens).expect("Compilation failed");

    assert_eq!(script.invoke().expect("First invocation failed"), 4.0);
    assert_eq!(script.invoke().expect("Second invocation failed"), 4.0);
}

/// Test: Whitespace and newlines are insignificant
#[test]
fn test_full_pipeline_whitespace_insensitivity() {
    assert_eq!(run::<f64>("A ist 1.\n\tB ist 2.\n  ergebnis A + B."), 3.0);
}

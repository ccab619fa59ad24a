//! Control Flow Integration Tests
//!
//! Conditional chains, block bodies, scoping and early return across
//! the full pipeline.

use core_types::ErrorKind;
use interpreter::{compile, ScriptResult};
use lexer::tokenize;

fn run<T: ScriptResult>(source: &str) -> T {
    let tokens = tokenize(source).expect("Tokenization failed");
    let script = compile::<T>(tokens).expect("Compilation failed");
    script.invoke().expect("Invocation failed")
}

fn compile_err(source: &str) -> core_types::ScriptError {
    let tokens = tokenize(source).expect("Tokenization failed");
    compile::<f64>(tokens).expect_err("Compilation should have failed")
}

/// Test: Block-bodied conditional takes the branch
#[test]
fn test_block_conditional_taken() {
    assert_eq!(
        run::<f64>("wenn 1 < 2 mache { ergebnis 1. }. ergebnis 2."),
        1.0
    );
}

/// Test: Untaken conditional falls through
#[test]
fn test_block_conditional_untaken() {
    assert_eq!(
        run::<f64>("wenn 1 > 2 mache { ergebnis 1. }. ergebnis 2."),
        2.0
    );
}

/// Test: Exactly one branch of a chain runs
#[test]
fn test_chain_branches_are_exclusive() {
    let source = "\
        A ist 2. \
        wenn A = 1 mache ergebnis 10. \
        sonst wenn A = 2 mache ergebnis 20. \
        sonst wenn A = 3 mache ergebnis 30. \
        sonst ergebnis 40.";
    assert_eq!(run::<f64>(source), 20.0);
}

/// Test: The final sonst branch catches everything
#[test]
fn test_chain_else_catches() {
    let source = "wenn falsch mache ergebnis 1. sonst wenn falsch mache ergebnis 2. sonst ergebnis 3.";
    assert_eq!(run::<f64>(source), 3.0);
}

/// Test: Block bodies in a chain
#[test]
fn test_chain_with_block_bodies() {
    let source = "\
        A ist 7. \
        wenn A < 5 mache { ergebnis 1. } \
        sonst wenn A < 10 mache { ergebnis 2. } \
        sonst { ergebnis 3. }.";
    assert_eq!(run::<f64>(source), 2.0);
}

/// Test: Assignments in a taken block mutate enclosing variables
#[test]
fn test_block_mutates_outer_variable() {
    let source = "A ist 1. wenn wahr mache { A ist A + 1. }. ergebnis A.";
    assert_eq!(run::<f64>(source), 2.0);
}

/// Test: Return inside a block ends the whole invocation
#[test]
fn test_return_inside_block_ends_invocation() {
    let source = "wenn wahr mache { ergebnis 1. }. ergebnis 2.";
    assert_eq!(run::<f64>(source), 1.0);
}

/// Test: Nested conditionals inside a block body
#[test]
fn test_nested_conditional_in_block() {
    let source = "\
        A ist 5. \
        wenn A > 0 mache { \
            wenn A > 3 mache { ergebnis 1. }. \
            ergebnis 2. \
        }. \
        ergebnis 3.";
    assert_eq!(run::<f64>(source), 1.0);
}

/// Test: Block-scoped variables do not leak
#[test]
fn test_block_scope_does_not_leak() {
    let err = compile_err("wenn wahr mache { B ist 1. }. ergebnis B.");
    assert_eq!(err.kind, ErrorKind::ReferenceError);
    assert!(err.message.contains("has not been declared"));
}

/// Test: Sibling blocks do not share declarations
#[test]
fn test_sibling_blocks_are_isolated() {
    let err = compile_err(
        "wenn wahr mache { B ist 1. } sonst { ergebnis B. }. ergebnis 0.",
    );
    assert_eq!(err.kind, ErrorKind::ReferenceError);
}

/// Test: Inline bodies share the enclosing scope
#[test]
fn test_inline_body_shares_scope() {
    let source = "A ist 0. wenn wahr mache A ist 9. ergebnis A.";
    assert_eq!(run::<f64>(source), 9.0);
}

/// Test: sonst without a preceding wenn is rejected
#[test]
fn test_dangling_else_is_rejected() {
    let err = compile_err("sonst ergebnis 1.");
    assert!(err.message.contains("without a preceding"));
}

/// Test: Non-boolean conditions are rejected at compile time
#[test]
fn test_non_boolean_condition_is_rejected() {
    let err = compile_err("wenn 1 + 2 mache { ergebnis 1. }.");
    assert!(err.message.contains("not a valid boolean expression"));
}

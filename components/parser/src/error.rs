//! Parser error helpers.
//!
//! Every helper renders the offending fragment subsequence back to
//! source text so diagnostics point at the statement that violated
//! the contract.

use crate::fragment::{render, Fragment};
use core_types::{ErrorKind, ScriptError};

fn with_rendered(kind: ErrorKind, message: impl Into<String>, fragments: &[Fragment]) -> ScriptError {
    if fragments.is_empty() {
        ScriptError::new(kind, message)
    } else {
        ScriptError::with_fragment(kind, message, render(fragments))
    }
}

/// Create a structural or shape error at the given fragments.
pub(crate) fn syntax_error(message: impl Into<String>, fragments: &[Fragment]) -> ScriptError {
    with_rendered(ErrorKind::SyntaxError, message, fragments)
}

/// Create an operand or branch type mismatch error.
pub(crate) fn type_error(message: impl Into<String>, fragments: &[Fragment]) -> ScriptError {
    with_rendered(ErrorKind::TypeError, message, fragments)
}

/// Create an unresolved-name error.
pub(crate) fn reference_error(message: impl Into<String>, fragments: &[Fragment]) -> ScriptError {
    with_rendered(ErrorKind::ReferenceError, message, fragments)
}

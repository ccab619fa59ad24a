//! Script error types.
//!
//! All failures - structural, type, binding and shape errors alike -
//! are reported through the single [`ScriptError`] type. Parsing is
//! all-or-nothing: the first violated contract aborts the compile and
//! no partial program is produced.

use thiserror::Error;

/// Classification of a script error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Structural or shape error in the token stream (unbalanced
    /// brackets, invalid statement termination, misplaced keywords)
    SyntaxError,
    /// Operand or branch type mismatch detected at parse time
    TypeError,
    /// Reference to a name with no binding (undeclared variable,
    /// return outside a program with a result slot)
    ReferenceError,
    /// Internal invariant violation; not reachable from script input
    InternalError,
}

/// A script compile or evaluation error.
///
/// Carries a human-readable message and, where available, the
/// offending token subsequence rendered back as source text.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, ScriptError};
///
/// let err = ScriptError::with_fragment(
///     ErrorKind::ReferenceError,
///     "Variable has not been declared",
///     "A + 1",
/// );
/// assert_eq!(err.to_string(), "Variable has not been declared: A + 1");
/// ```
#[derive(Debug, Clone, Error)]
#[error("{}", render(.message, .fragment))]
pub struct ScriptError {
    /// The error classification
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Offending token subsequence rendered as source text
    pub fragment: Option<String>,
}

impl ScriptError {
    /// Create an error without a source fragment.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            fragment: None,
        }
    }

    /// Create an error pointing at the offending token subsequence.
    pub fn with_fragment(
        kind: ErrorKind,
        message: impl Into<String>,
        fragment: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            fragment: Some(fragment.into()),
        }
    }
}

fn render(message: &str, fragment: &Option<String>) -> String {
    match fragment {
        Some(fragment) => format!("{}: {}", message, fragment),
        None => message.to_string(),
    }
}

//! Integration test suite for the script language.
//!
//! This crate provides integration tests that verify the lexer,
//! parser and interpreter work together correctly across component
//! boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use interpreter;
    pub use lexer;
    pub use parser;
}

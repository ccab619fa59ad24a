//! Core script value types and error handling.
//!
//! This crate provides the foundational types for the script runtime:
//! value representation, the inferred type attached to every parsed
//! expression, and the error type shared by lexer, parser and
//! interpreter.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of script values
//! - [`ScriptType`] - The three inferred types (boolean, number, text)
//! - [`ScriptError`] - Compile and runtime errors
//! - [`ErrorKind`] - Error classification
//!
//! # Examples
//!
//! ```
//! use core_types::{ScriptType, Value};
//!
//! let num = Value::Number(42.0);
//! assert_eq!(num.script_type(), ScriptType::Number);
//! assert_eq!(Value::default_for(ScriptType::Text), Value::Text(String::new()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod value;

pub use error::{ErrorKind, ScriptError};
pub use value::{ScriptType, Value};

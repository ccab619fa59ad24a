//! Script interpreter.
//!
//! Evaluates compiled programs and exposes the typed compilation
//! entry point: [`compile`] fixes the script's result type through a
//! Rust type parameter and yields a reusable, zero-argument
//! [`CompiledScript`].
//!
//! # Example
//!
//! ```
//! use interpreter::compile;
//! use lexer::tokenize;
//!
//! let script = compile::<f64>(tokenize("ergebnis 1 + 2 / 4.").unwrap()).unwrap();
//! assert_eq!(script.invoke().unwrap(), 1.5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod evaluator;
mod script;

pub use evaluator::evaluate;
pub use script::{compile, CompiledScript, ScriptResult};

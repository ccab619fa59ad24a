//! Typed compilation entry point.
//!
//! [`compile`] turns a token sequence into a [`CompiledScript`] whose
//! result type is fixed by the Rust type parameter. Compilation parses
//! and type-checks once; the compiled script is a zero-argument
//! callable that can be invoked any number of times.

use crate::evaluator::evaluate;
use core_types::{ErrorKind, ScriptError, ScriptType, Value};
use lexer::Token;
use parser::{parse_program, Program};
use std::marker::PhantomData;

/// Rust-side result types a script can be compiled against.
///
/// The implementing type fixes the script's declared result type: the
/// parser rejects `ergebnis` expressions of any other type, and
/// [`CompiledScript::invoke`] converts the result value without a
/// runtime type decision.
pub trait ScriptResult: Sized {
    /// The script type this Rust type corresponds to.
    const SCRIPT_TYPE: ScriptType;

    /// Convert a result value into the Rust type.
    fn from_value(value: Value) -> Result<Self, ScriptError>;
}

impl ScriptResult for bool {
    const SCRIPT_TYPE: ScriptType = ScriptType::Boolean;

    fn from_value(value: Value) -> Result<Self, ScriptError> {
        match value {
            Value::Boolean(b) => Ok(b),
            other => Err(result_mismatch(ScriptType::Boolean, &other)),
        }
    }
}

impl ScriptResult for f64 {
    const SCRIPT_TYPE: ScriptType = ScriptType::Number;

    fn from_value(value: Value) -> Result<Self, ScriptError> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(result_mismatch(ScriptType::Number, &other)),
        }
    }
}

impl ScriptResult for String {
    const SCRIPT_TYPE: ScriptType = ScriptType::Text;

    fn from_value(value: Value) -> Result<Self, ScriptError> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(result_mismatch(ScriptType::Text, &other)),
        }
    }
}

fn result_mismatch(expected: ScriptType, value: &Value) -> ScriptError {
    ScriptError::new(
        ErrorKind::InternalError,
        format!(
            "Script produced a {} result, expected {}",
            value.script_type(),
            expected
        ),
    )
}

/// A compiled, reusable script with a statically known result type.
#[derive(Debug, Clone)]
pub struct CompiledScript<T> {
    program: Program,
    _result: PhantomData<T>,
}

impl<T: ScriptResult> CompiledScript<T> {
    /// Run the script against fresh state and produce its result.
    pub fn invoke(&self) -> Result<T, ScriptError> {
        T::from_value(evaluate(&self.program)?)
    }
}

/// Compile a token sequence into a script returning `T`.
///
/// All parsing and type checking happens here; invoking the returned
/// script cannot fail on anything the parser already validated.
pub fn compile<T: ScriptResult>(tokens: Vec<Token>) -> Result<CompiledScript<T>, ScriptError> {
    Ok(CompiledScript {
        program: parse_program(tokens, T::SCRIPT_TYPE)?,
        _result: PhantomData,
    })
}

//! Tree-walking evaluator.
//!
//! Evaluates a compiled program against a fresh slot vector. The
//! parser has already validated every operand type and resolved every
//! variable to a slot, so evaluation performs no type checks of its
//! own; a type mismatch at this stage is an internal error.

use core_types::{ErrorKind, ScriptError, Value};
use parser::{BinaryOp, Expr, Program, UnaryOp};

/// How a statement finished: fall through to the next statement, or
/// stop the whole invocation because `ergebnis` ran.
enum Completion {
    Continue,
    Return,
}

/// Run a compiled program and produce its result value.
///
/// Each call allocates fresh slot storage initialized to the per-type
/// default values, so invocations never observe each other's state.
/// A program that ends without reaching `ergebnis` yields the result
/// slot's default value.
pub fn evaluate(program: &Program) -> Result<Value, ScriptError> {
    let mut slots: Vec<Value> = program
        .slots
        .iter()
        .map(|slot| Value::default_for(slot.script_type))
        .collect();

    for statement in &program.body {
        if let Completion::Return = eval_statement(statement, &mut slots)? {
            break;
        }
    }

    Ok(slots[program.result_slot].clone())
}

fn eval_statement(expr: &Expr, slots: &mut [Value]) -> Result<Completion, ScriptError> {
    match expr {
        Expr::Assign { slot, value } => {
            let value = eval_value(value, slots)?;
            slots[*slot] = value;
            Ok(Completion::Continue)
        }
        Expr::Return { slot, value } => {
            let value = eval_value(value, slots)?;
            slots[*slot] = value;
            Ok(Completion::Return)
        }
        Expr::Conditional {
            condition,
            consequent,
            alternate,
        } => {
            if boolean_of(&eval_value(condition, slots)?)? {
                eval_statement(consequent, slots)
            } else if let Some(alternate) = alternate {
                eval_statement(alternate, slots)
            } else {
                Ok(Completion::Continue)
            }
        }
        Expr::Block(body) => {
            for statement in body {
                if let Completion::Return = eval_statement(statement, slots)? {
                    return Ok(Completion::Return);
                }
            }
            Ok(Completion::Continue)
        }
        _ => Err(ScriptError::new(
            ErrorKind::InternalError,
            "Value expression evaluated in statement position",
        )),
    }
}

fn eval_value(expr: &Expr, slots: &[Value]) -> Result<Value, ScriptError> {
    match expr {
        Expr::Constant(value) => Ok(value.clone()),
        Expr::Load(slot) => Ok(slots[*slot].clone()),
        Expr::Unary { op, operand } => {
            let value = eval_value(operand, slots)?;
            match op {
                UnaryOp::Negate => Ok(Value::Number(-number_of(&value)?)),
                UnaryOp::Not => Ok(Value::Boolean(!boolean_of(&value)?)),
            }
        }
        Expr::Binary { op, left, right } => eval_binary(*op, left, right, slots),
        _ => Err(ScriptError::new(
            ErrorKind::InternalError,
            "Statement evaluated in value position",
        )),
    }
}

fn eval_binary(
    op: BinaryOp,
    left: &Expr,
    right: &Expr,
    slots: &[Value],
) -> Result<Value, ScriptError> {
    // und / oder short-circuit: the right operand only runs when the
    // left one has not decided the outcome.
    match op {
        BinaryOp::And => {
            if !boolean_of(&eval_value(left, slots)?)? {
                return Ok(Value::Boolean(false));
            }
            return Ok(Value::Boolean(boolean_of(&eval_value(right, slots)?)?));
        }
        BinaryOp::Or => {
            if boolean_of(&eval_value(left, slots)?)? {
                return Ok(Value::Boolean(true));
            }
            return Ok(Value::Boolean(boolean_of(&eval_value(right, slots)?)?));
        }
        _ => {}
    }

    let left = eval_value(left, slots)?;
    let right = eval_value(right, slots)?;

    if op == BinaryOp::Equal {
        return Ok(Value::Boolean(left == right));
    }

    let left = number_of(&left)?;
    let right = number_of(&right)?;
    Ok(match op {
        BinaryOp::Add => Value::Number(left + right),
        BinaryOp::Subtract => Value::Number(left - right),
        BinaryOp::Multiply => Value::Number(left * right),
        BinaryOp::Divide => Value::Number(left / right),
        BinaryOp::Modulo => Value::Number(left % right),
        BinaryOp::Power => Value::Number(left.powf(right)),
        BinaryOp::Greater => Value::Boolean(left > right),
        BinaryOp::GreaterEqual => Value::Boolean(left >= right),
        BinaryOp::Less => Value::Boolean(left < right),
        BinaryOp::LessEqual => Value::Boolean(left <= right),
        BinaryOp::Equal | BinaryOp::And | BinaryOp::Or => unreachable!("handled above"),
    })
}

fn boolean_of(value: &Value) -> Result<bool, ScriptError> {
    value.as_boolean().ok_or_else(|| type_corruption("boolean", value))
}

fn number_of(value: &Value) -> Result<f64, ScriptError> {
    value.as_number().ok_or_else(|| type_corruption("number", value))
}

fn type_corruption(expected: &str, value: &Value) -> ScriptError {
    ScriptError::new(
        ErrorKind::InternalError,
        format!(
            "Expected a {} value during evaluation, found {}",
            expected,
            value.script_type()
        ),
    )
}

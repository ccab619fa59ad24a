//! Precedence-climbing expression parser.
//!
//! Each precedence level splits its fragment slice on its own operator
//! kind (top level only - bracketed regions are opaque composites),
//! recurses into the next-higher level for every part and folds the
//! results left to right, validating operand types at every fold step.
//! A level without an occurrence of its operator delegates straight to
//! the next level, which is what makes higher levels bind tighter.
//!
//! Levels, lowest to highest precedence: or, and, not (prefix),
//! equality, relational, additive, subtractive, multiplicative,
//! division, modulo, unary negate (prefix), exponentiation, primary.

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::{reference_error, syntax_error, type_error};
use crate::fragment::{Fragment, GroupKind, GroupToken};
use crate::parser::Parser;
use crate::segment::split_on_kinds;
use core_types::{ErrorKind, ScriptError, ScriptType, Value};
use lexer::TokenKind;
use std::slice;

/// A parsed sub-expression together with its inferred type.
pub(crate) type TypedExpr = (Expr, ScriptType);

type ParseLevel = fn(&mut Parser, &[Fragment]) -> Result<TypedExpr, ScriptError>;

impl Parser {
    /// Parse a complete expression (entry at the lowest level).
    pub(crate) fn parse_expression(
        &mut self,
        fragments: &[Fragment],
    ) -> Result<TypedExpr, ScriptError> {
        self.parse_or(fragments)
    }

    fn parse_or(&mut self, fragments: &[Fragment]) -> Result<TypedExpr, ScriptError> {
        self.parse_boolean_level(fragments, TokenKind::Or, BinaryOp::Or, Self::parse_and)
    }

    fn parse_and(&mut self, fragments: &[Fragment]) -> Result<TypedExpr, ScriptError> {
        self.parse_boolean_level(fragments, TokenKind::And, BinaryOp::And, Self::parse_not)
    }

    /// Logical not: a leading `nicht` recurses at this same level, so
    /// `nicht nicht wahr` nests.
    fn parse_not(&mut self, fragments: &[Fragment]) -> Result<TypedExpr, ScriptError> {
        match fragments.first() {
            Some(first) if first.is_kind(TokenKind::Not) => {
                let operand = &fragments[1..];
                if operand.is_empty() {
                    return Err(syntax_error("Invalid negation in logic expression", fragments));
                }
                let (expr, script_type) = self.parse_not(operand)?;
                if script_type != ScriptType::Boolean {
                    return Err(type_error(
                        "Expression is not a valid boolean expression",
                        fragments,
                    ));
                }
                Ok((
                    Expr::Unary {
                        op: UnaryOp::Not,
                        operand: Box::new(expr),
                    },
                    ScriptType::Boolean,
                ))
            }
            _ => self.parse_equality(fragments),
        }
    }

    /// Equality compares exactly two operands of any single type.
    fn parse_equality(&mut self, fragments: &[Fragment]) -> Result<TypedExpr, ScriptError> {
        let (parts, _) = split_on_kinds(fragments, &[TokenKind::Equals]);
        match parts.len() {
            1 => self.parse_relational(fragments),
            2 => {
                let (left, left_type) = self.parse_relational(parts[0])?;
                let (right, right_type) = self.parse_relational(parts[1])?;
                if left_type != right_type {
                    return Err(type_error(
                        format!(
                            "Type mismatch in equality expression: {} and {}",
                            left_type, right_type
                        ),
                        fragments,
                    ));
                }
                Ok((
                    Expr::Binary {
                        op: BinaryOp::Equal,
                        left: Box::new(left),
                        right: Box::new(right),
                    },
                    ScriptType::Boolean,
                ))
            }
            _ => Err(syntax_error("Invalid equality expression", fragments)),
        }
    }

    fn parse_relational(&mut self, fragments: &[Fragment]) -> Result<TypedExpr, ScriptError> {
        const KINDS: [TokenKind; 4] = [
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ];
        let (parts, operators) = split_on_kinds(fragments, &KINDS);
        if parts.len() < 2 {
            return self.parse_additive(fragments);
        }

        let (mut expr, mut script_type) = self.parse_additive(parts[0])?;
        for (index, part) in parts[1..].iter().enumerate() {
            if script_type != ScriptType::Number {
                return Err(type_error(
                    "Comparison operands have to be numeric expressions",
                    fragments,
                ));
            }
            let (right, right_type) = self.parse_additive(part)?;
            if right_type != ScriptType::Number {
                return Err(type_error(
                    "Comparison operands have to be numeric expressions",
                    fragments,
                ));
            }
            expr = Expr::Binary {
                op: relational_op(operators[index])?,
                left: Box::new(expr),
                right: Box::new(right),
            };
            script_type = ScriptType::Boolean;
        }
        Ok((expr, ScriptType::Boolean))
    }

    fn parse_additive(&mut self, fragments: &[Fragment]) -> Result<TypedExpr, ScriptError> {
        self.parse_numeric_level(
            fragments,
            TokenKind::Addition,
            BinaryOp::Add,
            Self::parse_subtractive,
        )
    }

    fn parse_subtractive(&mut self, fragments: &[Fragment]) -> Result<TypedExpr, ScriptError> {
        self.parse_numeric_level(
            fragments,
            TokenKind::Subtraction,
            BinaryOp::Subtract,
            Self::parse_multiplicative,
        )
    }

    fn parse_multiplicative(&mut self, fragments: &[Fragment]) -> Result<TypedExpr, ScriptError> {
        self.parse_numeric_level(
            fragments,
            TokenKind::Multiplication,
            BinaryOp::Multiply,
            Self::parse_division,
        )
    }

    fn parse_division(&mut self, fragments: &[Fragment]) -> Result<TypedExpr, ScriptError> {
        self.parse_numeric_level(
            fragments,
            TokenKind::Division,
            BinaryOp::Divide,
            Self::parse_modulo,
        )
    }

    fn parse_modulo(&mut self, fragments: &[Fragment]) -> Result<TypedExpr, ScriptError> {
        self.parse_numeric_level(
            fragments,
            TokenKind::Modulo,
            BinaryOp::Modulo,
            Self::parse_negative,
        )
    }

    /// Unary negate: a leading `-` recurses at this same level, so
    /// `- - -2` nests. Binding below exponentiation makes `-2^2`
    /// negate the combined chain: `-(2^2)`.
    fn parse_negative(&mut self, fragments: &[Fragment]) -> Result<TypedExpr, ScriptError> {
        match fragments.first() {
            Some(first) if first.is_kind(TokenKind::Negative) => {
                let operand = &fragments[1..];
                if operand.is_empty() {
                    return Err(syntax_error("Invalid negative numeric expression", fragments));
                }
                let (expr, script_type) = self.parse_negative(operand)?;
                if script_type != ScriptType::Number {
                    return Err(type_error(
                        "Invalid negation: negated expression is not a valid numerical expression",
                        fragments,
                    ));
                }
                Ok((
                    Expr::Unary {
                        op: UnaryOp::Negate,
                        operand: Box::new(expr),
                    },
                    ScriptType::Number,
                ))
            }
            _ => self.parse_exponent(fragments),
        }
    }

    fn parse_exponent(&mut self, fragments: &[Fragment]) -> Result<TypedExpr, ScriptError> {
        self.parse_numeric_level(
            fragments,
            TokenKind::Exponentiation,
            BinaryOp::Power,
            Self::parse_primary,
        )
    }

    /// Primary: a single literal, variable or already-collapsed
    /// bracketed sub-expression.
    fn parse_primary(&mut self, fragments: &[Fragment]) -> Result<TypedExpr, ScriptError> {
        match fragments {
            [fragment] => self.parse_value(fragment),
            _ => Err(syntax_error("Invalid value expression", fragments)),
        }
    }

    fn parse_value(&mut self, fragment: &Fragment) -> Result<TypedExpr, ScriptError> {
        match fragment {
            Fragment::Token(token) => match token.kind {
                TokenKind::True => Ok((Expr::Constant(Value::Boolean(true)), ScriptType::Boolean)),
                TokenKind::False => {
                    Ok((Expr::Constant(Value::Boolean(false)), ScriptType::Boolean))
                }
                TokenKind::Number => {
                    // Comma decimals: `2,5` is 2.5.
                    let number: f64 = token.text.replace(',', ".").parse().map_err(|_| {
                        syntax_error(
                            format!("Invalid number literal '{}'", token.text),
                            slice::from_ref(fragment),
                        )
                    })?;
                    Ok((Expr::Constant(Value::Number(number)), ScriptType::Number))
                }
                TokenKind::Text => Ok((
                    Expr::Constant(Value::Text(token.text.clone())),
                    ScriptType::Text,
                )),
                TokenKind::VariableName => {
                    let slot = self.context.lookup(&token.text).ok_or_else(|| {
                        reference_error("Variable has not been declared", slice::from_ref(fragment))
                    })?;
                    Ok((Expr::Load(slot), self.slot_type(slot)))
                }
                _ => Err(syntax_error(
                    format!("The token '{}' is not a valid value expression", token.text),
                    slice::from_ref(fragment),
                )),
            },
            Fragment::Group(group) => match group.kind {
                GroupKind::Bracketed => self.resolve_bracketed(group),
                GroupKind::Block => Err(syntax_error(
                    "A block is not a valid value expression",
                    slice::from_ref(fragment),
                )),
            },
        }
    }

    /// Resolve a bracketed group, reusing the memoized sub-expression
    /// and inferred type when the group was parsed before.
    fn resolve_bracketed(&mut self, group: &GroupToken) -> Result<TypedExpr, ScriptError> {
        if let Some((expr, script_type)) = group.resolved() {
            let script_type = (*script_type).ok_or_else(|| {
                ScriptError::new(
                    ErrorKind::InternalError,
                    "Bracketed group resolved without an inferred type",
                )
            })?;
            return Ok((expr.clone(), script_type));
        }

        let (expr, script_type) = self.parse_expression(&group.children)?;
        group.memoize(expr.clone(), Some(script_type));
        Ok((expr, script_type))
    }

    /// Split on a boolean operator and fold left to right, requiring
    /// boolean operands on both sides of every fold.
    fn parse_boolean_level(
        &mut self,
        fragments: &[Fragment],
        kind: TokenKind,
        op: BinaryOp,
        next: ParseLevel,
    ) -> Result<TypedExpr, ScriptError> {
        let (parts, _) = split_on_kinds(fragments, &[kind]);
        if parts.len() < 2 {
            return next(self, fragments);
        }

        let (mut expr, first_type) = next(self, parts[0])?;
        if first_type != ScriptType::Boolean {
            return Err(type_error(
                "Expression is not a valid boolean expression",
                parts[0],
            ));
        }
        for part in &parts[1..] {
            let (right, right_type) = next(self, part)?;
            if right_type != ScriptType::Boolean {
                return Err(type_error(
                    "Expression is not a valid boolean expression",
                    part,
                ));
            }
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }
        Ok((expr, ScriptType::Boolean))
    }

    /// Split on an arithmetic operator and fold left to right,
    /// requiring number operands on both sides of every fold.
    fn parse_numeric_level(
        &mut self,
        fragments: &[Fragment],
        kind: TokenKind,
        op: BinaryOp,
        next: ParseLevel,
    ) -> Result<TypedExpr, ScriptError> {
        let (parts, _) = split_on_kinds(fragments, &[kind]);
        if parts.len() < 2 {
            return next(self, fragments);
        }

        let (mut expr, first_type) = next(self, parts[0])?;
        if first_type != ScriptType::Number {
            return Err(type_error(
                "Expression is not a valid numerical expression",
                parts[0],
            ));
        }
        for part in &parts[1..] {
            let (right, right_type) = next(self, part)?;
            if right_type != ScriptType::Number {
                return Err(type_error(
                    "Expression is not a valid numerical expression",
                    part,
                ));
            }
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }
        Ok((expr, ScriptType::Number))
    }
}

fn relational_op(kind: TokenKind) -> Result<BinaryOp, ScriptError> {
    match kind {
        TokenKind::Greater => Ok(BinaryOp::Greater),
        TokenKind::GreaterEqual => Ok(BinaryOp::GreaterEqual),
        TokenKind::Less => Ok(BinaryOp::Less),
        TokenKind::LessEqual => Ok(BinaryOp::LessEqual),
        _ => Err(ScriptError::new(
            ErrorKind::InternalError,
            format!("Token kind {:?} is not a comparison operator", kind),
        )),
    }
}

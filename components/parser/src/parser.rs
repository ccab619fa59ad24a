//! Parser entry point.
//!
//! Parsing, type checking and compilation happen in a single pass:
//! the token stream is segmented, every statement is parsed into the
//! expression tree with its inferred type validated on the way, and
//! the result is a [`Program`] ready for evaluation.

use crate::ast::{Program, SlotId, SlotInfo};
use crate::context::{ParsingContext, ReturnTarget};
use crate::segment::{group_tokens, merge_conditionals, statement_ranges};
use core_types::{ScriptError, ScriptType};
use lexer::{Token, TokenKind};

/// The result slot is always the first slot of a program.
pub(crate) const RESULT_SLOT: SlotId = 0;

/// Single-pass parser, type checker and compiler.
///
/// One parser instance exists per compiled program; it owns the
/// context tree and the slot table and is consumed by [`Parser::parse`].
pub struct Parser {
    pub(crate) context: ParsingContext,
    pub(crate) slots: Vec<SlotInfo>,
    result_type: ScriptType,
}

impl Parser {
    /// Create a parser for a program returning the given type.
    ///
    /// Declares the result slot and the shared return target on the
    /// root scope.
    pub fn new(result_type: ScriptType) -> Self {
        Self {
            context: ParsingContext::new(ReturnTarget {
                result_slot: RESULT_SLOT,
                result_type,
            }),
            slots: vec![SlotInfo {
                name: None,
                script_type: result_type,
            }],
            result_type,
        }
    }

    /// Allocate a storage slot.
    pub(crate) fn add_slot(&mut self, name: Option<String>, script_type: ScriptType) -> SlotId {
        self.slots.push(SlotInfo { name, script_type });
        self.slots.len() - 1
    }

    /// The declared type of a slot.
    pub(crate) fn slot_type(&self, slot: SlotId) -> ScriptType {
        self.slots[slot].script_type
    }

    /// Parse a full token sequence into a compiled program.
    pub fn parse(mut self, tokens: Vec<Token>) -> Result<Program, ScriptError> {
        let fragments = group_tokens(tokens)?;
        let ranges = statement_ranges(&fragments, TokenKind::EndOfStatement);
        let ranges = merge_conditionals(&fragments, ranges)?;

        let mut body = Vec::with_capacity(ranges.len());
        for range in ranges {
            body.push(self.parse_statement(&fragments[range])?);
        }

        Ok(Program {
            body,
            slots: self.slots,
            result_slot: RESULT_SLOT,
            result_type: self.result_type,
        })
    }
}

/// Parse a token sequence into a program returning `result_type`.
///
/// Convenience wrapper creating a fresh [`Parser`]; no state survives
/// across calls.
pub fn parse_program(tokens: Vec<Token>, result_type: ScriptType) -> Result<Program, ScriptError> {
    Parser::new(result_type).parse(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;
    use lexer::tokenize;

    fn parse(source: &str, result_type: ScriptType) -> Result<Program, ScriptError> {
        parse_program(tokenize(source).unwrap(), result_type)
    }

    #[test]
    fn test_program_carries_result_slot_and_type() {
        let program = parse("ergebnis 1.", ScriptType::Number).unwrap();
        assert_eq!(program.result_slot, RESULT_SLOT);
        assert_eq!(program.result_type, ScriptType::Number);
        assert_eq!(program.body.len(), 1);
    }

    #[test]
    fn test_assignment_declares_slot() {
        let program = parse("A ist 3. ergebnis A.", ScriptType::Number).unwrap();
        assert_eq!(program.slots.len(), 2);
        assert_eq!(program.slots[1].name.as_deref(), Some("A"));
        assert!(matches!(program.body[0], Expr::Assign { slot: 1, .. }));
    }

    #[test]
    fn test_empty_token_sequence_is_empty_program() {
        let program = parse("", ScriptType::Number).unwrap();
        assert!(program.body.is_empty());
    }

    #[test]
    fn test_parse_is_all_or_nothing() {
        assert!(parse("A ist 1. ergebnis B.", ScriptType::Number).is_err());
    }
}

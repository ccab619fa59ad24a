//! Statement parsing.
//!
//! A statement group is either a conditional chain (led by `wenn`) or
//! a terminated simple statement: an assignment (`A ist ...`) or a
//! return (`ergebnis ...`). Bare expressions are not statements.

use crate::ast::Expr;
use crate::error::{syntax_error, type_error};
use crate::fragment::{Fragment, GroupKind, GroupToken};
use crate::parser::Parser;
use crate::segment::{merge_conditionals, statement_ranges};
use core_types::{ErrorKind, ScriptError, ScriptType};
use lexer::{TokenCategory, TokenKind};

impl Parser {
    /// Parse one statement group into a statement expression.
    pub(crate) fn parse_statement(&mut self, fragments: &[Fragment]) -> Result<Expr, ScriptError> {
        if fragments.first().is_some_and(|f| f.is_kind(TokenKind::If)) {
            return self.parse_conditional(fragments);
        }

        let body = match fragments.split_last() {
            Some((last, body)) if last.is_kind(TokenKind::EndOfStatement) => body,
            _ => return Err(syntax_error("Invalid expression end", fragments)),
        };

        match body.first().and_then(|f| f.token_kind()) {
            Some(TokenKind::Return) => self.parse_return(body),
            _ if body.iter().any(|f| f.is_kind(TokenKind::Assignment)) => {
                self.parse_assignment(body)
            }
            Some(TokenKind::VariableName) => Err(syntax_error(
                "Only variable expressions from type Assignment can be used as statements",
                body,
            )),
            _ => Err(syntax_error(
                "Only assignment, return and conditional operations can be used as statements",
                body,
            )),
        }
    }

    /// Parse `<name> ist <expression>` (terminator already stripped).
    ///
    /// A first assignment declares the variable in the current scope
    /// with the expression's inferred type; a reassignment reuses the
    /// existing slot and must keep the type.
    fn parse_assignment(&mut self, body: &[Fragment]) -> Result<Expr, ScriptError> {
        let assignments = body
            .iter()
            .filter(|f| f.is_kind(TokenKind::Assignment))
            .count();
        if assignments > 1 {
            return Err(syntax_error(
                "Only one assignment per expression is allowed",
                body,
            ));
        }
        if body.len() < 3 {
            return Err(syntax_error(
                "A variable expression requires at least 3 tokens",
                body,
            ));
        }

        let name = match &body[0] {
            Fragment::Token(token) if token.kind == TokenKind::VariableName => token.text.clone(),
            _ => {
                return Err(syntax_error(
                    "First token of a variable expression has to be a variable name",
                    body,
                ))
            }
        };
        if !body[1].is_kind(TokenKind::Assignment) {
            return Err(syntax_error(
                "Second token of a variable expression has to be an assignment",
                body,
            ));
        }

        let (expr, script_type) = self.parse_expression(&body[2..])?;
        let slot = match self.context.lookup(&name) {
            Some(slot) => {
                if self.slot_type(slot) != script_type {
                    return Err(type_error(
                        format!(
                            "Type mismatch in assignment: variable '{}' is {} but the expression is {}",
                            name,
                            self.slot_type(slot),
                            script_type
                        ),
                        body,
                    ));
                }
                slot
            }
            None => {
                let slot = self.add_slot(Some(name.clone()), script_type);
                self.context.declare(&name, slot)?;
                slot
            }
        };

        Ok(Expr::Assign {
            slot,
            value: Box::new(expr),
        })
    }

    /// Parse `ergebnis <expression>` (terminator already stripped).
    fn parse_return(&mut self, body: &[Fragment]) -> Result<Expr, ScriptError> {
        let value = &body[1..];
        if value.is_empty() {
            return Err(syntax_error(
                "Return operation is invalid: missing a return expression",
                body,
            ));
        }

        let (expr, script_type) = self.parse_expression(value)?;
        let target = self.context.return_target().ok_or_else(|| {
            ScriptError::new(
                ErrorKind::ReferenceError,
                "Return operation outside a program with a result slot",
            )
        })?;
        if script_type != target.result_type {
            return Err(type_error(
                format!(
                    "Return expression type {} does not match the declared result type {}",
                    script_type, target.result_type
                ),
                body,
            ));
        }

        Ok(Expr::Return {
            slot: target.result_slot,
            value: Box::new(expr),
        })
    }

    /// Parse a whole conditional chain statement group.
    ///
    /// Block-bodied chains carry one trailing terminator after the
    /// last body; inline bodies end with their own terminator, so the
    /// chain's last terminator is already consumed by the last clause.
    fn parse_conditional(&mut self, fragments: &[Fragment]) -> Result<Expr, ScriptError> {
        let (expr, cursor) = self.parse_conditional_clause(fragments, 0)?;
        let terminated =
            cursor > 0 && fragments[cursor - 1].is_kind(TokenKind::EndOfStatement);
        let cursor = if terminated {
            cursor
        } else {
            // A chain ending in a block body still needs its own
            // terminator.
            match fragments.get(cursor) {
                Some(f) if f.is_kind(TokenKind::EndOfStatement) => cursor + 1,
                _ => return Err(syntax_error("Invalid expression end", fragments)),
            }
        };
        if cursor != fragments.len() {
            return Err(syntax_error("Invalid expression end", &fragments[cursor..]));
        }
        Ok(expr)
    }

    /// Parse one `wenn`/`sonst wenn` clause starting at `cursor`, then
    /// recurse for the rest of the chain. Returns the clause tree and
    /// the cursor past the consumed fragments.
    fn parse_conditional_clause(
        &mut self,
        fragments: &[Fragment],
        cursor: usize,
    ) -> Result<(Expr, usize), ScriptError> {
        // Skip the leading wenn / sonst wenn keyword.
        let cursor = cursor + 1;
        let do_index = fragments[cursor..]
            .iter()
            .position(|f| f.is_kind(TokenKind::Do))
            .map(|offset| cursor + offset)
            .ok_or_else(|| {
                syntax_error(
                    "Conditional operation is missing the mache keyword",
                    fragments,
                )
            })?;

        let condition_fragments = &fragments[cursor..do_index];
        if condition_fragments.iter().any(|f| {
            f.is_kind(TokenKind::Assignment) || f.category() == Some(TokenCategory::ControlFlow)
        }) {
            return Err(syntax_error(
                "Condition may not contain assignment or control flow operations",
                condition_fragments,
            ));
        }
        let (condition, condition_type) = self.parse_expression(condition_fragments)?;
        if condition_type != ScriptType::Boolean {
            return Err(type_error(
                "Condition is not a valid boolean expression",
                condition_fragments,
            ));
        }

        let (consequent, cursor) = self.parse_branch_body(fragments, do_index + 1)?;

        let (alternate, cursor) = match fragments.get(cursor).and_then(|f| f.token_kind()) {
            Some(TokenKind::ElseIf) => {
                let (chain, cursor) = self.parse_conditional_clause(fragments, cursor)?;
                (Some(Box::new(chain)), cursor)
            }
            Some(TokenKind::Else) => {
                let (body, cursor) = self.parse_branch_body(fragments, cursor + 1)?;
                (Some(Box::new(body)), cursor)
            }
            _ => (None, cursor),
        };

        Ok((
            Expr::Conditional {
                condition: Box::new(condition),
                consequent: Box::new(consequent),
                alternate,
            },
            cursor,
        ))
    }

    /// Parse a branch body at `cursor`: either a block group (with its
    /// own scope) or one inline statement running through its
    /// terminator (sharing the enclosing scope).
    fn parse_branch_body(
        &mut self,
        fragments: &[Fragment],
        cursor: usize,
    ) -> Result<(Expr, usize), ScriptError> {
        match fragments.get(cursor) {
            Some(Fragment::Group(group)) if group.kind == GroupKind::Block => {
                let expr = self.parse_block(group)?;
                Ok((expr, cursor + 1))
            }
            Some(_) => {
                let end = fragments[cursor..]
                    .iter()
                    .position(|f| f.is_kind(TokenKind::EndOfStatement))
                    .map(|offset| cursor + offset)
                    .ok_or_else(|| {
                        syntax_error("Invalid expression end", &fragments[cursor..])
                    })?;
                let expr = self.parse_statement(&fragments[cursor..=end])?;
                Ok((expr, end + 1))
            }
            None => Err(syntax_error(
                "Conditional operation is missing its body",
                fragments,
            )),
        }
    }

    /// Parse a block group's children as a statement sequence inside a
    /// child scope.
    fn parse_block(&mut self, group: &GroupToken) -> Result<Expr, ScriptError> {
        if let Some((expr, _)) = group.resolved() {
            return Ok(expr.clone());
        }

        self.context.enter_scope();
        let result = self.parse_block_statements(&group.children);
        self.context.exit_scope();

        let expr = result?;
        group.memoize(expr.clone(), None);
        Ok(expr)
    }

    fn parse_block_statements(&mut self, children: &[Fragment]) -> Result<Expr, ScriptError> {
        let ranges = statement_ranges(children, TokenKind::EndOfStatement);
        let ranges = merge_conditionals(children, ranges)?;

        let mut body = Vec::with_capacity(ranges.len());
        for range in ranges {
            body.push(self.parse_statement(&children[range])?);
        }
        Ok(Expr::Block(body))
    }
}

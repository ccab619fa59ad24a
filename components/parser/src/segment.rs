//! Token stream segmentation.
//!
//! Three passes over the flat token sequence before statement parsing
//! starts: collapsing bracket and block pairs into composite
//! fragments, splitting on the statement terminator, and merging
//! `wenn` statement groups with their trailing `sonst wenn`/`sonst`
//! groups so that a whole conditional chain is parsed as one
//! statement.

use crate::error::syntax_error;
use crate::fragment::{Fragment, GroupKind, GroupToken};
use core_types::ScriptError;
use lexer::{Token, TokenKind};
use std::ops::Range;

/// Collapse `( ... )` pairs into bracketed groups and `{ ... }` pairs
/// into block groups, innermost first.
///
/// Nesting is stack-based: every opener pushes a fresh child list,
/// every closer pops it, wraps it into a composite and appends the
/// composite to the new top of the stack (or to the top level once the
/// stack is empty). Open and close counts must match exactly.
pub fn group_tokens(tokens: Vec<Token>) -> Result<Vec<Fragment>, ScriptError> {
    let mut top_level: Vec<Fragment> = Vec::new();
    let mut stack: Vec<(GroupKind, Vec<Fragment>)> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::LeftBracket => stack.push((GroupKind::Bracketed, Vec::new())),
            TokenKind::BeginBlock => stack.push((GroupKind::Block, Vec::new())),
            TokenKind::RightBracket | TokenKind::EndBlock => {
                let expected = if token.kind == TokenKind::RightBracket {
                    GroupKind::Bracketed
                } else {
                    GroupKind::Block
                };
                let group = match stack.pop() {
                    Some((kind, children)) if kind == expected => GroupToken::new(kind, children),
                    _ => return Err(mismatch_error(expected, &top_level)),
                };
                match stack.last_mut() {
                    Some((_, children)) => children.push(Fragment::Group(group)),
                    None => top_level.push(Fragment::Group(group)),
                }
            }
            _ => {
                let fragment = Fragment::Token(token);
                match stack.last_mut() {
                    Some((_, children)) => children.push(fragment),
                    None => top_level.push(fragment),
                }
            }
        }
    }

    if let Some((kind, _)) = stack.last() {
        return Err(mismatch_error(*kind, &top_level));
    }

    Ok(top_level)
}

fn mismatch_error(kind: GroupKind, fragments: &[Fragment]) -> ScriptError {
    let message = match kind {
        GroupKind::Bracketed => "Bracket count mismatch detected in expression",
        GroupKind::Block => "Block count mismatch detected in expression",
    };
    syntax_error(message, fragments)
}

/// Split a fragment sequence into statement groups on the given
/// splitter kind, keeping the splitter as the last fragment of each
/// group.
///
/// Fragments after the last splitter form a final, unterminated group;
/// statement parsing rejects it.
pub fn statement_ranges(fragments: &[Fragment], splitter: TokenKind) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;

    for (index, fragment) in fragments.iter().enumerate() {
        if fragment.is_kind(splitter) {
            ranges.push(start..index + 1);
            start = index + 1;
        }
    }

    if start < fragments.len() {
        ranges.push(start..fragments.len());
    }

    ranges
}

/// Merge conditional chains that span statement boundaries.
///
/// A group whose first fragment is `wenn` absorbs every immediately
/// following group that starts with `sonst wenn` or `sonst`, but only
/// while the chain is still open: a top-level `sonst` closes it, so a
/// further `sonst wenn`/`sonst` group - or one with no chain to attach
/// to at all - is a structural error. Chains whose bodies are all
/// block-delimited are already a single group and pass through
/// unchanged.
pub fn merge_conditionals(
    fragments: &[Fragment],
    ranges: Vec<Range<usize>>,
) -> Result<Vec<Range<usize>>, ScriptError> {
    let mut merged: Vec<Range<usize>> = Vec::new();
    let mut chain_open = false;

    for range in ranges {
        let group = &fragments[range.clone()];
        let leading = group.first().and_then(|f| f.token_kind());
        // Else inside a block group is invisible here; only a
        // top-level sonst ends the chain.
        let has_final_else = group.iter().any(|f| f.is_kind(TokenKind::Else));

        match leading {
            Some(TokenKind::If) => {
                chain_open = !has_final_else;
                merged.push(range);
            }
            Some(TokenKind::ElseIf) | Some(TokenKind::Else) => {
                let absorber = if chain_open { merged.last_mut() } else { None };
                match absorber {
                    // Adjacent statement groups are contiguous, so the
                    // chain stays one contiguous range.
                    Some(previous) => {
                        previous.end = range.end;
                        chain_open = !has_final_else;
                    }
                    None => {
                        return Err(syntax_error(
                            "Conditional operation without a preceding wenn statement",
                            group,
                        ))
                    }
                }
            }
            _ => {
                chain_open = false;
                merged.push(range);
            }
        }
    }

    Ok(merged)
}

/// Split a fragment slice on top-level occurrences of the given
/// operator kinds.
///
/// Groups are opaque single fragments, so splitting never crosses a
/// bracket or block boundary. Returns the parts between operators and
/// the operator kind at each boundary; with no occurrence the input is
/// returned as a single part.
pub fn split_on_kinds<'a>(
    fragments: &'a [Fragment],
    kinds: &[TokenKind],
) -> (Vec<&'a [Fragment]>, Vec<TokenKind>) {
    let mut parts = Vec::new();
    let mut operators = Vec::new();
    let mut start = 0;

    for (index, fragment) in fragments.iter().enumerate() {
        if let Some(kind) = fragment.token_kind() {
            if kinds.contains(&kind) {
                parts.push(&fragments[start..index]);
                operators.push(kind);
                start = index + 1;
            }
        }
    }

    parts.push(&fragments[start..]);
    (parts, operators)
}

//! Parser-side tokens: leaves and collapsed composites.
//!
//! The segmenter turns the flat token sequence into a fragment
//! sequence in which every bracketed or braced region has been
//! collapsed into a single composite. Composites keep their raw child
//! fragments immutably and memoize their resolved sub-expression the
//! first time a parser level reaches them; the memo is written exactly
//! once and never mutated again.

use crate::ast::Expr;
use core_types::ScriptType;
use lexer::{Token, TokenCategory, TokenKind};
use std::cell::OnceCell;
use std::fmt;

/// Which delimiter pair a composite was collapsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// `( ... )` - an opaque sub-expression
    Bracketed,
    /// `{ ... }` - a braced sub-program
    Block,
}

/// A composite token owning the child fragments of a collapsed region.
#[derive(Debug)]
pub struct GroupToken {
    /// Delimiter pair this group was collapsed from
    pub kind: GroupKind,
    /// Raw child fragments, owned exclusively by this group
    pub children: Vec<Fragment>,
    /// Resolved sub-expression and inferred type; `None` until the
    /// group is first parsed. Block groups carry no inferred type.
    resolved: OnceCell<(Expr, Option<ScriptType>)>,
}

impl GroupToken {
    /// Create an unresolved group over the given children.
    pub fn new(kind: GroupKind, children: Vec<Fragment>) -> Self {
        Self {
            kind,
            children,
            resolved: OnceCell::new(),
        }
    }

    /// The memoized resolution, if this group has been parsed already.
    pub fn resolved(&self) -> Option<&(Expr, Option<ScriptType>)> {
        self.resolved.get()
    }

    /// Record the resolution. The first write wins; the segmented
    /// child sequence itself stays untouched.
    pub(crate) fn memoize(&self, expr: Expr, script_type: Option<ScriptType>) {
        let _ = self.resolved.set((expr, script_type));
    }
}

/// A parser-side token: either a tokenizer leaf or a collapsed group.
#[derive(Debug)]
pub enum Fragment {
    /// Leaf token straight from the tokenizer
    Token(Token),
    /// Collapsed bracketed or braced region
    Group(GroupToken),
}

impl Fragment {
    /// The detail kind, for leaf fragments.
    pub fn token_kind(&self) -> Option<TokenKind> {
        match self {
            Fragment::Token(token) => Some(token.kind),
            Fragment::Group(_) => None,
        }
    }

    /// The coarse category, for leaf fragments.
    pub fn category(&self) -> Option<TokenCategory> {
        match self {
            Fragment::Token(token) => Some(token.category),
            Fragment::Group(_) => None,
        }
    }

    /// Whether this is a leaf of the given kind.
    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.token_kind() == Some(kind)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Token(token) => write!(f, "{}", token),
            Fragment::Group(group) => {
                let (open, close) = match group.kind {
                    GroupKind::Bracketed => ("(", ")"),
                    GroupKind::Block => ("{", "}"),
                };
                write!(f, "{} {} {}", open, render(&group.children), close)
            }
        }
    }
}

/// Render a fragment sequence back to source text for diagnostics.
pub fn render(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

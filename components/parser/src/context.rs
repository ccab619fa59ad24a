//! Scoped symbol table used while parsing.
//!
//! A parsing context is a tree of scopes: each scope owns the
//! variable bindings declared in it and chains to its parent for
//! lookup. The root scope additionally records the program's return
//! target (result slot and declared result type). Contexts exist only
//! at parse time; the compiled tree references resolved slots
//! directly.

use crate::ast::SlotId;
use core_types::{ErrorKind, ScriptError, ScriptType};
use std::collections::HashMap;

/// The shared jump destination a `ergebnis` statement transfers
/// control to, together with the slot the returned value lands in.
#[derive(Debug, Clone, Copy)]
pub struct ReturnTarget {
    /// Slot holding the program's eventual return value
    pub result_slot: SlotId,
    /// Declared result type; return expressions must match it
    pub result_type: ScriptType,
}

#[derive(Debug)]
struct Scope {
    parent: Option<usize>,
    variables: HashMap<String, SlotId>,
    return_target: Option<ReturnTarget>,
}

/// A chained, scoped symbol table mapping variable names to typed
/// storage slots.
///
/// One context tree exists per compiled program; block and branch
/// bodies parse inside child scopes that are discarded wholesale when
/// the block finishes parsing.
#[derive(Debug)]
pub struct ParsingContext {
    scopes: Vec<Scope>,
    current: usize,
}

impl ParsingContext {
    /// Create a root context with the given return target.
    pub fn new(return_target: ReturnTarget) -> Self {
        Self {
            scopes: vec![Scope {
                parent: None,
                variables: HashMap::new(),
                return_target: Some(return_target),
            }],
            current: 0,
        }
    }

    /// Bind a new name in the current scope only.
    ///
    /// Rebinding a name that already exists in the same scope is an
    /// internal error; assignment reuses the existing slot instead of
    /// re-declaring, so this is unreachable from script input.
    pub fn declare(&mut self, name: &str, slot: SlotId) -> Result<(), ScriptError> {
        let scope = &mut self.scopes[self.current];
        if scope.variables.contains_key(name) {
            return Err(ScriptError::new(
                ErrorKind::InternalError,
                format!("Variable '{}' is already declared in this scope", name),
            ));
        }
        scope.variables.insert(name.to_string(), slot);
        Ok(())
    }

    /// Look up a name in the current scope, then in its ancestors.
    pub fn lookup(&self, name: &str) -> Option<SlotId> {
        let mut index = Some(self.current);
        while let Some(scope_index) = index {
            let scope = &self.scopes[scope_index];
            if let Some(slot) = scope.variables.get(name) {
                return Some(*slot);
            }
            index = scope.parent;
        }
        None
    }

    /// Open a child scope of the current scope and make it current.
    pub fn enter_scope(&mut self) {
        let scope = Scope {
            parent: Some(self.current),
            variables: HashMap::new(),
            return_target: None,
        };
        self.scopes.push(scope);
        self.current = self.scopes.len() - 1;
    }

    /// Discard the current scope and make its parent current.
    ///
    /// Slots declared in the discarded scope stay referenced by the
    /// compiled tree; they are just no longer reachable by name.
    pub fn exit_scope(&mut self) {
        if let Some(parent) = self.scopes[self.current].parent {
            self.current = parent;
        }
    }

    /// Resolve the return target from the nearest ancestor (including
    /// the current scope) that defines one.
    pub fn return_target(&self) -> Option<ReturnTarget> {
        let mut index = Some(self.current);
        while let Some(scope_index) = index {
            let scope = &self.scopes[scope_index];
            if let Some(target) = scope.return_target {
                return Some(target);
            }
            index = scope.parent;
        }
        None
    }
}

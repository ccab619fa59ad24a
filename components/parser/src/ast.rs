//! Compiled expression tree.
//!
//! The parser type-checks while it parses, so every node in this tree
//! is already validated: operand types were checked before the node
//! was built and variable references were resolved to storage slots.
//! Scopes and names are gone by the time a [`Program`] exists.

use core_types::{ScriptType, Value};

/// Index of a typed storage slot within a compiled program.
pub type SlotId = usize;

/// A typed, named storage location for a variable's value.
///
/// The result slot has no name; it is only reachable through
/// `ergebnis`.
#[derive(Debug, Clone)]
pub struct SlotInfo {
    /// Variable name, or `None` for the result slot
    pub name: Option<String>,
    /// Declared type; fixed for the lifetime of the program
    pub script_type: ScriptType,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `^`
    Power,
    /// `=`
    Equal,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `und` (short-circuit)
    And,
    /// `oder` (short-circuit)
    Or,
}

/// Unary prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Unary `-`
    Negate,
    /// `nicht`
    Not,
}

/// A node of the compiled, evaluatable expression tree.
#[derive(Debug, Clone)]
pub enum Expr {
    /// Literal constant
    Constant(Value),
    /// Read a storage slot
    Load(SlotId),
    /// Evaluate `value` and store it into `slot`
    Assign {
        /// Target slot
        slot: SlotId,
        /// Right-hand side
        value: Box<Expr>,
    },
    /// Type-checked binary operation
    Binary {
        /// Operator
        op: BinaryOp,
        /// Left operand
        left: Box<Expr>,
        /// Right operand
        right: Box<Expr>,
    },
    /// Type-checked unary prefix operation
    Unary {
        /// Operator
        op: UnaryOp,
        /// Operand
        operand: Box<Expr>,
    },
    /// `wenn`/`sonst wenn`/`sonst` construct; chains are right-folded
    /// into nested conditionals at parse time
    Conditional {
        /// Boolean guard
        condition: Box<Expr>,
        /// Branch taken when the guard is true
        consequent: Box<Expr>,
        /// Branch taken otherwise; `None` falls through
        alternate: Option<Box<Expr>>,
    },
    /// Sequential statement list of a `{ ... }` block body
    Block(Vec<Expr>),
    /// `ergebnis`: store `value` into the result slot and jump to the
    /// shared return target, ending execution
    Return {
        /// The program's result slot
        slot: SlotId,
        /// Returned expression
        value: Box<Expr>,
    },
}

/// A compiled program: the root statement list plus its slot table,
/// declared result slot and result type.
///
/// The tree is immutable after compilation; each invocation evaluates
/// it against fresh slot storage.
#[derive(Debug, Clone)]
pub struct Program {
    /// Top-level statements, executed in order
    pub body: Vec<Expr>,
    /// All storage slots referenced by the tree
    pub slots: Vec<SlotInfo>,
    /// Slot holding the eventual return value
    pub result_slot: SlotId,
    /// Declared result type
    pub result_type: ScriptType,
}

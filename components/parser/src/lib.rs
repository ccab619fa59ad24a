//! Script parser.
//!
//! Turns a token sequence into a compiled [`Program`] in a single
//! pass: bracket and block pairs are collapsed into composite
//! fragments, the stream is split into statement groups, and every
//! statement is parsed by precedence-climbing with operand and
//! statement types inferred and validated as the tree is built.
//!
//! The compiled tree is fully resolved: variable names have become
//! slot indices and no type checks remain for evaluation time.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod ast;
pub mod context;
mod error;
mod expression;
pub mod fragment;
pub mod parser;
pub mod segment;
mod statement;

pub use ast::{BinaryOp, Expr, Program, SlotId, SlotInfo, UnaryOp};
pub use parser::{parse_program, Parser};

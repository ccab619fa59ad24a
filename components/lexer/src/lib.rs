//! Tokenizer for the German-keyword script language.
//!
//! Converts raw source text into an ordered sequence of typed tokens.
//! Tokenization is table-driven: an ordered list of anchored regular
//! expressions is matched against the front of the remaining input,
//! whitespace is skipped, and a unary minus is told apart from binary
//! subtraction by looking at the previously produced token.
//!
//! # Example
//!
//! ```
//! use lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("A ist 3.").unwrap();
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[1].kind, TokenKind::Assignment);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod lexer;
mod token;

pub use lexer::tokenize;
pub use token::{Token, TokenCategory, TokenKind};

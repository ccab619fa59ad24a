//! Token types produced by the tokenizer.

use std::fmt;

/// Coarse token classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    /// Arithmetic operators
    Math,
    /// Logical and comparison operators
    Logic,
    /// Control flow keywords
    ControlFlow,
    /// Literal values
    Value,
    /// Structural tokens (terminators, brackets, blocks)
    Syntax,
    /// Variable names and the assignment keyword
    Variable,
}

/// Fine-grained token classification nested under [`TokenCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Syntax
    /// Whitespace (skipped, never emitted)
    Whitespace,
    /// Statement terminator `.`
    EndOfStatement,
    /// Opening bracket `(`
    LeftBracket,
    /// Closing bracket `)`
    RightBracket,
    /// Opening block brace `{`
    BeginBlock,
    /// Closing block brace `}`
    EndBlock,

    // Value
    /// Text literal `'Wort'`
    Text,
    /// Boolean literal `wahr`
    True,
    /// Boolean literal `falsch`
    False,
    /// Number literal, integer or comma-decimal (`2,5`)
    Number,

    // Math operation
    /// `+`
    Addition,
    /// Binary `-`
    Subtraction,
    /// Unary `-` (previous token was not a value, variable or `)`)
    Negative,
    /// `/`
    Division,
    /// `*`
    Multiplication,
    /// `%`
    Modulo,
    /// `^`
    Exponentiation,

    // Logic operation
    /// `=`
    Equals,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `nicht`
    Not,
    /// `und`
    And,
    /// `oder`
    Or,

    // Control flow
    /// `wenn`
    If,
    /// `mache`
    Do,
    /// `sonst wenn` (lexed as a single token)
    ElseIf,
    /// `sonst`
    Else,
    /// `ergebnis`
    Return,

    // Variable
    /// `ist`
    Assignment,
    /// Any word that is not a keyword
    VariableName,
}

/// An immutable leaf token: category, detail kind and literal lexeme.
///
/// Composite (bracketed/block) tokens exist only on the parser side;
/// the tokenizer emits leaves exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Coarse classification
    pub category: TokenCategory,
    /// Fine-grained classification
    pub kind: TokenKind,
    /// Literal lexeme; for text literals the inner word without quotes
    pub text: String,
}

impl Token {
    /// Create a token.
    pub fn new(category: TokenCategory, kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            category,
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

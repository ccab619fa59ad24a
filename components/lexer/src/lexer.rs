//! Table-driven tokenizer.

use crate::token::{Token, TokenCategory, TokenKind};
use core_types::{ErrorKind, ScriptError};
use regex::Regex;
use std::sync::OnceLock;

/// One entry of the token definition table.
struct TokenDefinition {
    pattern: Regex,
    kind: TokenKind,
    category: TokenCategory,
}

impl TokenDefinition {
    fn new(pattern: &str, kind: TokenKind, category: TokenCategory) -> Self {
        Self {
            // The table is static; every pattern is known to compile.
            pattern: Regex::new(pattern).unwrap_or_else(|e| panic!("invalid token pattern: {}", e)),
            kind,
            category,
        }
    }
}

/// The ordered token definition table, compiled once per process and
/// never mutated afterwards. Order matters: two-character comparison
/// operators come before their one-character prefixes, `sonst wenn`
/// before `sonst`, and keywords before the variable-name catch-all.
fn definitions() -> &'static [TokenDefinition] {
    static TABLE: OnceLock<Vec<TokenDefinition>> = OnceLock::new();
    TABLE.get_or_init(|| {
        use TokenCategory::*;
        use TokenKind::*;
        vec![
            TokenDefinition::new(r"^\s+", Whitespace, Syntax),
            TokenDefinition::new(r"^\.", EndOfStatement, Syntax),
            TokenDefinition::new(r"^\(", LeftBracket, Syntax),
            TokenDefinition::new(r"^\)", RightBracket, Syntax),
            TokenDefinition::new(r"^\{", BeginBlock, Syntax),
            TokenDefinition::new(r"^\}", EndBlock, Syntax),
            TokenDefinition::new(r"^'(\w+)'", Text, Value),
            TokenDefinition::new(r"^wahr\b", True, Value),
            TokenDefinition::new(r"^falsch\b", False, Value),
            TokenDefinition::new(r"^[0-9]+(,[0-9]+)?", Number, Value),
            TokenDefinition::new(r"^\+", Addition, Math),
            TokenDefinition::new(r"^-", Subtraction, Math),
            TokenDefinition::new(r"^/", Division, Math),
            TokenDefinition::new(r"^\*", Multiplication, Math),
            TokenDefinition::new(r"^%", Modulo, Math),
            TokenDefinition::new(r"^\^", Exponentiation, Math),
            TokenDefinition::new(r"^=", Equals, Logic),
            TokenDefinition::new(r"^>=", GreaterEqual, Logic),
            TokenDefinition::new(r"^>", Greater, Logic),
            TokenDefinition::new(r"^<=", LessEqual, Logic),
            TokenDefinition::new(r"^<", Less, Logic),
            TokenDefinition::new(r"^nicht\b", Not, Logic),
            TokenDefinition::new(r"^und\b", And, Logic),
            TokenDefinition::new(r"^oder\b", Or, Logic),
            TokenDefinition::new(r"^wenn\b", If, ControlFlow),
            TokenDefinition::new(r"^mache\b", Do, ControlFlow),
            TokenDefinition::new(r"^sonst\s+wenn\b", ElseIf, ControlFlow),
            TokenDefinition::new(r"^sonst\b", Else, ControlFlow),
            TokenDefinition::new(r"^ergebnis\b", Return, ControlFlow),
            TokenDefinition::new(r"^ist\b", Assignment, Variable),
            TokenDefinition::new(r"^\w+", VariableName, Variable),
        ]
    })
}

/// Returns whether a `-` following this token is binary subtraction.
///
/// A minus after a value, a variable name or a closing bracket has a
/// left operand; anywhere else it is a unary negative.
fn minus_is_binary(previous: Option<&Token>) -> bool {
    match previous {
        Some(token) => {
            token.kind == TokenKind::VariableName
                || token.kind == TokenKind::RightBracket
                || token.category == TokenCategory::Value
        }
        None => false,
    }
}

/// Tokenize source text into an ordered token sequence.
///
/// Whitespace is skipped. Fails with a syntax error when no table
/// entry matches the front of the remaining input.
///
/// # Examples
///
/// ```
/// use lexer::{tokenize, TokenKind};
///
/// let tokens = tokenize("ergebnis 1 + 2.").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Return,
///         TokenKind::Number,
///         TokenKind::Addition,
///         TokenKind::Number,
///         TokenKind::EndOfStatement,
///     ]
/// );
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ScriptError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut rest = source;

    while !rest.is_empty() {
        let mut matched = false;

        for definition in definitions() {
            let Some(captures) = definition.pattern.captures(rest) else {
                continue;
            };
            let Some(full) = captures.get(0) else {
                continue;
            };

            let mut kind = definition.kind;
            if kind == TokenKind::Subtraction && !minus_is_binary(tokens.last()) {
                kind = TokenKind::Negative;
            }

            // Text literals store the inner word, everything else the
            // full trimmed lexeme.
            let text = match kind {
                TokenKind::Text => captures
                    .get(1)
                    .map(|m| m.as_str())
                    .unwrap_or_default()
                    .to_string(),
                _ => full.as_str().trim().to_string(),
            };

            if kind != TokenKind::Whitespace {
                tokens.push(Token::new(definition.category, kind, text));
            }

            rest = &rest[full.end()..];
            matched = true;
            break;
        }

        if !matched {
            let snippet: String = rest.chars().take(16).collect();
            return Err(ScriptError::with_fragment(
                ErrorKind::SyntaxError,
                "Unrecognized character sequence",
                snippet,
            ));
        }
    }

    Ok(tokens)
}

use thiserror::Error;

use super::lexer::TokenKind;

/// Errors produced while splitting an expression into tokens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("escape character at offset {position} has nothing to escape")]
    TrailingEscape { position: usize },
}

/// The whole expression normalized to nothing: no input at all, or only
/// empty groups.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expression contains no keywords")]
pub struct EmptyExpressionError;

/// Errors produced while parsing a token stream. Every variant carries the
/// byte offset of the offending token so the message can be shown verbatim
/// to the rule author.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected {found} at offset {position}")]
    UnexpectedToken { position: usize, found: TokenKind },

    #[error("unmatched '(' at offset {position}")]
    UnmatchedParen { position: usize },

    #[error("unexpected ')' at offset {position}")]
    StrayParen { position: usize },

    #[error("groups nested deeper than {max_depth} levels at offset {position}")]
    DepthExceeded { position: usize, max_depth: usize },

    #[error(transparent)]
    Empty(#[from] EmptyExpressionError),
}

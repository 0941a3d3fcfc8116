mod error;
mod grammar;
mod lexer;

pub use error::{EmptyExpressionError, LexError, ParseError};
pub use grammar::{parse, parse_with_max_depth, DEFAULT_MAX_DEPTH};
pub use lexer::{tokenize, Token, TokenKind};

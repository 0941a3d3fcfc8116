mod compile;
mod error;
mod parse;
mod types;

pub use compile::{build, compile, compile_with_max_depth};
pub use error::KwruleError;
pub use parse::{
    parse, parse_with_max_depth, tokenize, EmptyExpressionError, LexError, ParseError, Token,
    TokenKind, DEFAULT_MAX_DEPTH,
};
pub use types::{escape, keyword, InvariantError, Node, RuleTree};

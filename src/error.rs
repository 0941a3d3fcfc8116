use thiserror::Error;

use crate::parse::{LexError, ParseError};
use crate::types::InvariantError;

/// Unified error type covering every compilation stage.
///
/// Returned by [`compile()`](crate::compile). Each variant wraps the stage
/// error unchanged, so the message a caller shows the rule author is exactly
/// what the failing stage produced.
#[derive(Debug, Error)]
pub enum KwruleError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Invariant(#[from] InvariantError),
}

use thiserror::Error;

/// Defensive error for structural violations that bad input can never cause.
///
/// The parser's normalization drops empty groups and unwraps single-child
/// chains, so an operator node with no children can only come from an AST
/// assembled by hand. Building such a node is rejected rather than emitting
/// a malformed rule tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("{op} node has no children")]
    ChildlessOperator { op: &'static str },
}

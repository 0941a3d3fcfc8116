mod error;
mod expr;
mod rule_tree;

pub use error::InvariantError;
pub use expr::{escape, keyword, Node};
pub use rule_tree::RuleTree;

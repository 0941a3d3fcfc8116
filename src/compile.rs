use crate::parse::{parse_with_max_depth, tokenize, DEFAULT_MAX_DEPTH};
use crate::types::{InvariantError, Node, RuleTree};
use crate::KwruleError;

/// Map an AST to its serializable rule tree.
///
/// A pure structural walk: keywords become leaves, operator nodes become
/// `OR`/`AND` nodes over their built children.
///
/// # Errors
///
/// Returns [`InvariantError`] if an operator node has no children. The
/// parser never produces one; this guards hand-assembled trees.
pub fn build(node: &Node) -> Result<RuleTree, InvariantError> {
    match node {
        Node::Keyword(text) => Ok(RuleTree::Keyword {
            value: text.clone(),
        }),
        Node::Or(children) => Ok(RuleTree::Or {
            children: build_children(children, "OR")?,
        }),
        Node::And(children) => Ok(RuleTree::And {
            children: build_children(children, "AND")?,
        }),
    }
}

fn build_children(children: &[Node], op: &'static str) -> Result<Vec<RuleTree>, InvariantError> {
    if children.is_empty() {
        return Err(InvariantError::ChildlessOperator { op });
    }
    children.iter().map(build).collect()
}

/// Compile a raw keyword expression into its canonical rule tree.
///
/// This is the single entry point the task-configuration layer calls when a
/// monitoring rule is created or edited: `build(parse(tokenize(expr)))`,
/// with nothing caught or masked in between.
///
/// # Errors
///
/// Propagates [`LexError`](crate::LexError), [`ParseError`](crate::ParseError),
/// and [`InvariantError`] unchanged, wrapped in [`KwruleError`].
pub fn compile(expr: &str) -> Result<RuleTree, KwruleError> {
    compile_with_max_depth(expr, DEFAULT_MAX_DEPTH)
}

/// [`compile`] with a caller-chosen cap on group nesting.
///
/// # Errors
///
/// As [`compile`].
pub fn compile_with_max_depth(expr: &str, max_depth: usize) -> Result<RuleTree, KwruleError> {
    let tokens = tokenize(expr)?;
    let node = parse_with_max_depth(&tokens, max_depth)?;
    Ok(build(&node)?)
}

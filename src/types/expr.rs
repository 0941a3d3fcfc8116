use std::fmt;

/// Characters that carry meaning in a raw expression: the OR and AND
/// operators, the group parentheses, and the escape character itself.
fn is_reserved(c: char) -> bool {
    matches!(c, '/' | '+' | '(' | ')' | '\\')
}

/// Backslash-escape `text` so that it lexes back to a single keyword.
///
/// Reserved characters and whitespace each get a leading backslash; every
/// other character passes through untouched.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_reserved(c) || c.is_whitespace() {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// AST for a keyword expression, produced by the parser.
///
/// Operator nodes are n-ary: chains of the same operator are kept as one
/// flat child list rather than nested pairs, which keeps the tree shallow
/// for the downstream matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal matchable text. Never empty when produced by the lexer.
    Keyword(String),
    Or(Vec<Node>),
    And(Vec<Node>),
}

impl Node {
    /// Combine two nodes with OR, splicing the children of any operand that
    /// is already an `Or` node.
    #[must_use]
    pub fn or(self, other: Node) -> Node {
        let mut children = match self {
            Node::Or(children) => children,
            node => vec![node],
        };
        match other {
            Node::Or(more) => children.extend(more),
            node => children.push(node),
        }
        Node::Or(children)
    }

    /// Combine two nodes with AND, splicing the children of any operand that
    /// is already an `And` node.
    #[must_use]
    pub fn and(self, other: Node) -> Node {
        let mut children = match self {
            Node::And(children) => children,
            node => vec![node],
        };
        match other {
            Node::And(more) => children.extend(more),
            node => children.push(node),
        }
        Node::And(children)
    }

    /// Fold a list of operands into one OR node. A single operand is
    /// returned as-is; an empty list yields `None`.
    pub(crate) fn or_of(parts: Vec<Node>) -> Option<Node> {
        let mut parts = parts.into_iter();
        let first = parts.next()?;
        Some(parts.fold(first, Node::or))
    }

    /// Fold a list of operands into one AND node, as [`Node::or_of`].
    pub(crate) fn and_of(parts: Vec<Node>) -> Option<Node> {
        let mut parts = parts.into_iter();
        let first = parts.next()?;
        Some(parts.fold(first, Node::and))
    }
}

#[must_use]
pub fn keyword(text: &str) -> Node {
    Node::Keyword(text.to_owned())
}

/// Renders a parseable expression: keywords are escaped, operator children
/// are parenthesized, so `parse(tokenize(node.to_string()))` returns an
/// equal node.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Keyword(text) => f.write_str(&escape(text)),
            Node::Or(children) => write_joined(f, children, " / "),
            Node::And(children) => write_joined(f, children, " + "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, children: &[Node], sep: &str) -> fmt::Result {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        match child {
            Node::Keyword(_) => write!(f, "{child}")?,
            _ => write!(f, "({child})")?,
        }
    }
    Ok(())
}

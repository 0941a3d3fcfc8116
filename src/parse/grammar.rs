use super::error::{EmptyExpressionError, ParseError};
use super::lexer::{Token, TokenKind};
use crate::types::Node;

/// Default cap on group nesting. Recursion only happens through
/// parenthesized groups, so this bounds stack use on adversarial input.
pub const DEFAULT_MAX_DEPTH: usize = 64;

struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
    max_depth: usize,
}

impl<'t> Cursor<'t> {
    fn peek(&self) -> &'t Token {
        // tokenize always appends an End token; clamping keeps a hand-built
        // stream without one from running past the slice
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn bump(&mut self) -> &'t Token {
        let token = self.peek();
        self.pos += 1;
        token
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}

/// Parse a token stream into an AST, with the default nesting cap.
///
/// # Errors
///
/// Returns [`ParseError`] on an unexpected token, an unmatched parenthesis,
/// or an expression that normalizes to nothing.
pub fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    parse_with_max_depth(tokens, DEFAULT_MAX_DEPTH)
}

/// [`parse`] with a caller-chosen cap on group nesting.
pub fn parse_with_max_depth(tokens: &[Token], max_depth: usize) -> Result<Node, ParseError> {
    match tokens.first() {
        None => return Err(EmptyExpressionError.into()),
        Some(first) if first.kind == TokenKind::End => return Err(EmptyExpressionError.into()),
        Some(_) => {}
    }
    let mut cursor = Cursor {
        tokens,
        pos: 0,
        max_depth,
    };
    let node = or_level(&mut cursor, 0)?;
    let next = cursor.peek();
    match next.kind {
        TokenKind::End => node.ok_or_else(|| EmptyExpressionError.into()),
        TokenKind::RParen => Err(ParseError::StrayParen {
            position: next.position,
        }),
        kind => Err(ParseError::UnexpectedToken {
            position: next.position,
            found: kind,
        }),
    }
}

// Each level returns None when all of its operands were empty groups, which
// drop out of the tree during normalization.

/// `or_expr := and_expr ( '/' and_expr )*`
///
/// AND binds tighter than OR, the usual boolean convention. The nesting
/// below (OR level calls AND level calls atom) is the only place that
/// encodes it.
fn or_level(cursor: &mut Cursor<'_>, depth: usize) -> Result<Option<Node>, ParseError> {
    let mut parts = Vec::new();
    loop {
        if let Some(node) = and_level(cursor, depth)? {
            parts.push(node);
        }
        if !cursor.eat(TokenKind::Or) {
            break;
        }
    }
    Ok(Node::or_of(parts))
}

/// `and_expr := atom ( '+' atom )*`
fn and_level(cursor: &mut Cursor<'_>, depth: usize) -> Result<Option<Node>, ParseError> {
    let mut parts = Vec::new();
    loop {
        if let Some(node) = atom(cursor, depth)? {
            parts.push(node);
        }
        if !cursor.eat(TokenKind::And) {
            break;
        }
    }
    Ok(Node::and_of(parts))
}

/// `atom := KEYWORD | '(' expression ')'`
///
/// An empty group `()` yields None. Anything else either consumes at least
/// one token or fails, so the level loops above always make progress.
fn atom(cursor: &mut Cursor<'_>, depth: usize) -> Result<Option<Node>, ParseError> {
    let token = cursor.peek();
    match token.kind {
        TokenKind::Keyword => {
            cursor.bump();
            Ok(Some(Node::Keyword(token.text.clone())))
        }
        TokenKind::LParen => {
            if depth >= cursor.max_depth {
                return Err(ParseError::DepthExceeded {
                    position: token.position,
                    max_depth: cursor.max_depth,
                });
            }
            cursor.bump();
            match cursor.peek().kind {
                TokenKind::RParen => {
                    cursor.bump();
                    return Ok(None);
                }
                TokenKind::End => {
                    return Err(ParseError::UnmatchedParen {
                        position: token.position,
                    });
                }
                _ => {}
            }
            let inner = or_level(cursor, depth + 1)?;
            let next = cursor.peek();
            match next.kind {
                TokenKind::RParen => {
                    cursor.bump();
                    Ok(inner)
                }
                TokenKind::End => Err(ParseError::UnmatchedParen {
                    position: token.position,
                }),
                kind => Err(ParseError::UnexpectedToken {
                    position: next.position,
                    found: kind,
                }),
            }
        }
        kind => Err(ParseError::UnexpectedToken {
            position: token.position,
            found: kind,
        }),
    }
}

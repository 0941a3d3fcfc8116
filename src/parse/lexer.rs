use winnow::combinator::{alt, cut_err};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::any;

/// Token classes of the raw expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Or,
    And,
    LParen,
    RParen,
    End,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword => write!(f, "keyword"),
            TokenKind::Or => write!(f, "'/'"),
            TokenKind::And => write!(f, "'+'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::End => write!(f, "end of input"),
        }
    }
}

/// One lexed token. `position` is the byte offset of the token start in the
/// original expression, carried only for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

fn operator(input: &mut &str) -> ModalResult<TokenKind> {
    alt((
        '/'.value(TokenKind::Or),
        '+'.value(TokenKind::And),
        '('.value(TokenKind::LParen),
        ')'.value(TokenKind::RParen),
    ))
    .parse_next(input)
}

/// Accumulate a keyword until an unescaped operator, parenthesis, or
/// whitespace ends it. A backslash makes the following character literal and
/// is itself dropped; a backslash with nothing after it fails.
fn keyword(input: &mut &str) -> ModalResult<String> {
    let mut text = String::new();
    loop {
        let Some(next) = input.chars().next() else {
            break;
        };
        if next == '\\' {
            any.parse_next(input)?;
            let escaped = cut_err(any).parse_next(input)?;
            text.push(escaped);
        } else if next.is_whitespace() || matches!(next, '/' | '+' | '(' | ')') {
            break;
        } else {
            let c = any.parse_next(input)?;
            text.push(c);
        }
    }
    Ok(text)
}

/// Split a raw expression into tokens, ending with a single [`TokenKind::End`].
///
/// Operates on code points, so multi-byte script characters pass through
/// keywords intact. Whitespace between tokens is skipped.
///
/// # Errors
///
/// Returns [`LexError`](super::LexError) if the input ends in the middle of
/// an escape sequence.
pub fn tokenize(expr: &str) -> Result<Vec<Token>, super::LexError> {
    let mut input = expr;
    let mut tokens = Vec::new();
    loop {
        input = input.trim_start();
        let position = expr.len() - input.len();
        if input.is_empty() {
            tokens.push(Token {
                kind: TokenKind::End,
                text: String::new(),
                position,
            });
            return Ok(tokens);
        }
        if let Ok(kind) = operator(&mut input) {
            tokens.push(Token {
                kind,
                text: expr[position..=position].to_owned(),
                position,
            });
            continue;
        }
        match keyword(&mut input) {
            Ok(text) => tokens.push(Token {
                kind: TokenKind::Keyword,
                text,
                position,
            }),
            // keyword accumulation only fails on an escape with nothing
            // after it; the failure point sits just past that backslash
            Err(_) => {
                return Err(super::LexError::TrailingEscape {
                    position: expr.len() - input.len() - 1,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::LexError;

    fn kinds(expr: &str) -> Vec<TokenKind> {
        tokenize(expr).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn single_keyword() {
        let tokens = tokenize("breach").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].text, "breach");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].kind, TokenKind::End);
    }

    #[test]
    fn operators_and_positions() {
        let tokens = tokenize("a / b + c").unwrap();
        assert_eq!(
            kinds("a / b + c"),
            vec![
                TokenKind::Keyword,
                TokenKind::Or,
                TokenKind::Keyword,
                TokenKind::And,
                TokenKind::Keyword,
                TokenKind::End,
            ]
        );
        assert_eq!(tokens[1].position, 2);
        assert_eq!(tokens[3].position, 6);
        assert_eq!(tokens[4].position, 8);
    }

    #[test]
    fn parens() {
        assert_eq!(
            kinds("(a)"),
            vec![
                TokenKind::LParen,
                TokenKind::Keyword,
                TokenKind::RParen,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn whitespace_only_is_just_end() {
        let tokens = tokenize("   \t\n ").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::End);
    }

    #[test]
    fn escaped_operator_joins_keyword() {
        let tokens = tokenize("互联网\\+").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].text, "互联网+");
    }

    #[test]
    fn escaped_whitespace_joins_keyword() {
        let tokens = tokenize("press\\ release").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "press release");
    }

    #[test]
    fn escaped_backslash() {
        let tokens = tokenize("a\\\\b").unwrap();
        assert_eq!(tokens[0].text, "a\\b");
    }

    #[test]
    fn escape_of_ordinary_character_is_literal() {
        let tokens = tokenize("\\a\\b").unwrap();
        assert_eq!(tokens[0].text, "ab");
    }

    #[test]
    fn multibyte_keyword_position_is_byte_offset() {
        let tokens = tokenize("舆情 / b").unwrap();
        assert_eq!(tokens[0].text, "舆情");
        // "舆情" is six bytes, plus the space
        assert_eq!(tokens[1].position, 7);
    }

    #[test]
    fn trailing_escape_is_error() {
        let err = tokenize("abc\\").unwrap_err();
        assert_eq!(err, LexError::TrailingEscape { position: 3 });
    }

    #[test]
    fn lone_backslash_is_error() {
        let err = tokenize("\\").unwrap_err();
        assert_eq!(err, LexError::TrailingEscape { position: 0 });
    }
}

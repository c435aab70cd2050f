use std::str::FromStr;

use nom::IResult;
use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, one_of},
    combinator::{map, map_res},
};

use crate::error::SyntaxError;
use crate::token::{Operator, Token, TokenKind};

/// Upper bound on the number of tokens in a single expression
pub const MAX_TOKENS: usize = 1024;

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn lex_number(i: &str) -> IResult<&str, TokenKind> {
    map(take_while1(is_number_char), |text: &str| {
        TokenKind::Number(text.to_string())
    })(i)
}

fn lex_operator(i: &str) -> IResult<&str, TokenKind> {
    map_res(one_of("+-*/%"), |c: char| {
        Operator::from_str(c.encode_utf8(&mut [0; 4])).map(TokenKind::Operator)
    })(i)
}

fn lex_token(i: &str) -> IResult<&str, TokenKind> {
    alt((
        lex_number,
        lex_operator,
        map(char('('), |_| TokenKind::LeftParen),
        map(char(')'), |_| TokenKind::RightParen),
    ))(i)
}

/// A number may hold at most one decimal point and needs at least one digit
fn check_number(text: &str, position: usize) -> Result<(), SyntaxError> {
    let points = text.chars().filter(|c| *c == '.').count();
    if points > 1 || points == text.len() {
        return Err(SyntaxError::MalformedNumber {
            text: text.to_string(),
            position,
        });
    }
    Ok(())
}

/// Splits `input` into tokens, failing on the first character that cannot start one
pub fn lex(input: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut remaining = input.trim_start();
    // Offsets are tracked in characters so they line up with what the user typed
    let mut position = input.chars().count() - remaining.chars().count();

    while !remaining.is_empty() {
        if tokens.len() == MAX_TOKENS {
            return Err(SyntaxError::TooLong(MAX_TOKENS));
        }

        let (rest, kind) = match lex_token(remaining) {
            Ok(r) => r,
            Err(_) => {
                return Err(SyntaxError::InvalidCharacter {
                    character: remaining.chars().next().unwrap_or_default(),
                    position,
                })
            }
        };

        if let TokenKind::Number(text) = &kind {
            check_number(text, position)?;
        }

        tokens.push(Token::new(kind, position));
        position += remaining[..remaining.len() - rest.len()].chars().count();

        remaining = rest.trim_start();
        position += rest.chars().count() - remaining.chars().count();
    }

    if tokens.is_empty() {
        return Err(SyntaxError::Empty);
    }

    Ok(tokens)
}

/// Checks that every `(` is closed by a later `)`
pub fn validate_parens(tokens: &[Token]) -> Result<(), SyntaxError> {
    let mut open = Vec::new();
    for token in tokens {
        match token.kind {
            TokenKind::LeftParen => open.push(token.position),
            TokenKind::RightParen => {
                if open.pop().is_none() {
                    return Err(SyntaxError::UnbalancedParens {
                        position: token.position,
                    });
                }
            }
            _ => {}
        }
    }

    match open.first() {
        Some(position) => Err(SyntaxError::UnbalancedParens {
            position: *position,
        }),
        None => Ok(()),
    }
}

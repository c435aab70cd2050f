use crate::error::SyntaxError;
use crate::token::{Operator, Token, TokenKind};
use crate::Expr;

struct Parser<'a> {
    tokens: &'a [Token],
    cursor: usize,
}

fn unexpected(token: &Token) -> SyntaxError {
    SyntaxError::UnexpectedToken {
        token: token.kind.to_string(),
        position: token.position,
    }
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.cursor)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }

    /// Consumes the next token if it is an operator accepted by `filter`
    fn next_operator(&mut self, filter: impl Fn(Operator) -> bool) -> Option<Operator> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Operator(op),
                ..
            }) if filter(*op) => {
                self.cursor += 1;
                Some(*op)
            }
            _ => None,
        }
    }

    // expr := term (('+'|'-') term)*
    fn expression(&mut self) -> Result<Expr, SyntaxError> {
        let mut acc = self.term()?;
        while let Some(op) = self.next_operator(Operator::is_additive) {
            let r = self.term()?;
            acc = Expr::Binary(op, Box::new(acc), Box::new(r));
        }
        Ok(acc)
    }

    // term := factor (('*'|'/'|'%') factor)*
    fn term(&mut self) -> Result<Expr, SyntaxError> {
        let mut acc = self.factor()?;
        while let Some(op) = self.next_operator(|op| !op.is_additive()) {
            let r = self.factor()?;
            acc = Expr::Binary(op, Box::new(acc), Box::new(r));
        }
        Ok(acc)
    }

    // factor := number | '(' expr ')' | '-' factor
    fn factor(&mut self) -> Result<Expr, SyntaxError> {
        let token = self.next().ok_or(SyntaxError::UnexpectedEnd)?;
        match &token.kind {
            TokenKind::Number(text) => {
                text.parse()
                    .map(Expr::Literal)
                    .map_err(|_| SyntaxError::MalformedNumber {
                        text: text.clone(),
                        position: token.position,
                    })
            }
            TokenKind::LeftParen => {
                let inner = self.expression()?;
                match self.next() {
                    Some(Token {
                        kind: TokenKind::RightParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(unexpected(other)),
                    None => Err(SyntaxError::UnexpectedEnd),
                }
            }
            TokenKind::Operator(Operator::Sub) => {
                let operand = self.factor()?;
                Ok(Expr::Binary(
                    Operator::Sub,
                    Box::new(Expr::Literal(0.)),
                    Box::new(operand),
                ))
            }
            TokenKind::Operator(_) | TokenKind::RightParen => Err(unexpected(token)),
        }
    }
}

/// Builds an expression tree from a token stream with balanced parentheses
pub fn parse(tokens: &[Token]) -> Result<Expr, SyntaxError> {
    let mut parser = Parser { tokens, cursor: 0 };
    let expr = parser.expression()?;

    match parser.peek() {
        Some(token) => Err(unexpected(token)),
        None => Ok(expr),
    }
}

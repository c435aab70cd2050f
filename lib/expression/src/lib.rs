//! Arithmetic over `+ - * / % ( )` and decimal numbers
//!
//! Input is lexed, checked for balanced parentheses, parsed into an [`Expr`]
//! and then walked to produce a value. Nothing outside this grammar is ever
//! accepted.

use log::debug;

pub use error::{EvalError, MathError, SyntaxError};
pub use format::{format_value, DECIMAL_PLACES};
pub use lexer::{lex, validate_parens, MAX_TOKENS};
pub use parser::parse;
pub use token::{Operator, Token, TokenKind};

mod error;
mod eval;
mod format;
mod lexer;
mod parser;
mod token;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(f64),
    Binary(Operator, Box<Expr>, Box<Expr>),
}

/// Parses `text` into an expression tree
pub fn parse_str(text: &str) -> Result<Expr, SyntaxError> {
    let tokens = lex(text)?;
    validate_parens(&tokens)?;
    parse(&tokens)
}

pub fn evaluate(text: &str) -> Result<f64, EvalError> {
    let expr = parse_str(text)?;
    let value = expr.evaluate()?;
    debug!("evaluated {:?} to {}", text, value);
    Ok(value)
}

/// Evaluates `text` and formats the result for display
pub fn calculate(text: &str) -> Result<String, EvalError> {
    evaluate(text).map(format_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(evaluate("2+3*4")?, 14.);
        assert_eq!(evaluate("(2+3)*4")?, 20.);
        assert_eq!(evaluate("-3+5")?, 2.);
        assert_eq!(evaluate("34/2")?, 17.);
        assert_eq!(evaluate("34 +6/ 2")?, 37.);
        assert_eq!(evaluate("(34 +6)/ 2")?, 20.);
        assert_eq!(evaluate("10 - 4 - 3")?, 3.);
        assert_eq!(evaluate("17 % 5 * 2")?, 4.);
        assert_eq!(evaluate("-(2+3)")?, -5.);
        assert_eq!(evaluate("2*-3")?, -6.);
        Ok(())
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            evaluate("10/0"),
            Err(EvalError::Math(MathError::DivisionByZero))
        ));
        assert!(matches!(
            evaluate("5 % (2-2)"),
            Err(EvalError::Math(MathError::DivisionByZero))
        ));
        assert!(matches!(
            evaluate("1+"),
            Err(EvalError::Syntax(SyntaxError::UnexpectedEnd))
        ));
        assert!(matches!(
            evaluate("2..5+1"),
            Err(EvalError::Syntax(SyntaxError::MalformedNumber { .. }))
        ));
        assert!(matches!(
            evaluate("(1+2"),
            Err(EvalError::Syntax(SyntaxError::UnbalancedParens { position: 0 }))
        ));
        assert!(matches!(
            evaluate("alert(1)"),
            Err(EvalError::Syntax(SyntaxError::InvalidCharacter {
                character: 'a',
                position: 0
            }))
        ));
    }

    #[test]
    fn test_overflow() {
        let huge = "9".repeat(400);
        assert!(matches!(
            evaluate(&huge),
            Err(EvalError::Math(MathError::NonFinite))
        ));

        let big = format!("{}*{}", "9".repeat(200), "9".repeat(200));
        assert!(matches!(
            evaluate(&big),
            Err(EvalError::Math(MathError::NonFinite))
        ));
    }

    #[test]
    fn test_calculate() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(calculate("0.1+0.2")?, "0.3");
        assert_eq!(calculate("10/4")?, "2.5");
        assert_eq!(calculate("2/3")?, "0.66666667");
        assert_eq!(calculate("3 * 4 / (6+54.) * 5 - 1")?, "0");
        Ok(())
    }

    #[test]
    fn test_format_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let inputs = [
            "2+3*4",
            "-3+5",
            "1/3",
            "-2/3",
            "0.1+0.2",
            "7%2.5",
            "1/7*1000000",
            "123456789*1000000",
            "-(0.5-0.75)",
        ];

        for input in inputs.iter() {
            let first = calculate(input)?;
            let second = calculate(&first)?;
            assert_eq!(first, second, "{} did not round trip", input);
            assert_eq!(evaluate(&first)?, evaluate(&second)?);
        }
        Ok(())
    }
}

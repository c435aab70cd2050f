use derive_more::{Display, From};

use telemetry::IsErr;

#[derive(Debug, Clone, PartialEq, Display)]
pub enum SyntaxError {
    #[display(fmt = "Empty expression")]
    Empty,

    #[display(fmt = "Expression exceeds {} tokens", _0)]
    TooLong(usize),

    #[display(fmt = "Invalid character '{}' at position {}", character, position)]
    InvalidCharacter { character: char, position: usize },

    #[display(fmt = "Malformed number \"{}\" at position {}", text, position)]
    MalformedNumber { text: String, position: usize },

    #[display(fmt = "Unbalanced parenthesis at position {}", position)]
    UnbalancedParens { position: usize },

    #[display(fmt = "Unexpected token \"{}\" at position {}", token, position)]
    UnexpectedToken { token: String, position: usize },

    #[display(fmt = "Unexpected end of expression")]
    UnexpectedEnd,
}

impl std::error::Error for SyntaxError {}

#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum MathError {
    #[display(fmt = "Division by zero")]
    DivisionByZero,

    #[display(fmt = "Result is not a finite number")]
    NonFinite,
}

impl std::error::Error for MathError {}

#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum EvalError {
    #[display(fmt = "Syntax Error: {}", _0)]
    Syntax(SyntaxError),

    #[display(fmt = "Math Error: {}", _0)]
    Math(MathError),
}

impl std::error::Error for EvalError {}

// Malformed input is the caller's mistake, not a failure of the evaluator
impl IsErr for EvalError {
    fn is_err(&self) -> bool {
        matches!(self, EvalError::Math(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = EvalError::from(SyntaxError::InvalidCharacter {
            character: 'x',
            position: 3,
        });
        assert_eq!(
            e.to_string(),
            "Syntax Error: Invalid character 'x' at position 3"
        );

        let e = EvalError::from(MathError::DivisionByZero);
        assert_eq!(e.to_string(), "Math Error: Division by zero");
    }

    #[test]
    fn test_is_err() {
        assert!(!EvalError::Syntax(SyntaxError::UnexpectedEnd).is_err());
        assert!(EvalError::Math(MathError::NonFinite).is_err());
    }
}

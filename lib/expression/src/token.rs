use derive_more::Display;
use strum_macros::{Display as SymbolDisplay, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, SymbolDisplay, EnumString)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "%")]
    Rem,
}

impl Operator {
    /// Additive operators bind looser than multiplicative ones
    pub fn is_additive(self) -> bool {
        matches!(self, Operator::Add | Operator::Sub)
    }
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum TokenKind {
    #[display(fmt = "{}", _0)]
    Number(String),

    #[display(fmt = "{}", _0)]
    Operator(Operator),

    #[display(fmt = "(")]
    LeftParen,

    #[display(fmt = ")")]
    RightParen,
}

/// A lexical unit along with the character offset it starts at
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize) -> Token {
        Token { kind, position }
    }
}

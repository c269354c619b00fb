use crate::converter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Operand(char),
    Operator(BinaryOperator),
    LeftParentheses,
    RightParentheses,
}

/// A token together with the character offset it was read from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub position: usize,
}

impl SpannedToken {
    pub fn new(token: Token, position: usize) -> SpannedToken {
        SpannedToken { token, position }
    }
}

impl Token {
    pub fn is_parenthesis(&self) -> bool {
        matches!(self, Token::LeftParentheses | Token::RightParentheses)
    }
}

impl TryFrom<char> for Token {
    type Error = char;

    fn try_from(character: char) -> Result<Token, Self::Error> {
        match character {
            '(' => Ok(Token::LeftParentheses),
            ')' => Ok(Token::RightParentheses),
            operand if operand.is_ascii_alphabetic() => Ok(Token::Operand(operand)),
            symbol => BinaryOperator::from_symbol(symbol)
                .map(Token::Operator)
                .ok_or(symbol),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(name) => write!(f, "{}", name),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
        }
    }
}

use crate::converter::operator::BinaryOperator;
use crate::converter::token::Token;
use thiserror::Error;

pub type Result<T, E = ConversionError> = std::result::Result<T, E>;

/// Why an expression could not be converted.
///
/// Every position is a zero-based character offset into the original input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { position: usize, character: char },
    #[error("unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },
    #[error("unexpected token '{token}' at position {position}")]
    UnexpectedToken { position: usize, token: Token },
    #[error("trailing tokens after a complete expression, starting at position {position}")]
    TrailingTokens { position: usize },
    #[error("incomplete expression, an operand is missing at position {position}")]
    IncompleteExpression { position: usize },
    #[error("operator '{operator}' at position {position} has fewer than two operands")]
    StackUnderflow {
        position: usize,
        operator: BinaryOperator,
    },
    #[error("expression nests deeper than {limit} levels at position {position}")]
    TooDeeplyNested { position: usize, limit: usize },
}

impl ConversionError {
    pub fn position(&self) -> usize {
        match *self {
            ConversionError::InvalidCharacter { position, .. }
            | ConversionError::UnbalancedParenthesis { position }
            | ConversionError::UnexpectedToken { position, .. }
            | ConversionError::TrailingTokens { position }
            | ConversionError::IncompleteExpression { position }
            | ConversionError::StackUnderflow { position, .. }
            | ConversionError::TooDeeplyNested { position, .. } => position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNotationError {
    #[error("unknown notation '{0}', expected one of infix, prefix or postfix")]
    UnknownNotation(String),
}

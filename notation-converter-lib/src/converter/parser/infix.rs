use crate::converter::error::{ConversionError, Result};
use crate::converter::operator::{HIGHEST_PRECEDENCE, LOWEST_PRECEDENCE};
use crate::converter::parser::{Subtree, TokenStream};
use crate::converter::syntax::expression_tree::Node;
use crate::converter::token::{SpannedToken, Token};

/// Parses tokens written in infix notation.
///
/// Operators of equal precedence group to the left, so `a - b - c` is `(a - b) - c`.
pub fn parse_infix(tokens: Vec<SpannedToken>, max_depth: usize) -> Result<Node> {
    let mut parser = InfixParser {
        tokens: TokenStream::new(tokens),
        max_depth,
        open_parentheses: 0,
    };
    let expression = parser.parse_operation(LOWEST_PRECEDENCE)?;

    match parser.tokens.next() {
        None => Ok(expression.node),
        Some(SpannedToken {
            token: Token::RightParentheses,
            position,
        }) => Err(ConversionError::UnbalancedParenthesis { position }),
        Some(SpannedToken { token, position }) => {
            Err(ConversionError::UnexpectedToken { position, token })
        }
    }
}

struct InfixParser {
    tokens: TokenStream,
    max_depth: usize,
    open_parentheses: usize,
}

impl InfixParser {
    /// Parses a chain of operations that bind at least as tightly as `precedence`.
    fn parse_operation(&mut self, precedence: u8) -> Result<Subtree> {
        if precedence > HIGHEST_PRECEDENCE {
            return self.parse_factor();
        }

        let mut left = self.parse_operation(precedence + 1)?;
        loop {
            let (operator, position) = match self.tokens.peek() {
                Some(SpannedToken {
                    token: Token::Operator(operator),
                    position,
                }) if operator.precedence() == precedence => (*operator, *position),
                _ => break,
            };
            self.tokens.next();

            let right = self.parse_operation(precedence + 1)?;
            left = Subtree::join(operator, position, left, right, self.max_depth)?;
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Subtree> {
        match self.tokens.next() {
            None => Err(ConversionError::IncompleteExpression {
                position: self.tokens.end(),
            }),
            Some(SpannedToken {
                token: Token::Operand(name),
                position,
            }) => Ok(Subtree::operand(name, position)),
            Some(SpannedToken {
                token: Token::LeftParentheses,
                position,
            }) => self.parse_parenthesized(position),
            Some(SpannedToken { token, position }) => {
                Err(ConversionError::UnexpectedToken { position, token })
            }
        }
    }

    fn parse_parenthesized(&mut self, open_position: usize) -> Result<Subtree> {
        self.open_parentheses += 1;
        if self.open_parentheses > self.max_depth {
            return Err(ConversionError::TooDeeplyNested {
                position: open_position,
                limit: self.max_depth,
            });
        }

        let mut inner = self.parse_operation(LOWEST_PRECEDENCE)?;

        match self.tokens.next() {
            Some(SpannedToken {
                token: Token::RightParentheses,
                ..
            }) => {
                self.open_parentheses -= 1;
                inner.start = open_position;
                Ok(inner)
            }
            None => Err(ConversionError::UnbalancedParenthesis {
                position: open_position,
            }),
            Some(SpannedToken { token, position }) => {
                Err(ConversionError::UnexpectedToken { position, token })
            }
        }
    }
}

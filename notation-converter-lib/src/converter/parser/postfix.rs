use crate::converter::error::{ConversionError, Result};
use crate::converter::parser::{Subtree, TokenStream};
use crate::converter::syntax::expression_tree::Node;
use crate::converter::token::{SpannedToken, Token};

/// Generates an expression tree from tokens written in postfix notation.
///
/// # Arguments
///
/// * `tokens`: Tokens, ordered in postfix notation, to convert to an expression tree.
/// * `max_depth`: The tallest tree accepted.
///
/// returns: The root of the generated expression tree.
pub fn parse_postfix(tokens: Vec<SpannedToken>, max_depth: usize) -> Result<Node> {
    let mut tokens = TokenStream::new(tokens);
    let mut operands: Vec<Subtree> = Vec::new();

    while let Some(SpannedToken { token, position }) = tokens.next() {
        match token {
            Token::Operand(name) => operands.push(Subtree::operand(name, position)),
            Token::Operator(operator) => {
                let operand_two = operands.pop();
                let operand_one = operands.pop();

                let (left, right) = match (operand_one, operand_two) {
                    (Some(left), Some(right)) => (left, right),
                    _ => return Err(ConversionError::StackUnderflow { position, operator }),
                };
                operands.push(Subtree::join(operator, position, left, right, max_depth)?);
            }
            // Postfix order alone determines the structure.
            Token::LeftParentheses | Token::RightParentheses => {}
        }
    }

    let mut remaining = operands.into_iter();
    match (remaining.next(), remaining.next()) {
        (Some(root), None) => Ok(root.node),
        (Some(_), Some(leftover)) => Err(ConversionError::TrailingTokens {
            position: leftover.start,
        }),
        (None, _) => Err(ConversionError::IncompleteExpression {
            position: tokens.end(),
        }),
    }
}

use crate::converter::error::{ConversionError, Result};
use crate::converter::parser::{Subtree, TokenStream};
use crate::converter::syntax::expression_tree::Node;
use crate::converter::token::{SpannedToken, Token};

/// Parses tokens written in prefix notation.
///
/// Each operator takes the next two complete expressions as its left and right operands.
/// Parentheses carry no meaning in prefix notation and are skipped.
pub fn parse_prefix(tokens: Vec<SpannedToken>, max_depth: usize) -> Result<Node> {
    let mut tokens = TokenStream::new(tokens);
    let expression = parse_expression(&mut tokens, 0, max_depth)?;

    match tokens.next_skipping_parentheses() {
        None => Ok(expression.node),
        Some(SpannedToken { position, .. }) => Err(ConversionError::TrailingTokens { position }),
    }
}

fn parse_expression(tokens: &mut TokenStream, depth: usize, max_depth: usize) -> Result<Subtree> {
    let (operator, position) = loop {
        match tokens.next() {
            None => {
                return Err(ConversionError::IncompleteExpression {
                    position: tokens.end(),
                })
            }
            Some(SpannedToken {
                token: Token::Operand(name),
                position,
            }) => return Ok(Subtree::operand(name, position)),
            Some(SpannedToken {
                token: Token::Operator(operator),
                position,
            }) => break (operator, position),
            Some(_) => continue,
        }
    };

    if depth >= max_depth {
        return Err(ConversionError::TooDeeplyNested {
            position,
            limit: max_depth,
        });
    }
    let left = parse_expression(tokens, depth + 1, max_depth)?;
    let right = parse_expression(tokens, depth + 1, max_depth)?;
    Subtree::join(operator, position, left, right, max_depth)
}

use crate::converter::error::{ConversionError, Result};
use crate::converter::token::{SpannedToken, Token};

/// Splits the given text into tokens, skipping whitespace.
///
/// # Arguments
///
/// * `expression`: The text to tokenize, in any notation.
///
/// returns: The tokens in the order they appear, each tagged with its character offset.
///
/// # Examples
///
/// ```
/// use notation_converter::converter::lexer::tokenize;
/// use notation_converter::converter::token::Token;
/// # use notation_converter::converter::error::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("a + b")?;
/// assert_eq!(tokens[2].token, Token::Operand('b'));
/// assert_eq!(tokens[2].position, 4);
/// # Ok(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<SpannedToken>> {
    expression
        .chars()
        .enumerate()
        .filter(|(_, character)| !character.is_whitespace())
        .map(|(position, character)| {
            Token::try_from(character)
                .map(|token| SpannedToken::new(token, position))
                .map_err(|character| ConversionError::InvalidCharacter {
                    position,
                    character,
                })
        })
        .collect()
}

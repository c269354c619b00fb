mod infix;
mod postfix;
mod prefix;

pub use infix::parse_infix;
pub use postfix::parse_postfix;
pub use prefix::parse_prefix;

use crate::converter::error::{ConversionError, Result};
use crate::converter::operator::BinaryOperator;
use crate::converter::syntax::expression_tree::Node;
use crate::converter::token::SpannedToken;
use crate::converter::Notation;
use std::iter::Peekable;
use std::vec::IntoIter;

/// Parses the given tokens into an equivalent expression tree,
/// which is easier to manipulate than the original tokens.
///
/// # Arguments
///
/// * `tokens`: The tokens to parse.
/// * `notation`: The notation the tokens are written in.
/// * `max_depth`: The deepest nesting accepted before giving up.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// # use notation_converter::converter::error::Result;
/// # fn main() -> Result<()> {
/// use notation_converter::converter::lexer::tokenize;
/// use notation_converter::converter::parser::parse;
/// use notation_converter::converter::{Notation, DEFAULT_MAX_DEPTH};
///
/// let tokens = tokenize("AB+C*")?;
/// let tree = parse(tokens, Notation::Postfix, DEFAULT_MAX_DEPTH)?;
/// let regenerated_tokens = tree.to_prefix();
/// # Ok(()) }
/// ```
pub fn parse(tokens: Vec<SpannedToken>, notation: Notation, max_depth: usize) -> Result<Node> {
    match notation {
        Notation::Infix => parse_infix(tokens, max_depth),
        Notation::Prefix => parse_prefix(tokens, max_depth),
        Notation::Postfix => parse_postfix(tokens, max_depth),
    }
}

/// A cursor over tokens that remembers where the input ends.
pub(crate) struct TokenStream {
    tokens: Peekable<IntoIter<SpannedToken>>,
    end: usize,
}

impl TokenStream {
    pub(crate) fn new(tokens: Vec<SpannedToken>) -> TokenStream {
        let end = tokens.last().map_or(0, |last| last.position + 1);
        TokenStream {
            tokens: tokens.into_iter().peekable(),
            end,
        }
    }

    pub(crate) fn next(&mut self) -> Option<SpannedToken> {
        self.tokens.next()
    }

    pub(crate) fn peek(&mut self) -> Option<&SpannedToken> {
        self.tokens.peek()
    }

    /// Like `next`, but parentheses are passed over.
    pub(crate) fn next_skipping_parentheses(&mut self) -> Option<SpannedToken> {
        self.tokens.find(|spanned| !spanned.token.is_parenthesis())
    }

    /// The position just past the last token.
    pub(crate) fn end(&self) -> usize {
        self.end
    }
}

/// A partially built tree, with the bookkeeping needed to bound its height.
#[derive(Debug)]
pub(crate) struct Subtree {
    pub(crate) node: Node,
    pub(crate) height: usize,
    pub(crate) start: usize,
}

impl Subtree {
    pub(crate) fn operand(name: char, position: usize) -> Subtree {
        Subtree {
            node: Node::new_operand(name),
            height: 0,
            start: position,
        }
    }

    /// Combines two subtrees under `operator`, which was read at `position`.
    pub(crate) fn join(
        operator: BinaryOperator,
        position: usize,
        left: Subtree,
        right: Subtree,
        max_depth: usize,
    ) -> Result<Subtree> {
        let height = 1 + left.height.max(right.height);
        if height > max_depth {
            return Err(ConversionError::TooDeeplyNested {
                position,
                limit: max_depth,
            });
        }
        Ok(Subtree {
            start: left.start.min(position),
            node: Node::new_binary_operation(operator, left.node, right.node),
            height,
        })
    }
}

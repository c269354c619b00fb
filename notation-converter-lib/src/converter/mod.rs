pub mod emitter;
pub mod error;
pub mod lexer;
mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::converter::emitter::{emit_infix, emit_postfix, emit_prefix, Parenthesization};
use crate::converter::error::{ParseNotationError, Result};
use crate::converter::syntax::expression_tree::Node;
use log::{debug, trace};
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

pub use crate::converter::operator::BinaryOperator;

/// The deepest nesting accepted by default, counted in operations or parentheses.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// A way of writing an expression as a flat sequence of tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Operators between their operands, e.g. `a + b`.
    Infix,
    /// Operators before their operands, e.g. `+ a b`.
    Prefix,
    /// Operators after their operands, e.g. `a b +`.
    Postfix,
}

impl Notation {
    pub const ALL: [Notation; 3] = [Notation::Infix, Notation::Prefix, Notation::Postfix];
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Infix => write!(f, "infix"),
            Notation::Prefix => write!(f, "prefix"),
            Notation::Postfix => write!(f, "postfix"),
        }
    }
}

impl FromStr for Notation {
    type Err = ParseNotationError;

    fn from_str(input: &str) -> Result<Notation, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "infix" => Ok(Notation::Infix),
            "prefix" => Ok(Notation::Prefix),
            "postfix" => Ok(Notation::Postfix),
            _ => Err(ParseNotationError::UnknownNotation(input.to_string())),
        }
    }
}

/// Tunes how a conversion parses and renders.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    pub parenthesization: Parenthesization,
    pub max_depth: usize,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        ConversionOptions {
            parenthesization: Parenthesization::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Rewrites the given expression from one notation into another.
///
/// # Arguments
///
/// * `expression`: A text expression written in the `from` notation.
/// * `from`: The notation `expression` is written in.
/// * `to`: The notation to rewrite it into.
///
/// returns: The same expression, in text, in the `to` notation.
///
/// # Examples
///
/// ```
/// use notation_converter::converter::{convert, Notation};
/// # use notation_converter::converter::error::Result;
///
/// # fn main() -> Result<()> {
/// let postfix = convert("A + B * C", Notation::Infix, Notation::Postfix)?;
/// assert_eq!(postfix, "ABC*+");
/// # Ok(()) }
/// ```
pub fn convert(expression: &str, from: Notation, to: Notation) -> Result<String> {
    convert_with_options(expression, from, to, &ConversionOptions::default())
}

/// Like [`convert`], but with explicit parenthesization and nesting limit.
///
/// Converting into the same notation still parses and regenerates the expression,
/// which yields its canonical form.
pub fn convert_with_options(
    expression: &str,
    from: Notation,
    to: Notation,
    options: &ConversionOptions,
) -> Result<String> {
    debug!("Converting {:?} from {} to {}", expression, from, to);
    let tree = parse(expression, from, options)?;
    let converted = emit(&tree, to, options);
    debug!("Converted {:?} into {:?}", expression, converted);
    Ok(converted)
}

/// Converts the given input string into an equivalent expression tree,
/// which is easier to manipulate than the original string.
///
/// # Examples
///
/// ```
/// use notation_converter::converter::{parse, ConversionOptions, Notation};
/// # use notation_converter::converter::error::Result;
///
/// # fn main() -> Result<()> {
/// let options = ConversionOptions::default();
/// let from_infix = parse("(a - b) / c", Notation::Infix, &options)?;
/// let from_prefix = parse("/-abc", Notation::Prefix, &options)?;
/// assert_eq!(from_infix, from_prefix);
/// # Ok(()) }
/// ```
pub fn parse(expression: &str, notation: Notation, options: &ConversionOptions) -> Result<Node> {
    let tokens = lexer::tokenize(expression)?;
    trace!("Tokens: {:?}", tokens);
    let tree = parser::parse(tokens, notation, options.max_depth)?;
    trace!("Parsed tree:\n{}", tree);
    Ok(tree)
}

/// Renders the given tree in the given notation. Never fails on a well-formed tree.
pub fn emit(tree: &Node, notation: Notation, options: &ConversionOptions) -> String {
    debug_assert!(tree.is_well_formed());
    match notation {
        Notation::Infix => emit_infix(tree, options.parenthesization),
        Notation::Prefix => emit_prefix(tree),
        Notation::Postfix => emit_postfix(tree),
    }
}

pub fn infix_to_postfix(expression: &str) -> Result<String> {
    convert(expression, Notation::Infix, Notation::Postfix)
}

pub fn infix_to_prefix(expression: &str) -> Result<String> {
    convert(expression, Notation::Infix, Notation::Prefix)
}

pub fn prefix_to_infix(expression: &str) -> Result<String> {
    convert(expression, Notation::Prefix, Notation::Infix)
}

pub fn prefix_to_postfix(expression: &str) -> Result<String> {
    convert(expression, Notation::Prefix, Notation::Postfix)
}

pub fn postfix_to_infix(expression: &str) -> Result<String> {
    convert(expression, Notation::Postfix, Notation::Infix)
}

pub fn postfix_to_prefix(expression: &str) -> Result<String> {
    convert(expression, Notation::Postfix, Notation::Prefix)
}

#[cfg(test)]
mod converter_tests {
    use super::*;
    use crate::converter::error::ConversionError;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    const MINIMAL: ConversionOptions = ConversionOptions {
        parenthesization: Parenthesization::Minimal,
        max_depth: DEFAULT_MAX_DEPTH,
    };

    #[test]
    fn precedence_is_preserved() {
        assert_eq!(infix_to_prefix("A+B*C").unwrap(), "+A*BC");
        assert_eq!(infix_to_postfix("A+B*C").unwrap(), "ABC*+");
    }

    #[test]
    fn explicit_grouping_is_preserved() {
        assert_eq!(infix_to_postfix("(A+B)*C").unwrap(), "AB+C*");
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        assert_eq!(infix_to_prefix("A-B-C").unwrap(), "--ABC");
    }

    #[test]
    fn prefix_converts_to_equivalent_infix() {
        let options = ConversionOptions::default();
        let infix = prefix_to_infix("+A*BC").unwrap();

        assert_eq!(infix, "A+(B*C)");
        assert_eq!(
            parse(&infix, Notation::Infix, &options).unwrap(),
            parse("A+B*C", Notation::Infix, &options).unwrap()
        );
    }

    #[test]
    fn postfix_converts_to_prefix_and_back() {
        assert_eq!(postfix_to_prefix("AB+CD-*").unwrap(), "*+AB-CD");
        assert_eq!(prefix_to_postfix("*+AB-CD").unwrap(), "AB+CD-*");
        assert_eq!(postfix_to_infix("AB+CD-*").unwrap(), "(A+B)*(C-D)");
    }

    #[test]
    fn same_notation_still_canonicalizes() {
        assert_eq!(
            convert(" ( (a) ) + ((b) * c) ", Notation::Infix, Notation::Infix).unwrap(),
            "a+(b*c)"
        );
        assert_eq!(
            convert("(+ a b)", Notation::Prefix, Notation::Prefix).unwrap(),
            "+ab"
        );
    }

    #[test]
    fn minimal_parenthesization_strips_redundant_parentheses() {
        let redundant_expression = "a + ((b) * ((c - d)) / (e))";
        let expected_expression = "a+b*(c-d)/e";

        let converted =
            convert_with_options(redundant_expression, Notation::Infix, Notation::Infix, &MINIMAL)
                .unwrap();

        assert_eq!(converted, expected_expression)
    }

    #[parameterized(
    expression = {
    "A+B",
    "A+B*C",
    "(A+B)*C",
    "A-B-C",
    "A-(B-C)",
    "A/(B*C)",
    "a*(b+c)/d-e",
    "((a+b)-(c*d))/(e-f)",
    },
    expected_postfix = {
    "AB+",
    "ABC*+",
    "AB+C*",
    "AB-C-",
    "ABC--",
    "ABC*/",
    "abc+*d/e-",
    "ab+cd*-ef-/",
    }
    )]
    fn infix_converts_to_expected_postfix(expression: &str, expected_postfix: &str) {
        use pretty_assertions::assert_eq;
        assert_eq!(infix_to_postfix(expression).unwrap(), expected_postfix);
    }

    #[parameterized(
    expression = {
    "A",
    "A+B*C",
    "(A+B)*C",
    "A-B-C",
    "A-(B-C)",
    "a*(b+c)/d-e",
    },
    expected_prefix = {
    "A",
    "+A*BC",
    "*+ABC",
    "--ABC",
    "-A-BC",
    "-/*a+bcde",
    }
    )]
    fn infix_converts_to_expected_prefix(expression: &str, expected_prefix: &str) {
        use pretty_assertions::assert_eq;
        assert_eq!(infix_to_prefix(expression).unwrap(), expected_prefix);
    }

    #[parameterized(
    expression = {
    "A+B*C",
    "(A+B)*C",
    "A-B-C",
    "A-(B-C)",
    "a*(b+c)/d-e",
    "((a+b)-(c*d))/(e-f)",
    },
    expected_infix = {
    "A+B*C",
    "(A+B)*C",
    "A-B-C",
    "A-(B-C)",
    "a*(b+c)/d-e",
    "(a+b-c*d)/(e-f)",
    }
    )]
    fn minimal_infix_regenerates_expected_text(expression: &str, expected_infix: &str) {
        use pretty_assertions::assert_eq;
        let converted =
            convert_with_options(expression, Notation::Infix, Notation::Infix, &MINIMAL).unwrap();

        assert_eq!(converted, expected_infix);
    }

    #[parameterized(
    expression = {
    "A+B*C",
    "(A+B)*(C-D)/E",
    "a-b-c-d",
    "a/(b/(c/d))",
    "x*y+z*(w-v)",
    }
    )]
    fn every_round_trip_rebuilds_the_same_tree(expression: &str) {
        use pretty_assertions::assert_eq;
        for options in [ConversionOptions::default(), MINIMAL] {
            let original = parse(expression, Notation::Infix, &options).unwrap();
            for notation in Notation::ALL {
                let text = emit(&original, notation, &options);
                let reparsed = parse(&text, notation, &options).unwrap();
                assert_eq!(reparsed, original, "via {} text {:?}", notation, text);

                let back =
                    convert_with_options(&text, notation, Notation::Infix, &options).unwrap();
                assert_eq!(back, emit(&original, Notation::Infix, &options));
            }
        }
    }

    #[parameterized(
    expression = {
    "A+B*C",
    "((a))",
    "a-(b-c)/d",
    "(a*b)*(c*d)",
    }
    )]
    fn infix_canonicalization_is_idempotent(expression: &str) {
        use pretty_assertions::assert_eq;
        for options in [ConversionOptions::default(), MINIMAL] {
            let once = convert_with_options(expression, Notation::Infix, Notation::Infix, &options)
                .unwrap();
            let twice =
                convert_with_options(&once, Notation::Infix, Notation::Infix, &options).unwrap();
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn unbalanced_infix_returns_err() {
        assert_eq!(
            infix_to_postfix("(A+B").unwrap_err(),
            ConversionError::UnbalancedParenthesis { position: 0 }
        );
    }

    #[test]
    fn missing_operand_returns_incomplete_expression() {
        assert!(matches!(
            infix_to_postfix("A+").unwrap_err(),
            ConversionError::IncompleteExpression { .. }
        ));
    }

    #[test]
    fn uncombined_postfix_leaves_return_trailing_tokens() {
        assert!(matches!(
            postfix_to_infix("AB").unwrap_err(),
            ConversionError::TrailingTokens { .. }
        ));
    }

    #[test]
    fn invalid_character_fails_in_every_notation() {
        for notation in Notation::ALL {
            assert_eq!(
                convert("a+1", notation, Notation::Infix).unwrap_err(),
                ConversionError::InvalidCharacter {
                    position: 2,
                    character: '1',
                }
            );
        }
    }

    #[test]
    fn adversarial_nesting_fails_fast() {
        let expression = format!("{}a{}", "(".repeat(10_000), ")".repeat(10_000));

        assert!(matches!(
            infix_to_postfix(&expression).unwrap_err(),
            ConversionError::TooDeeplyNested {
                limit: DEFAULT_MAX_DEPTH,
                ..
            }
        ));
    }

    #[test]
    fn long_prefix_chain_fails_fast() {
        let expression = format!("{}a", "+a".repeat(10_000));

        assert!(matches!(
            prefix_to_postfix(&expression).unwrap_err(),
            ConversionError::TooDeeplyNested { .. }
        ));
    }

    #[test]
    fn custom_depth_limit_is_honored() {
        let options = ConversionOptions {
            max_depth: 1,
            ..ConversionOptions::default()
        };

        assert_eq!(
            convert_with_options("ab+", Notation::Postfix, Notation::Infix, &options).unwrap(),
            "a+b"
        );
        assert!(
            convert_with_options("ab+c+", Notation::Postfix, Notation::Infix, &options).is_err()
        );
    }

    #[test]
    fn notation_parses_case_insensitively() {
        assert_eq!("Infix".parse::<Notation>(), Ok(Notation::Infix));
        assert_eq!("PREFIX".parse::<Notation>(), Ok(Notation::Prefix));
        assert_eq!("postfix".parse::<Notation>(), Ok(Notation::Postfix));
        assert_eq!(
            "reverse-polish".parse::<Notation>(),
            Err(ParseNotationError::UnknownNotation("reverse-polish".into()))
        );
    }

    #[test]
    fn notation_display_parses_back() {
        for notation in Notation::ALL {
            assert_eq!(notation.to_string().parse::<Notation>(), Ok(notation));
        }
    }
}

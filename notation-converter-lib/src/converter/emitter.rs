use crate::converter::operator::BinaryOperator;
use crate::converter::syntax::expression_tree::Node;
use crate::converter::syntax::syntax_visitor::{walk_binary_operation, SyntaxVisitor};
use crate::converter::token::Token;
use itertools::Itertools;

/// How many parentheses infix output carries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Parenthesization {
    /// Every operation nested inside another operation is wrapped, e.g. `a+(b*c)`.
    #[default]
    Full,
    /// Only the parentheses needed to rebuild the same tree, e.g. `a+b*c`.
    Minimal,
}

#[derive(Copy, Clone)]
enum Side {
    Left,
    Right,
}

impl Node {
    pub fn to_infix(&self, parenthesization: Parenthesization) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.build_infix(parenthesization, &mut tokens);
        tokens
    }

    pub fn to_prefix(&self) -> Vec<Token> {
        let mut visitor = PrefixVisitor { tokens: vec![] };
        self.accept(&mut visitor);
        visitor.tokens
    }

    pub fn to_postfix(&self) -> Vec<Token> {
        let mut visitor = PostfixVisitor { tokens: vec![] };
        self.accept(&mut visitor);
        visitor.tokens
    }

    fn build_infix(&self, parenthesization: Parenthesization, tokens: &mut Vec<Token>) {
        match self {
            Node::Operand(name) => tokens.push(Token::Operand(*name)),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => {
                parenthesize_if(
                    tokens,
                    needs_parentheses(parenthesization, operator, left_operand, Side::Left),
                    |tokens| left_operand.build_infix(parenthesization, tokens),
                );
                tokens.push(operator.token());
                parenthesize_if(
                    tokens,
                    needs_parentheses(parenthesization, operator, right_operand, Side::Right),
                    |tokens| right_operand.build_infix(parenthesization, tokens),
                );
            }
        }
    }
}

fn needs_parentheses(
    parenthesization: Parenthesization,
    parent_operator: &BinaryOperator,
    child: &Node,
    side: Side,
) -> bool {
    let child_operator = match child.as_binary_operator() {
        Some(operator) => operator,
        None => return false,
    };

    match (parenthesization, side) {
        (Parenthesization::Full, _) => true,
        // When a child operator has lower precedence, it and its operands need
        // to be wrapped in parentheses.
        (Parenthesization::Minimal, Side::Left) => parent_operator.precedence_gt(&child_operator),
        // Operators are left-associative, so an equal-precedence child on the right
        // must keep its parentheses too.
        (Parenthesization::Minimal, Side::Right) => parent_operator.precedence_ge(&child_operator),
    }
}

fn parenthesize_if(
    tokens: &mut Vec<Token>,
    predicate: bool,
    build_interior: impl FnOnce(&mut Vec<Token>),
) {
    if predicate {
        tokens.push(Token::LeftParentheses);
    }

    build_interior(tokens);

    if predicate {
        tokens.push(Token::RightParentheses);
    }
}

struct PrefixVisitor {
    tokens: Vec<Token>,
}

impl SyntaxVisitor for PrefixVisitor {
    fn visit_operand(&mut self, name: char) {
        self.tokens.push(Token::Operand(name));
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.tokens.push(operator.token());
        walk_binary_operation(self, left_operand, right_operand);
    }
}

struct PostfixVisitor {
    tokens: Vec<Token>,
}

impl SyntaxVisitor for PostfixVisitor {
    fn visit_operand(&mut self, name: char) {
        self.tokens.push(Token::Operand(name));
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        walk_binary_operation(self, left_operand, right_operand);
        self.tokens.push(operator.token());
    }
}

/// Renders the given tokens back into text, without any added whitespace.
///
/// # Examples
///
/// ```
/// use notation_converter::converter::emitter::tokens_to_string;
/// use notation_converter::converter::token::Token;
///
/// let tokens = vec![Token::Operand('x'), Token::Operand('y')];
/// assert_eq!(tokens_to_string(&tokens), "xy");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join("")
}

pub fn emit_infix(tree: &Node, parenthesization: Parenthesization) -> String {
    tokens_to_string(&tree.to_infix(parenthesization))
}

pub fn emit_prefix(tree: &Node) -> String {
    tokens_to_string(&tree.to_prefix())
}

pub fn emit_postfix(tree: &Node) -> String {
    tokens_to_string(&tree.to_postfix())
}

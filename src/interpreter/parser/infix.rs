use std::iter::Peekable;

use crate::{
    ast::{Expr, InfixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Precedence, parse_expression},
            utils::{expect_token, parse_comma_separated, unexpected},
        },
    },
};

/// Extends `left` with the infix form introduced by the next token.
///
/// Handles:
/// - binary operators, whose right operand is parsed at the operator's own
///   precedence (left-associative),
/// - assignment `name = value`, whose right side is parsed at the lowest
///   precedence (right-associative),
/// - calls `left(args)`,
/// - indexing `left[index]`.
///
/// # Errors
/// Assigning to anything but an identifier produces
/// [`ParseError::InvalidAssignmentTarget`].
pub(crate) fn parse_infix<I>(tokens: &mut Peekable<I>, left: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = (Token, usize)>
{
    let Some((token, line)) = tokens.next() else {
        return Err(unexpected("an operator", None));
    };

    match token {
        Token::LParen => {
            let arguments = parse_comma_separated(tokens,
                                                  |t| parse_expression(t, Precedence::Lowest),
                                                  &Token::RParen)?;
            Ok(Expr::Call { callee: Box::new(left),
                            arguments,
                            line })
        },
        Token::LBracket => {
            let index = parse_expression(tokens, Precedence::Lowest)?;
            expect_token(tokens, &Token::RBracket)?;
            Ok(Expr::Index { target: Box::new(left),
                             index: Box::new(index),
                             line })
        },
        Token::Assign => match left {
            Expr::Identifier { name, .. } => {
                let value = parse_expression(tokens, Precedence::Lowest)?;
                Ok(Expr::Assign { name,
                                  value: Box::new(value),
                                  line })
            },
            other => Err(ParseError::InvalidAssignmentTarget { target: other.to_string(),
                                                               line }),
        },
        other => {
            let Some(op) = token_to_infix_operator(&other) else {
                return Err(unexpected("an operator", Some(&(other, line))));
            };
            let right = parse_expression(tokens, Precedence::of(&other))?;
            Ok(Expr::Infix { left: Box::new(left),
                             op,
                             right: Box::new(right),
                             line })
        },
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(InfixOperator)` for arithmetic, comparison and logical
/// operator tokens, and `None` for all other tokens (including `=`, `(` and
/// `[`, which have dedicated infix rules).
///
/// # Example
/// ```
/// use squid::{
///     ast::InfixOperator,
///     interpreter::{lexer::Token, parser::infix::token_to_infix_operator},
/// };
///
/// assert_eq!(token_to_infix_operator(&Token::Plus), Some(InfixOperator::Add));
/// assert_eq!(token_to_infix_operator(&Token::AndAnd), Some(InfixOperator::And));
/// assert_eq!(token_to_infix_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Star => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::EqualEqual => Some(InfixOperator::Equal),
        Token::BangEqual => Some(InfixOperator::NotEqual),
        Token::Less => Some(InfixOperator::Less),
        Token::Greater => Some(InfixOperator::Greater),
        Token::LessEqual => Some(InfixOperator::LessEqual),
        Token::GreaterEqual => Some(InfixOperator::GreaterEqual),
        Token::AndAnd => Some(InfixOperator::And),
        Token::OrOr => Some(InfixOperator::Or),
        _ => None,
    }
}

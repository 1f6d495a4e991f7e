use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Precedence, parse_expression},
            utils::{expect_token, parse_identifier, skip_semicolon},
        },
    },
};

/// Parses a single statement.
/// A statement may be one of:
/// - a `let` binding.
/// - a `return` statement.
/// - an expression used as a statement.
///
/// A trailing `;` is consumed when present.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = (Token, usize)>
{
    let statement = match tokens.peek() {
        Some((Token::Let, _)) => parse_let(tokens)?,
        Some((Token::Return, _)) => parse_return(tokens)?,
        _ => {
            let line = tokens.peek().map_or(0, |(_, l)| *l);
            let expr = parse_expression(tokens, Precedence::Lowest)?;

            Statement::Expression { expr, line }
        },
    };

    skip_semicolon(tokens);
    Ok(statement)
}

/// Parses `let <identifier> = <expression>`.
fn parse_let<I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = (Token, usize)>
{
    let line = expect_token(tokens, &Token::Let)?;
    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Assign)?;
    let value = parse_expression(tokens, Precedence::Lowest)?;

    Ok(Statement::Let { name, value, line })
}

/// Parses `return <expression>` or a bare `return`.
///
/// The value is omitted when the keyword is directly followed by `;`, `}` or
/// end of input.
fn parse_return<I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = (Token, usize)>
{
    let line = expect_token(tokens, &Token::Return)?;

    let value = match tokens.peek() {
        None | Some((Token::Semicolon | Token::RBrace | Token::Eof, _)) => None,
        _ => Some(parse_expression(tokens, Precedence::Lowest)?),
    };

    Ok(Statement::Return { value, line })
}

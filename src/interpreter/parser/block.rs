use std::iter::Peekable;

use crate::{
    ast::Block,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect_token, unexpected},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Stray `;` tokens between
/// statements are ignored. Parsing continues until a closing `}` token is
/// encountered.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The parsed [`Block`].
///
/// # Errors
/// Fails if the opening brace is missing, a statement fails to parse, or the
/// input ends before the closing brace.
pub fn parse_block<I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = (Token, usize)>
{
    let line = expect_token(tokens, &Token::LBrace)?;
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            None | Some((Token::Eof, _)) => {
                return Err(unexpected(Token::RBrace.to_string(), tokens.peek()));
            },
            Some((Token::Semicolon, _)) => {
                tokens.next();
            },
            _ => statements.push(parse_statement(tokens)?),
        }
    }

    Ok(Block { statements, line })
}

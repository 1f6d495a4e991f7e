use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Builds an `UnexpectedToken` error for whatever the stream currently
/// offers.
///
/// A drained iterator is reported as end of input on line 0.
pub(in crate::interpreter::parser) fn unexpected(expected: impl Into<String>,
                                                 found: Option<&(Token, usize)>)
                                                 -> ParseError {
    let (found, line) = found.map_or_else(|| (Token::Eof.to_string(), 0),
                                          |(token, line)| (token.to_string(), *line));

    ParseError::UnexpectedToken { expected: expected.into(),
                                  found,
                                  line }
}

/// Consumes the next token if it equals `expected`.
///
/// The token is left in place on mismatch so that error recovery can decide
/// how far to skip.
///
/// # Returns
/// The line of the consumed token.
pub(in crate::interpreter::parser) fn expect_token<I>(tokens: &mut Peekable<I>,
                                                      expected: &Token)
                                                      -> ParseResult<usize>
    where I: Iterator<Item = (Token, usize)>
{
    match tokens.peek() {
        Some((token, line)) if token == expected => {
            let line = *line;
            tokens.next();
            Ok(line)
        },
        found => Err(unexpected(expected.to_string(), found)),
    }
}

/// Skips one `;` if it is the next token. Statement terminators are
/// optional.
pub(in crate::interpreter::parser) fn skip_semicolon<I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = (Token, usize)>
{
    if let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by array literals, hash literals, parameter lists
/// and call arguments. It repeatedly calls `parse_item` to parse one element,
/// expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// opening token must already be consumed.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            found => return Err(unexpected(format!("',' or {closing}"), found)),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier; the token
/// is not consumed in that case.
pub(in crate::interpreter::parser) fn parse_identifier<I>(tokens: &mut Peekable<I>)
                                                          -> ParseResult<String>
    where I: Iterator<Item = (Token, usize)>
{
    if let Some((Token::Ident(_), _)) = tokens.peek()
       && let Some((Token::Ident(name), _)) = tokens.next()
    {
        return Ok(name);
    }

    Err(unexpected("identifier", tokens.peek()))
}

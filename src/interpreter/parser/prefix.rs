use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Block, Expr, LiteralValue, PrefixOperator, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, Precedence, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier, unexpected},
        },
    },
};

/// Parses an expression that starts at the current token.
///
/// Dispatches on the leading token to the rule that owns it:
///
/// ```text
///     prefix := literal
///             | identifier
///             | ("!" | "-") expression
///             | "(" expression ")"
///             | "if" "(" expression ")" block ("else" (if | block))?
///             | "fn" "(" identifiers ")" block
///             | "[" expressions "]"
///             | "{" (expression ":" expression),* "}"
/// ```
/// # Errors
/// A token that cannot begin an expression produces
/// [`ParseError::NoPrefixRule`] and is left unconsumed. An illegal token is
/// consumed and reported as [`ParseError::IllegalToken`].
pub(crate) fn parse_prefix<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (Token, usize)>
{
    let Some((token, line)) = tokens.peek() else {
        return Err(ParseError::NoPrefixRule { found: Token::Eof.to_string(),
                                              line:  0, });
    };
    let line = *line;

    match token {
        Token::Int(_) | Token::Str(_) | Token::Bool(_) | Token::Null => parse_literal(tokens),
        Token::Ident(_) => {
            let name = parse_identifier(tokens)?;
            Ok(Expr::Identifier { name, line })
        },
        Token::Bang | Token::Minus => parse_prefix_operator(tokens),
        Token::LParen => parse_grouping(tokens),
        Token::If => parse_if(tokens),
        Token::Function => parse_function_literal(tokens),
        Token::LBracket => parse_array_literal(tokens),
        Token::LBrace => parse_hash_literal(tokens),
        Token::Illegal(text) => {
            let error = ParseError::IllegalToken { text: text.clone(),
                                                   line };
            tokens.next();
            Err(error)
        },
        other => Err(ParseError::NoPrefixRule { found: other.to_string(),
                                                line }),
    }
}

/// Parses an integer, string, boolean or `null` literal.
///
/// # Errors
/// Integer literals that overflow `i64` produce
/// [`ParseError::InvalidInteger`].
fn parse_literal<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (Token, usize)>
{
    let value = match tokens.next() {
        Some((Token::Int(literal), line)) => match literal.parse::<i64>() {
            Ok(n) => (LiteralValue::Integer(n), line),
            Err(_) => return Err(ParseError::InvalidInteger { literal, line }),
        },
        Some((Token::Str(s), line)) => (LiteralValue::Str(s), line),
        Some((Token::Bool(b), line)) => (LiteralValue::Bool(b), line),
        Some((Token::Null, line)) => (LiteralValue::Null, line),
        found => return Err(unexpected("literal", found.as_ref())),
    };

    Ok(Expr::Literal { value: value.0,
                       line:  value.1, })
}

/// Parses `!operand` or `-operand`.
///
/// The operand is parsed at prefix precedence, so `-a * b` is `(-a) * b`
/// while `!-x` nests as `!(-x)`.
fn parse_prefix_operator<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (Token, usize)>
{
    let (op, line) = match tokens.next() {
        Some((Token::Bang, line)) => (PrefixOperator::Not, line),
        Some((Token::Minus, line)) => (PrefixOperator::Negate, line),
        found => return Err(unexpected("'!' or '-'", found.as_ref())),
    };
    let operand = parse_expression(tokens, Precedence::Prefix)?;

    Ok(Expr::Prefix { op,
                      operand: Box::new(operand),
                      line })
}

/// Parses `( expression )`. Grouping leaves no node of its own in the tree.
fn parse_grouping<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (Token, usize)>
{
    expect_token(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RParen)?;

    Ok(expr)
}

/// Parses an `if` expression with optional `else` and chained `else if`.
///
/// Syntax:
/// ```text
///     if (<condition>) { ... }
///     else if (<condition>) { ... }
///     else { ... }
/// ```
/// An `else if` is stored as an `else` block holding the nested `if` as its
/// only statement.
fn parse_if<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (Token, usize)>
{
    let line = expect_token(tokens, &Token::If)?;
    expect_token(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RParen)?;

    let consequence = parse_block(tokens)?;

    let alternative = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();

            match tokens.peek() {
                Some((Token::If, nested_line)) => {
                    let nested_line = *nested_line;
                    let nested = parse_if(tokens)?;
                    Some(Block { statements: vec![Statement::Expression { expr: nested,
                                                                          line: nested_line, }],
                                 line:       nested_line, })
                },
                _ => Some(parse_block(tokens)?),
            }
        },
        _ => None,
    };

    Ok(Expr::If { condition: Box::new(condition),
                  consequence,
                  alternative,
                  line })
}

/// Parses `fn(<params>) <block>`.
fn parse_function_literal<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (Token, usize)>
{
    let line = expect_token(tokens, &Token::Function)?;
    expect_token(tokens, &Token::LParen)?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
    let body = parse_block(tokens)?;

    Ok(Expr::Function { params,
                        body: Rc::new(body),
                        line })
}

/// Parses an array literal of the form `[ expr1, expr2, ..., exprN ]`.
fn parse_array_literal<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (Token, usize)>
{
    let line = expect_token(tokens, &Token::LBracket)?;
    let elements = parse_comma_separated(tokens,
                                         |t| parse_expression(t, Precedence::Lowest),
                                         &Token::RBracket)?;

    Ok(Expr::Array { elements, line })
}

/// Parses a hash literal of the form `{ key: value, ... }`.
///
/// Keys are arbitrary expressions here; whether they are usable as keys is
/// decided at evaluation time.
fn parse_hash_literal<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (Token, usize)>
{
    let line = expect_token(tokens, &Token::LBrace)?;
    let pairs = parse_comma_separated(tokens,
                                      |t| {
                                          let key = parse_expression(t, Precedence::Lowest)?;
                                          expect_token(t, &Token::Colon)?;
                                          let value = parse_expression(t, Precedence::Lowest)?;
                                          Ok((key, value))
                                      },
                                      &Token::RBrace)?;

    Ok(Expr::Hash { pairs, line })
}

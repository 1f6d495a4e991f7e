use std::{cell::Cell, iter::Peekable};

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{infix::parse_infix, prefix::parse_prefix, statement::parse_statement},
    },
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding power of infix tokens, from loosest to tightest.
///
/// The derived ordering is the precedence ordering: a later variant binds
/// more tightly than an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Tokens that never continue an expression.
    Lowest,
    /// `=`
    Assign,
    /// `||`
    Or,
    /// `&&`
    And,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`, `<=`, `>=`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// `!x`, `-x`
    Prefix,
    /// `f(x)`, `a[i]`
    Call,
}

impl Precedence {
    /// Left binding power of `token` when it follows a complete operand.
    ///
    /// # Example
    /// ```
    /// use squid::interpreter::{lexer::Token, parser::Precedence};
    ///
    /// assert!(Precedence::of(&Token::Star) > Precedence::of(&Token::Plus));
    /// assert_eq!(Precedence::of(&Token::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(token: &Token) -> Self {
        match token {
            Token::Assign => Self::Assign,
            Token::OrOr => Self::Or,
            Token::AndAnd => Self::And,
            Token::EqualEqual | Token::BangEqual => Self::Equals,
            Token::Less | Token::Greater | Token::LessEqual | Token::GreaterEqual => {
                Self::LessGreater
            },
            Token::Plus | Token::Minus => Self::Sum,
            Token::Star | Token::Slash => Self::Product,
            Token::LParen | Token::LBracket => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// Parses a whole program.
///
/// Statements are parsed until end of input. A statement that fails to parse
/// records its error and the parser skips ahead to the `;` that ends it at
/// the top level before continuing, so one mistake does not hide the ones
/// after it. A `;` inside an unfinished block does not end the skip.
///
/// # Parameters
/// - `tokens`: Token stream providing `(Token, line)` pairs. The stream may
///   either end or keep yielding [`Token::Eof`].
///
/// # Returns
/// The statements that parsed cleanly and every syntax error, in order.
pub fn parse_program<I>(tokens: I) -> (Program, Vec<ParseError>)
    where I: Iterator<Item = (Token, usize)>
{
    // Braces opened and not yet closed among the tokens pulled so far,
    // including a token held by `peek`.
    let open_braces = Cell::new(0_isize);
    let mut tokens = tokens.inspect(|(token, _)| {
                               open_braces.set(open_braces.get() + brace_delta(token));
                           })
                           .peekable();
    let mut program = Program::default();
    let mut errors = Vec::new();

    loop {
        match tokens.peek() {
            None | Some((Token::Eof, _)) => break,
            Some((Token::Semicolon, _)) => {
                tokens.next();
                continue;
            },
            // Every statement starts outside of any block.
            Some((token, _)) => open_braces.set(brace_delta(token)),
        }

        match parse_statement(&mut tokens) {
            Ok(statement) => program.statements.push(statement),
            Err(error) => {
                log::debug!("syntax error, skipping to next statement: {error}");
                errors.push(error);
                synchronize(&mut tokens, &open_braces);
            },
        }
    }

    (program, errors)
}

/// Skips tokens up to and including the next `;` outside of any block, or
/// up to end of input.
fn synchronize<I>(tokens: &mut Peekable<I>, open_braces: &Cell<isize>)
    where I: Iterator<Item = (Token, usize)>
{
    while let Some((token, _)) = tokens.peek() {
        let depth = open_braces.get() - brace_delta(token);
        match token {
            Token::Eof => break,
            Token::Semicolon if depth <= 0 => {
                tokens.next();
                break;
            },
            _ => {
                tokens.next();
            },
        }
    }
}

const fn brace_delta(token: &Token) -> isize {
    match token {
        Token::LBrace => 1,
        Token::RBrace => -1,
        _ => 0,
    }
}

/// Parses an expression whose operators bind more tightly than
/// `precedence`.
///
/// This is the Pratt driver: it parses one prefix form, then keeps folding
/// infix forms into the left operand while the next token binds more tightly
/// than the threshold. Passing the operator's own precedence for its right
/// operand makes binary operators left-associative.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
/// - `precedence`: Binding power of the operator to the left, or
///   [`Precedence::Lowest`] for a full expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<I>(tokens: &mut Peekable<I>, precedence: Precedence) -> ParseResult<Expr>
    where I: Iterator<Item = (Token, usize)>
{
    ensure_sufficient_stack(|| {
        let mut left = parse_prefix(tokens)?;

        while let Some((token, _)) = tokens.peek()
              && precedence < Precedence::of(token)
        {
            left = parse_infix(tokens, left)?;
        }

        Ok(left)
    })
}

use std::fmt;

use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// `Illegal` and `Eof` are never matched by the generated scanner; the
/// [`Lexer`] wrapper produces them for unrecognized input and for the end of
/// the source text.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`. The text is kept verbatim so that
    /// the parser can report literals that do not fit in 64 bits.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    /// String literal tokens, such as `"hello\n"`, with escapes resolved.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#, parse_string)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `null`
    #[token("null")]
    Null,
    /// `let`
    #[token("let")]
    Let,
    /// `return`
    #[token("return")]
    Return,
    /// `fn`
    #[token("fn")]
    Function,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```text
    /// /* Multi line comments. */
    /// ```
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    MultiLineComment,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// A character sequence no rule accepts.
    Illegal(String),
    /// End of input.
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(literal) => write!(f, "integer `{literal}`"),
            Self::Str(value) => write!(f, "string {value:?}"),
            Self::Bool(b) => write!(f, "`{b}`"),
            Self::Ident(name) => write!(f, "identifier `{name}`"),
            Self::Illegal(text) => write!(f, "illegal token `{text}`"),
            Self::Eof => write!(f, "end of input"),
            other => write!(f, "'{}'", other.symbol()),
        }
    }
}

impl Token {
    /// Source spelling of keywords, operators and delimiters.
    ///
    /// Tokens that carry text return an empty string.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Let => "let",
            Self::Return => "return",
            Self::Function => "fn",
            Self::If => "if",
            Self::Else => "else",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Bang => "!",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            _ => "",
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically resets or increments as newlines are processed.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Lazy token stream over a source string.
///
/// Yields `(Token, line)` pairs. Input the scanner cannot match becomes a
/// [`Token::Illegal`] instead of stopping the stream, and once the source is
/// exhausted every further call yields [`Token::Eof`], so the iterator never
/// returns `None`.
///
/// # Example
/// ```
/// use squid::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("let x = 5;");
///
/// assert_eq!(lexer.next(), Some((Token::Let, 1)));
/// assert_eq!(lexer.next(), Some((Token::Ident("x".into()), 1)));
/// assert_eq!(lexer.nth(3), Some((Token::Eof, 1)));
/// assert_eq!(lexer.next(), Some((Token::Eof, 1)));
/// ```
pub struct Lexer<'src> {
    source:   &'src str,
    inner:    logos::Lexer<'src, Token>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a token stream positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: Token::lexer_with_extras(source, LexerExtras::default()),
               finished: false }
    }

    /// Rewinds the stream to the first token of the source.
    pub fn reset(&mut self) {
        *self = Self::new(self.source);
    }

    /// Line of the most recently scanned token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.inner.extras.line
    }
}

impl Iterator for Lexer<'_> {
    type Item = (Token, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return Some((Token::Eof, self.line()));
        }

        match self.inner.next() {
            Some(Ok(token)) => Some((token, self.line())),
            Some(Err(())) => {
                let text = self.inner.slice().to_string();
                log::trace!("illegal input `{text}` on line {}", self.line());
                Some((Token::Illegal(text), self.line()))
            },
            None => {
                self.finished = true;
                Some((Token::Eof, self.line()))
            },
        }
    }
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"true"`.
/// - `Some(false)` if the slice is `"false"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Resolves the escapes of a quoted string literal.
///
/// Supported escapes are `\n`, `\t`, `\r`, `\"` and `\\`; any other escape
/// rejects the literal, which surfaces as an illegal token.
fn parse_string(lex: &logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];

    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next()? {
            'n' => value.push('\n'),
            't' => value.push('\t'),
            'r' => value.push('\r'),
            '"' => value.push('"'),
            '\\' => value.push('\\'),
            _ => return None,
        }
    }

    Some(value)
}

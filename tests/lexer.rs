use pretty_assertions::assert_eq;
use squid::interpreter::lexer::{Lexer, Token};

fn tokens(source: &str) -> Vec<Token> {
    Lexer::new(source).map(|(token, _)| token)
                      .take_while(|token| *token != Token::Eof)
                      .collect()
}

fn ident(name: &str) -> Token {
    Token::Ident(name.to_string())
}

#[test]
fn operators_and_delimiters() {
    assert_eq!(tokens("= + - * / ! == != < > <= >= && || , ; : ( ) { } [ ]"),
               vec![Token::Assign,
                    Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::Bang,
                    Token::EqualEqual,
                    Token::BangEqual,
                    Token::Less,
                    Token::Greater,
                    Token::LessEqual,
                    Token::GreaterEqual,
                    Token::AndAnd,
                    Token::OrOr,
                    Token::Comma,
                    Token::Semicolon,
                    Token::Colon,
                    Token::LParen,
                    Token::RParen,
                    Token::LBrace,
                    Token::RBrace,
                    Token::LBracket,
                    Token::RBracket]);
}

#[test]
fn two_character_operators_need_no_spaces() {
    assert_eq!(tokens("a==b!=!c"),
               vec![ident("a"),
                    Token::EqualEqual,
                    ident("b"),
                    Token::BangEqual,
                    Token::Bang,
                    ident("c")]);
}

#[test]
fn keywords_are_not_prefixes_of_identifiers() {
    assert_eq!(tokens("let letter fn fnord true trueish null nullable if else return"),
               vec![Token::Let,
                    ident("letter"),
                    Token::Function,
                    ident("fnord"),
                    Token::Bool(true),
                    ident("trueish"),
                    Token::Null,
                    ident("nullable"),
                    Token::If,
                    Token::Else,
                    Token::Return]);
}

#[test]
fn a_small_program() {
    let source = "let add = fn(x, y) { x + y; };\nlet result = add(5, 10);";

    assert_eq!(tokens(source),
               vec![Token::Let,
                    ident("add"),
                    Token::Assign,
                    Token::Function,
                    Token::LParen,
                    ident("x"),
                    Token::Comma,
                    ident("y"),
                    Token::RParen,
                    Token::LBrace,
                    ident("x"),
                    Token::Plus,
                    ident("y"),
                    Token::Semicolon,
                    Token::RBrace,
                    Token::Semicolon,
                    Token::Let,
                    ident("result"),
                    Token::Assign,
                    ident("add"),
                    Token::LParen,
                    Token::Int("5".to_string()),
                    Token::Comma,
                    Token::Int("10".to_string()),
                    Token::RParen,
                    Token::Semicolon]);
}

#[test]
fn string_escapes_are_resolved() {
    assert_eq!(tokens(r#""foo bar" "a\n\"b\"\\""#),
               vec![Token::Str("foo bar".to_string()), Token::Str("a\n\"b\"\\".to_string())]);
}

#[test]
fn comments_are_skipped_and_lines_are_counted() {
    let source = "1 // one\n/* two\nlines */ 2\n3";
    let lexed: Vec<_> = Lexer::new(source).take(4).collect();

    assert_eq!(lexed,
               vec![(Token::Int("1".to_string()), 1),
                    (Token::Int("2".to_string()), 3),
                    (Token::Int("3".to_string()), 4),
                    (Token::Eof, 4)]);
}

#[test]
fn unknown_characters_become_illegal_tokens() {
    assert_eq!(tokens("let @ = 1"),
               vec![Token::Let,
                    Token::Illegal("@".to_string()),
                    Token::Assign,
                    Token::Int("1".to_string())]);
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next(), Some((ident("x"), 1)));
    for _ in 0..3 {
        assert_eq!(lexer.next(), Some((Token::Eof, 1)));
    }
}

#[test]
fn reset_restarts_from_the_first_token() {
    let mut lexer = Lexer::new("a\nb");
    assert_eq!(lexer.nth(1), Some((ident("b"), 2)));

    lexer.reset();
    assert_eq!(lexer.next(), Some((ident("a"), 1)));
    assert_eq!(lexer.next(), Some((ident("b"), 2)));
}

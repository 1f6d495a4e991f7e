use pretty_assertions::assert_eq;
use squid::{
    ast::{Expr, LiteralValue, Statement},
    interpreter::parser::parse,
    run,
};

/// Parses `source`, failing the test on any syntax error, and renders the
/// canonical form.
fn canonical(source: &str) -> String {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected syntax errors in {source:?}: {errors:?}");
    program.to_string()
}

fn error_messages(source: &str) -> Vec<String> {
    parse(source).1.iter().map(ToString::to_string).collect()
}

#[test]
fn operator_precedence() {
    let cases = [("1 + 2 * 3", "(1 + (2 * 3));"),
                 ("-a * b", "((-a) * b);"),
                 ("!-a", "(!(-a));"),
                 ("a + b - c", "((a + b) - c);"),
                 ("a * b / c", "((a * b) / c);"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f);"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4));"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)));"),
                 ("a || b && c", "(a || (b && c));"),
                 ("a == b && c != d", "((a == b) && (c != d));"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4);"),
                 ("-(5 + 5)", "(-(5 + 5));"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d);"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)));"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d);"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])));")];

    for (source, expected) in cases {
        assert_eq!(canonical(source), expected, "source: {source}");
    }
}

#[test]
fn assignment_is_right_associative_and_loosest() {
    assert_eq!(canonical("x = y = 3"), "(x = (y = 3));");
    assert_eq!(canonical("x = a || b"), "(x = (a || b));");
}

#[test]
fn statements() {
    assert_eq!(canonical("let x = 5; return x; return; x"),
               "let x = 5;\nreturn x;\nreturn;\nx;");
}

#[test]
fn semicolons_are_optional() {
    assert_eq!(canonical("let a = 1\nlet b = 2\na + b"), "let a = 1;\nlet b = 2;\n(a + b);");
}

#[test]
fn if_else_chains() {
    assert_eq!(canonical("if (x < y) { x } else { y }"),
               "if ((x < y)) { x; } else { y; };");
    assert_eq!(canonical("if (a) { 1 } else if (b) { 2 } else { 3 }"),
               "if (a) { 1; } else { if (b) { 2; } else { 3; }; };");
}

#[test]
fn function_literals() {
    assert_eq!(canonical("fn(x, y) { return x + y; }"), "fn(x, y) { return (x + y); };");
    assert_eq!(canonical("fn() {}"), "fn() { };");

    let (program, _) = parse("fn(x, y, z) {}");
    let Statement::Expression { expr: Expr::Function { params, .. },
                                .. } = &program.statements[0]
    else {
        panic!("expected a function literal, got {program:?}");
    };
    assert_eq!(params, &["x", "y", "z"]);
}

#[test]
fn collection_literals() {
    assert_eq!(canonical("[]"), "[];");
    assert_eq!(canonical(r#"{"one": 1, true: 2 * 3, 4: "four"}"#),
               r#"{"one": 1, true: (2 * 3), 4: "four"};"#);
    assert_eq!(canonical("{}"), "{};");
}

#[test]
fn literal_values() {
    let (program, errors) = parse(r#"5; "hi\n"; true; null"#);
    assert!(errors.is_empty());

    let literals: Vec<_> = program.statements
                                  .iter()
                                  .map(|statement| match statement {
                                      Statement::Expression { expr: Expr::Literal { value, .. },
                                                              .. } => value.clone(),
                                      other => panic!("expected a literal, got {other:?}"),
                                  })
                                  .collect();

    assert_eq!(literals,
               vec![LiteralValue::Integer(5),
                    LiteralValue::Str("hi\n".to_string()),
                    LiteralValue::Bool(true),
                    LiteralValue::Null]);
}

#[test]
fn missing_assign_is_reported() {
    assert_eq!(error_messages("let x 5;"), vec!["line 1: expected '=', found integer `5`"]);
}

#[test]
fn errors_are_collected_across_statements() {
    assert_eq!(error_messages("let = 10;\nlet 838383;\nlet x = 1;"),
               vec!["line 1: expected identifier, found '='",
                    "line 2: expected identifier, found integer `838383`"]);
}

#[test]
fn recovery_keeps_later_statements() {
    let (program, errors) = parse("let x 5; let y = 2;");

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "let y = 2;");
}

#[test]
fn recovery_skips_the_rest_of_an_enclosing_block() {
    let (program, errors) = parse("let f = fn() { let x 5; x }; let y = 2;");

    assert_eq!(errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
               vec!["line 1: expected '=', found integer `5`"]);
    assert_eq!(program.to_string(), "let y = 2;");
}

#[test]
fn recovery_handles_nested_blocks() {
    let source = "let f = fn() { if (true) { let 1; } else { 2 } };
let g = fn() { 3 };
let a = );";

    assert_eq!(error_messages(source),
               vec!["line 1: expected identifier, found integer `1`",
                    "line 3: expected an expression, found ')'"]);
    assert_eq!(parse(source).0.to_string(), "let g = fn() { 3; };");
}

#[test]
fn unclosed_grouping() {
    assert_eq!(error_messages("(1 + 2"), vec!["line 1: expected ')', found end of input"]);
}

#[test]
fn unclosed_block() {
    assert_eq!(error_messages("fn(x) { x"), vec!["line 1: expected '}', found end of input"]);
}

#[test]
fn parameters_must_be_identifiers() {
    assert_eq!(error_messages("fn(1) { }"), vec!["line 1: expected identifier, found integer `1`"]);
}

#[test]
fn tokens_without_a_prefix_rule() {
    assert_eq!(error_messages("let x = );"), vec!["line 1: expected an expression, found ')'"]);
}

#[test]
fn invalid_assignment_target() {
    assert_eq!(error_messages("5 = 3;"), vec!["line 1: cannot assign to 5"]);
    assert_eq!(error_messages("a + b = 3;"), vec!["line 1: cannot assign to (a + b)"]);
}

#[test]
fn illegal_tokens_are_reported() {
    assert_eq!(error_messages("let x = @;"), vec!["line 1: illegal token `@`"]);
}

#[test]
fn oversized_integer_literal() {
    assert_eq!(error_messages("99999999999999999999"),
               vec!["line 1: could not parse `99999999999999999999` as integer"]);
}

#[test]
fn error_lines_follow_the_source() {
    let errors = parse("let a = 1;\n\nlet b 2;").1;

    assert_eq!(errors[0].line(), 3);
}

#[test]
fn canonical_form_round_trips() {
    let sources = ["let f = fn(a, b) { if (a > b) { return a - b; } else { b - a } }; f(3, 10)",
                   "let h = {\"k\": [1, 2 * 3, -4], 2: 10}; h[\"k\"][1] + h[4 - 2]",
                   "let s = \"tab\\there\"; s + \"!\"",
                   "let x = 1; x = x + 2 * 3; x",
                   "-(1 + 2) * 3 - -4",
                   "true && !false || null == null"];

    for source in sources {
        let rendered = canonical(source);
        assert_eq!(canonical(&rendered), rendered, "source: {source}");
        assert_eq!(run(&rendered), run(source), "source: {source}");
    }
}

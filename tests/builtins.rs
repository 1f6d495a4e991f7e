use std::{fs, io::Cursor, path::Path};

use pretty_assertions::assert_eq;
use squid::interpreter::{
    evaluator::{
        core::Interpreter,
        function::{
            console::{Io, SharedOutput},
            core::BUILTIN_FUNCTIONS,
        },
    },
    value::core::Value,
};
use tempfile::tempdir;

/// Runs `source` with `input` as standard input and returns the program's
/// value together with everything it wrote.
fn run_with_input(source: &str, input: &str) -> (Option<Value>, String) {
    let output = SharedOutput::default();
    let io = Io::new(Cursor::new(input.to_string()), output.clone());
    let mut interpreter = Interpreter::with_io(io);

    let value = interpreter.eval_source(source)
                           .unwrap_or_else(|e| panic!("Script failed to parse:\n{source}\n{e}"));
    (value, output.contents())
}

fn eval(source: &str) -> Option<Value> {
    run_with_input(source, "").0
}

fn assert_error(source: &str, message: &str) {
    match eval(source) {
        Some(Value::Error(found)) => {
            assert!(found.contains(message),
                    "source: {source}\nexpected error containing {message:?}, got {found:?}");
        },
        other => panic!("Script succeeded but was expected to fail:\n{source}\ngot {other:?}"),
    }
}

fn quoted(path: &Path) -> String {
    format!("\"{}\"", path.display())
}

#[test]
fn every_builtin_is_bound_globally() {
    let interpreter = Interpreter::with_io(Io::buffered(""));

    assert_eq!(BUILTIN_FUNCTIONS.len(), 20);
    for name in BUILTIN_FUNCTIONS {
        assert!(matches!(interpreter.globals.get(name), Some(Value::Builtin(b)) if b.name == *name),
                "{name} is not bound");
    }
}

#[test]
fn builtins_can_be_shadowed() {
    assert_eq!(eval("let cat = 5; cat"), Some(Value::Integer(5)));
}

#[test]
fn arity_is_checked_before_the_call() {
    assert_error("cat()", "line 1: cat: Wrong number of arguments. Got 0, expected 1");
    assert_error("add([1])", "add: Wrong number of arguments. Got 1, expected 2");
    assert_error("\n\nrand(1, 2, 3)", "line 3: rand: Wrong number of arguments. Got 3, expected 2");
}

#[test]
fn cat_counts_elements_and_characters() {
    assert_eq!(eval("cat([1, 2, 3])"), Some(Value::Integer(3)));
    assert_eq!(eval("cat(\"\")"), Some(Value::Integer(0)));
    assert_eq!(eval("cat(\"héllo\")"), Some(Value::Integer(5)));
    assert_error("cat(1)", "cat: Argument not supported, got integer");
}

#[test]
fn first_and_last() {
    assert_eq!(eval("first([1, 2, 3])"), Some(Value::Integer(1)));
    assert_eq!(eval("last([1, 2, 3])"), Some(Value::Integer(3)));
    assert_eq!(eval("first([])"), Some(Value::Null));
    assert_eq!(eval("last([])"), Some(Value::Null));
    assert_error("first(\"abc\")", "first: Argument must be array, got string");
    assert_error("last(1)", "last: Argument must be array, got integer");
}

#[test]
fn add_returns_a_new_array() {
    let value = eval("let a = [1]; let b = add(a, 2); [a, b]").map(|v| v.to_string());

    assert_eq!(value, Some("[[1], [1, 2]]".to_string()));
    assert_error("add(1, 2)", "add: Argument must be array, got integer");
}

#[test]
fn arraycontains_uses_value_equality() {
    assert_eq!(eval("arraycontains([1, \"a\", [2]], [2])"), Some(Value::Bool(true)));
    assert_eq!(eval("arraycontains([1, \"a\"], \"a\")"), Some(Value::Bool(true)));
    assert_eq!(eval("arraycontains([1], 2)"), Some(Value::Bool(false)));
    assert_eq!(eval("arraycontains([1], true)"), Some(Value::Bool(false)));
}

#[test]
fn tp_names_every_kind() {
    let cases = [("1", "integer"),
                 ("true", "boolean"),
                 ("\"s\"", "string"),
                 ("null", "null"),
                 ("[]", "array"),
                 ("{}", "hash"),
                 ("fn() {}", "function"),
                 ("tp", "builtin")];

    for (argument, kind) in cases {
        assert_eq!(eval(&format!("tp({argument})")), Some(Value::from(kind)), "tp({argument})");
    }
}

#[test]
fn integer_string_conversions() {
    assert_eq!(eval("intstr(42)"), Some(Value::from("42")));
    assert_eq!(eval("intstr(-7) + \"!\""), Some(Value::from("-7!")));
    assert_eq!(eval("tpint(\"17\") + 1"), Some(Value::Integer(18)));
    assert_error("intstr(\"1\")", "intstr: Argument must be an integer. Got string");
    assert_error("tpint(\"x\")", "tpint: Failed to convert to integer");
    assert_error("tpint(1)", "tpint: Argument must be a string. Got integer");
}

#[test]
fn sepr_picks_whitespace_separated_fields() {
    assert_eq!(eval("sepr(\"  alpha beta\tgamma \", 1)"), Some(Value::from("beta")));
    assert_eq!(eval("sepr(\"alpha beta gamma\", 2)"), Some(Value::from("gamma")));
    assert_error("sepr(\"a\", 3)", "sepr: Index out of bounds. Got 3, but only 1 parts");
    assert_error("sepr(\"a\", -1)", "Index out of bounds");
    assert_error("sepr(1, 1)", "Arguments must be (string, integer). Got integer and integer");
}

#[test]
fn rand_stays_in_the_half_open_range() {
    assert_eq!(eval("rand(1, 2)"), Some(Value::Integer(1)));

    for _ in 0..50 {
        let Some(Value::Integer(n)) = eval("rand(-3, 3)") else {
            panic!("rand did not return an integer");
        };
        assert!((-3..3).contains(&n), "{n} out of range");
    }

    assert_error("rand(2, 1)", "First argument must be less than second argument");
    assert_error("rand(1, 1)", "First argument must be less than second argument");
    assert_error("rand(\"1\", 2)", "Arguments must be integers. Got string and integer");
}

#[test]
fn write_prints_display_forms() {
    let (value, output) = run_with_input("write(\"a\", 1, [true, \"b\"]); write()", "");

    assert_eq!(value, None);
    assert_eq!(output, "a1[true, b]\n\n");
}

#[test]
fn read_parses_integers_and_trims_lines() {
    let (value, output) =
        run_with_input("let a = read(\"n? \"); let b = read(\"s? \"); [a + 1, b]", "41\n  hi there \n");

    assert_eq!(value,
               Some(Value::from(vec![Value::Integer(42), Value::from("hi there")])));
    assert_eq!(output, "n? s? ");
}

#[test]
fn read_fails_at_end_of_input() {
    let (value, _) = run_with_input("read(\"> \")", "");

    assert!(value.is_some_and(|v| v.is_error()));
}

#[test]
fn file_round_trip() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("notes.txt");

    let source = format!("writefile({path}, \"line one\\nline two\"); readfile({path})",
                         path = quoted(&file));

    assert_eq!(eval(&source), Some(Value::from("line one\nline two")));
    assert_eq!(fs::read_to_string(&file).unwrap(), "line one\nline two");
}

#[test]
fn readfile_reports_missing_files() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    assert_error(&format!("readfile({})", quoted(&missing)), "readfile: Failed to read file");
}

#[test]
fn makedir_and_ls() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("b.txt"), "b").unwrap();
    fs::write(root.join("a.txt"), "a").unwrap();

    let source = format!("makedir({sub}); ls({root})",
                         sub = quoted(&root.join("c")),
                         root = quoted(root));

    assert_eq!(eval(&source),
               Some(Value::from(vec![Value::from("a.txt"), Value::from("b.txt"), Value::from("c")])));
    assert!(root.join("c").is_dir());

    assert_error(&format!("makedir({})", quoted(&root.join("c"))),
                 "makedir: Error making directory");
    assert_error(&format!("ls({})", quoted(&root.join("nope"))), "ls: Error reading directory");
}

#[test]
fn file_copy_and_move() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("src.txt"), "payload").unwrap();

    let source = format!("filecp({src}, {copy}); filemv({copy}, {moved});",
                         src = quoted(&root.join("src.txt")),
                         copy = quoted(&root.join("copy.txt")),
                         moved = quoted(&root.join("moved.txt")));

    assert_eq!(eval(&source), None);
    assert_eq!(fs::read_to_string(root.join("src.txt")).unwrap(), "payload");
    assert_eq!(fs::read_to_string(root.join("moved.txt")).unwrap(), "payload");
    assert!(!root.join("copy.txt").exists());
}

#[test]
fn filemv_rejects_directories_and_dirmv_rejects_files() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("d")).unwrap();
    fs::write(root.join("f.txt"), "").unwrap();

    assert_error(&format!("filemv({}, {})", quoted(&root.join("d")), quoted(&root.join("e"))),
                 "filemv: Source is a directory, not a file");
    assert_error(&format!("dirmv({}, {})", quoted(&root.join("f.txt")), quoted(&root.join("g"))),
                 "dirmv: Source is not a directory");
}

#[test]
fn directory_copy_is_recursive() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("tree/nested/deeper")).unwrap();
    fs::write(root.join("tree/top.txt"), "top").unwrap();
    fs::write(root.join("tree/nested/deeper/leaf.txt"), "leaf").unwrap();

    let source = format!("dircp({src}, {dst}); ls({dst})",
                         src = quoted(&root.join("tree")),
                         dst = quoted(&root.join("copy")));

    assert_eq!(eval(&source),
               Some(Value::from(vec![Value::from("nested"), Value::from("top.txt")])));
    assert_eq!(fs::read_to_string(root.join("copy/nested/deeper/leaf.txt")).unwrap(), "leaf");
    assert_eq!(fs::read_to_string(root.join("tree/top.txt")).unwrap(), "top");
}

#[test]
fn directory_copy_refuses_to_copy_into_itself() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("a")).unwrap();
    fs::write(root.join("a/file.txt"), "x").unwrap();

    assert_error(&format!("dircp({}, {})", quoted(&root.join("a")), quoted(&root.join("a/b"))),
                 "dircp: Destination");
    assert_error(&format!("dircp({}, {})", quoted(&root.join("a")), quoted(&root.join("a"))),
                 "is inside source");
    assert!(!root.join("a/b").exists());
}

#[test]
fn directory_move() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("old")).unwrap();
    fs::write(root.join("old/file.txt"), "x").unwrap();

    let source = format!("dirmv({}, {})", quoted(&root.join("old")), quoted(&root.join("new")));

    assert_eq!(eval(&source), None);
    assert!(!root.join("old").exists());
    assert_eq!(fs::read_to_string(root.join("new/file.txt")).unwrap(), "x");
}

#[test]
fn filesystem_builtins_check_argument_kinds() {
    assert_error("makedir(1)", "makedir: Argument must be string. Got integer");
    assert_error("writefile(\"x\", 1)", "writefile: Arguments must be strings. Got string and integer");
}

use std::{fs, path::Path};

use pretty_assertions::assert_eq;
use squid::{
    error::RunError,
    interpreter::evaluator::{core::Interpreter, function::console::Io},
    run_file,
};
use tempfile::tempdir;
use walkdir::WalkDir;

/// Every script states the display form of its final value on its first
/// line.
const EXPECT_PREFIX: &str = "// expect: ";

fn expected_value(path: &Path) -> String {
    let source = fs::read_to_string(path).unwrap();
    source.lines()
          .next()
          .and_then(|line| line.strip_prefix(EXPECT_PREFIX))
          .unwrap_or_else(|| panic!("{} has no `{EXPECT_PREFIX}` line", path.display()))
          .to_string()
}

fn run(path: &Path) -> Result<Option<String>, RunError> {
    let mut interpreter = Interpreter::with_io(Io::buffered(""));
    run_file(&mut interpreter, path).map(|value| value.map(|v| v.to_string()))
}

#[test]
fn scripts_produce_their_expected_values() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/scripts");
    let mut checked = 0;

    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.unwrap();
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let found = run(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));

        assert_eq!(found, Some(expected_value(path)), "{}", path.display());
        checked += 1;
    }

    assert_eq!(checked, 8);
}

#[test]
fn wrong_extension_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("script.txt");
    fs::write(&path, "1").unwrap();

    let err = run(&path).unwrap_err();

    assert_eq!(err.to_string(), "Incorrect file format: Got .txt, expected .sqd");
}

#[test]
fn missing_extension_is_rejected() {
    let err = run(Path::new("script")).unwrap_err();

    assert_eq!(err.to_string(), "Incorrect file format: Got , expected .sqd");
}

#[test]
fn extension_check_ignores_case() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("LOUD.SQD");
    fs::write(&path, "1 + 1").unwrap();

    assert_eq!(run(&path).unwrap(), Some("2".to_string()));
}

#[test]
fn unreadable_files_are_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.sqd");

    assert!(matches!(run(&path), Err(RunError::Read { .. })));
}

#[test]
fn syntax_errors_are_reported_before_running() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.sqd");
    let marker = dir.path().join("marker");
    fs::write(&path,
              format!("writefile(\"{}\", \"ran\");\nlet x 5;", marker.display())).unwrap();

    let err = run(&path).unwrap_err();

    assert!(matches!(err, RunError::Syntax(_)));
    assert!(err.to_string().contains("line 2"), "{err}");
    assert!(!marker.exists());
}

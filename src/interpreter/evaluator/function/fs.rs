use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use walkdir::WalkDir;

use crate::interpreter::{
    evaluator::function::{console::Io, core::BuiltinResult},
    value::core::Value,
};

/// Creates a single directory. The parent must already exist.
pub fn makedir(args: &[Value], _: &mut Io) -> BuiltinResult {
    let path = string_arg(args)?;

    fs::create_dir(path).map_err(|e| format!("Error making directory: {e}"))?;
    Ok(None)
}

/// Moves or renames a directory.
pub fn dirmv(args: &[Value], _: &mut Io) -> BuiltinResult {
    let (source, destination) = string_args(args)?;

    let metadata = fs::metadata(source).map_err(|e| {
                                           format!("Failed to stat source directory {source}: {e}")
                                       })?;
    if !metadata.is_dir() {
        return Err(format!("Source is not a directory: {source}"));
    }

    fs::rename(source, destination).map_err(|e| {
                                       format!("Failed to move directory from {source} to {destination}: {e}")
                                   })?;
    Ok(None)
}

/// Moves or renames a file.
pub fn filemv(args: &[Value], _: &mut Io) -> BuiltinResult {
    let (source, destination) = string_args(args)?;

    let metadata =
        fs::metadata(source).map_err(|e| format!("Failed to stat source file {source}: {e}"))?;
    if metadata.is_dir() {
        return Err(format!("Source is a directory, not a file: {source}"));
    }

    fs::rename(source, destination).map_err(|e| {
                                       format!("Failed to move file from {source} to {destination}: {e}")
                                   })?;
    Ok(None)
}

/// Copies a directory tree. Missing destination directories are created and
/// existing files in the destination are overwritten. The destination may
/// not lie inside the source, since the copy would walk into its own output.
pub fn dircp(args: &[Value], _: &mut Io) -> BuiltinResult {
    let (source, destination) = string_args(args)?;
    let root = Path::new(source);

    let metadata = fs::metadata(root).map_err(|e| format!("Failed to stat source directory: {e}"))?;
    if !metadata.is_dir() {
        return Err(format!("Source is not a directory: {source}"));
    }

    let inside = resolve(Path::new(destination)).and_then(|dest| Ok(dest.starts_with(resolve(root)?)))
                                                 .map_err(|e| format!("Failed to resolve paths: {e}"))?;
    if inside {
        return Err(format!("Destination {destination} is inside source {source}"));
    }

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| format!("Failed to read source directory: {e}"))?;
        let relative = entry.path()
                            .strip_prefix(root)
                            .map_err(|e| format!("Failed to resolve {}: {e}", entry.path().display()))?;
        let target = Path::new(destination).join(relative);

        debug!("dircp: {} -> {}", entry.path().display(), target.display());

        let copied = if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
        } else {
            fs::copy(entry.path(), &target).map(|_| ())
        };
        copied.map_err(|e| format!("Failed to copy {}: {e}", entry.path().display()))?;
    }

    Ok(None)
}

/// Copies a single file, replacing the destination if it exists.
pub fn filecp(args: &[Value], _: &mut Io) -> BuiltinResult {
    let (source, destination) = string_args(args)?;

    fs::copy(source, destination).map_err(|e| format!("Error copying file: {e}"))?;
    Ok(None)
}

/// Names of the entries of a directory, sorted.
pub fn ls(args: &[Value], _: &mut Io) -> BuiltinResult {
    let path = string_arg(args)?;

    let mut names = fs::read_dir(path).map_err(|e| format!("Error reading directory: {e}"))?
                                      .map(|entry| {
                                          entry.map(|e| e.file_name().to_string_lossy().into_owned())
                                      })
                                      .collect::<Result<Vec<_>, _>>()
                                      .map_err(|e| format!("Error reading directory: {e}"))?;
    names.sort();

    Ok(Some(Value::from(names.into_iter().map(Value::from).collect::<Vec<_>>())))
}

/// Writes a string to a file, creating or truncating it.
pub fn writefile(args: &[Value], _: &mut Io) -> BuiltinResult {
    let (path, contents) = string_args(args)?;

    fs::write(path, contents).map_err(|e| format!("Error writing file: {e}"))?;
    Ok(None)
}

/// The whole contents of a UTF-8 file as a string.
pub fn readfile(args: &[Value], _: &mut Io) -> BuiltinResult {
    let path = string_arg(args)?;

    let contents = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {e}"))?;
    Ok(Some(Value::from(contents)))
}

/// Canonical form of `path`, which need not exist yet: the longest existing
/// ancestor is canonicalized and the remaining components are appended.
fn resolve(path: &Path) -> io::Result<PathBuf> {
    let mut missing = Vec::new();
    let mut existing = path;

    loop {
        match existing.canonicalize() {
            Ok(base) => return Ok(missing.iter().rev().fold(base, |acc, part| acc.join(part))),
            Err(e) => {
                let (Some(parent), Some(name)) = (existing.parent(), existing.file_name()) else {
                    return Err(e);
                };
                missing.push(name);
                existing = if parent.as_os_str().is_empty() { Path::new(".") } else { parent };
            },
        }
    }
}

fn string_arg(args: &[Value]) -> Result<&str, String> {
    match &args[0] {
        Value::Str(s) => Ok(&**s),
        other => Err(format!("Argument must be string. Got {}", other.type_name())),
    }
}

fn string_args(args: &[Value]) -> Result<(&str, &str), String> {
    match (&args[0], &args[1]) {
        (Value::Str(a), Value::Str(b)) => Ok((&**a, &**b)),
        (a, b) => Err(format!("Arguments must be strings. Got {} and {}", a.type_name(), b.type_name())),
    }
}

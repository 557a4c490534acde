//! UTF-8 text and JSON file helpers.
//!
//! Each `try_*` function returns the cause of a failure. The lenient wrappers
//! log that cause and hand back `None`/`false` instead, for callers that only
//! care whether the file was usable.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

/// Read `path` as UTF-8 text.
///
/// # Errors
/// Returns [`Error::Io`] if the file is missing, unreadable, or not UTF-8.
pub fn try_read_text_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| Error::io(path, err))
}

/// Read `path` and parse it as JSON.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Json`] if it is malformed.
pub fn try_read_json_file(path: &Path) -> Result<Value> {
    let raw = try_read_text_file(path)?;
    serde_json::from_str(&raw).map_err(|err| Error::json(path, err))
}

/// Serialize `value` as pretty JSON with `indent` spaces and write it to
/// `path`, creating missing parent directories. A trailing newline is added.
///
/// # Errors
/// Returns [`Error::Io`] on filesystem failures and [`Error::Json`] if
/// `value` cannot be serialized.
pub fn try_write_json_file<T: Serialize + ?Sized>(
    value: &T,
    path: &Path,
    indent: usize,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| Error::io(parent, err))?;
    }
    let body = to_pretty_json(value, indent).map_err(|err| Error::json(path, err))?;
    fs::write(path, body).map_err(|err| Error::io(path, err))
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> serde_json::Result<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// [`try_read_text_file`], logging failures and returning `None`.
#[must_use]
pub fn read_text_file(path: &Path) -> Option<String> {
    match try_read_text_file(path) {
        Ok(text) => Some(text),
        Err(err) => {
            error!("could not read file: {err}");
            None
        }
    }
}

/// [`try_read_json_file`], logging failures and returning `None`.
#[must_use]
pub fn read_json_file(path: &Path) -> Option<Value> {
    match try_read_json_file(path) {
        Ok(value) => {
            info!("read {}", path.display());
            Some(value)
        }
        Err(err) => {
            error!("could not load JSON: {err}");
            None
        }
    }
}

/// [`try_write_json_file`], logging the outcome and returning whether it succeeded.
#[must_use]
pub fn write_json_file<T: Serialize + ?Sized>(value: &T, path: &Path, indent: usize) -> bool {
    match try_write_json_file(value, path, indent) {
        Ok(()) => {
            info!("wrote {}", path.display());
            true
        }
        Err(err) => {
            error!("could not write JSON: {err}");
            false
        }
    }
}

/// Size of `path` in bytes, or `None` (with a warning) if it cannot be read.
#[must_use]
pub fn file_size(path: &Path) -> Option<u64> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.len()),
        Err(err) => {
            warn!("no size for {}: {err}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_none() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("absent.json");
        assert_eq!(read_json_file(&path), None);
        assert_eq!(read_text_file(&path), None);
        assert_eq!(file_size(&path), None);
        assert!(matches!(try_read_json_file(&path), Err(Error::Io { .. })));
        Ok(())
    }

    #[test]
    fn malformed_json_is_none() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json")?;
        assert_eq!(read_json_file(&path), None);
        assert!(matches!(try_read_json_file(&path), Err(Error::Json { .. })));
        Ok(())
    }

    #[test]
    fn write_creates_parents_and_uses_indent() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("deeper").join("out.json");
        let value = json!({"app": "测试", "n": [1]});
        assert!(write_json_file(&value, &path, 4));
        let raw = fs::read_to_string(&path)?;
        assert_eq!(raw, "{\n    \"app\": \"测试\",\n    \"n\": [\n        1\n    ]\n}\n");
        assert_eq!(read_json_file(&path), Some(value));
        assert_eq!(file_size(&path), Some(raw.len() as u64));
        Ok(())
    }

    #[test]
    fn write_into_a_file_path_fails() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x")?;
        assert!(!write_json_file(&json!({}), &blocker.join("out.json"), 2));
        Ok(())
    }
}

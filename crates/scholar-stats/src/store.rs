//! YAML persistence of statistics records.
//!
//! Static-site tools read the file with YAML 1.1 parsers (PyYAML, js-yaml),
//! which resolve plain scalars like `yes`, `~` or `2025-01-31 23:59:58` to
//! booleans, nulls and datetimes. Every record value is text, so those
//! scalars are written single-quoted.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;

use crate::error::StoreResult;
use crate::models::StatsRecord;

/// Plain scalars a YAML 1.1 reader resolves to something other than a string.
static YAML11_NON_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        // bool
        r"^(?:y|Y|yes|Yes|YES|n|N|no|No|NO|on|On|ON|off|Off|OFF",
        r"|true|True|TRUE|false|False|FALSE)$",
        // null, value, merge
        r"|^(?:~|null|Null|NULL|=|<<)$",
        // int (decimal, binary, octal, hex, sexagesimal)
        r"|^[-+]?(?:0b[01_]+|0[0-7_]+|(?:0|[1-9][0-9_]*)|0x[0-9a-fA-F_]+",
        r"|[1-9][0-9_]*(?::[0-5]?[0-9])+)$",
        // float
        r"|^[-+]?(?:[0-9][0-9_]*)?\.[0-9.]*(?:[eE][-+][0-9]+)?$",
        r"|^[-+]?[0-9][0-9_]*(?::[0-5]?[0-9])+\.[0-9_]*$",
        r"|^[-+]?\.(?:inf|Inf|INF)$|^\.(?:nan|NaN|NAN)$",
        // timestamp
        r"|^[0-9]{4}-[0-9]{2}-[0-9]{2}$",
        r"|^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}(?:[Tt]|[ \t]+)",
        r"[0-9]{1,2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]*)?",
        r"(?:[ \t]*(?:Z|[-+][0-9]{1,2}(?::[0-9]{2})?))?$",
    ))
    .expect("valid YAML 1.1 resolver pattern")
});

/// Write a record as block-style YAML, replacing any existing file.
///
/// Parent directories are created as needed. Keys keep the record's field
/// order.
///
/// # Errors
///
/// Returns error if a directory or the file cannot be written.
pub fn save_record(record: &StatsRecord, path: impl AsRef<Path>) -> StoreResult<PathBuf> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, to_yaml(record)?)?;

    tracing::info!(path = %path.display(), "Saved statistics record");
    Ok(path.to_path_buf())
}

/// Read a record written by [`save_record`].
///
/// # Errors
///
/// Returns error if the file cannot be read or is not a valid record.
pub fn load_record(path: impl AsRef<Path>) -> StoreResult<StatsRecord> {
    let text = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}

/// Render a record as block-style YAML that keeps every value a string for
/// YAML 1.1 readers.
///
/// # Errors
///
/// Returns error if a value cannot be serialized.
pub fn to_yaml(record: &StatsRecord) -> StoreResult<String> {
    let Value::Mapping(fields) = serde_yaml::to_value(record)? else {
        return Ok(serde_yaml::to_string(record)?);
    };

    let mut output = String::new();
    for (key, value) in &fields {
        let Some(key) = key.as_str() else { continue };
        match value {
            Value::Sequence(items) if items.is_empty() => {
                let _ = writeln!(output, "{key}: []");
            }
            Value::Sequence(items) => {
                let _ = writeln!(output, "{key}:");
                for item in items {
                    let _ = writeln!(output, "- {}", scalar(item)?);
                }
            }
            other => {
                let _ = writeln!(output, "{key}: {}", scalar(other)?);
            }
        }
    }
    Ok(output)
}

fn scalar(value: &Value) -> StoreResult<String> {
    if let Value::String(text) = value {
        if YAML11_NON_STRING.is_match(text) {
            return Ok(format!("'{}'", text.replace('\'', "''")));
        }
    }
    Ok(serde_yaml::to_string(value)?.trim_end_matches('\n').to_string())
}

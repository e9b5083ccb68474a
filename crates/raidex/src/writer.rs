//! Deterministic JSON serialization and atomic file replacement.
//!
//! Serializer settings travel as an explicit [`WriterConfig`] value; there is
//! no process-wide serializer state. Key casing is applied after the document
//! is turned into a JSON tree, so it reaches struct fields and map keys alike
//! (shard types, element names, stat kinds).

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use tempfile::Builder;
use tracing::debug;

use crate::error::{Error, Result};
use crate::export::Document;

/// Casing applied to every object key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyCase {
    /// `ArenaLeague` -> `arenaLeague`, `HP` -> `hp`
    #[default]
    LowerCamel,
    /// Keys are written exactly as produced
    Preserve,
}

impl KeyCase {
    pub fn apply(&self, key: &str) -> String {
        match self {
            Self::LowerCamel => to_lower_camel(key),
            Self::Preserve => key.to_string(),
        }
    }
}

/// Serializer settings for one write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    pub key_case: KeyCase,
    /// Spaces per nesting level; 0 writes compact single-line JSON
    pub indent: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            key_case: KeyCase::LowerCamel,
            indent: 2,
        }
    }
}

impl WriterConfig {
    pub fn compact() -> Self {
        Self {
            indent: 0,
            ..Self::default()
        }
    }
}

/// Lower camel case a key.
///
/// The leading run of capitals is lowercased, except that the last capital of
/// a run followed by a lowercase letter starts the next word. Keys that do not
/// start with a capital are returned unchanged.
pub fn to_lower_camel(key: &str) -> String {
    let mut chars: Vec<char> = key.chars().collect();
    if !chars.first().is_some_and(|c| c.is_uppercase()) {
        return key.to_string();
    }

    for i in 0..chars.len() {
        if i == 1 && !chars[i].is_uppercase() {
            break;
        }
        if i > 0 {
            if let Some(next) = chars.get(i + 1) {
                if !next.is_uppercase() {
                    if next.is_whitespace() {
                        chars[i] = chars[i].to_lowercase().next().unwrap_or(chars[i]);
                    }
                    break;
                }
            }
        }
        chars[i] = chars[i].to_lowercase().next().unwrap_or(chars[i]);
    }

    chars.into_iter().collect()
}

fn recase_keys(value: JsonValue, key_case: KeyCase) -> JsonValue {
    match value {
        JsonValue::Object(map) => {
            let mut recased = Map::with_capacity(map.len());
            for (key, value) in map {
                recased.insert(key_case.apply(&key), recase_keys(value, key_case));
            }
            JsonValue::Object(recased)
        }
        JsonValue::Array(items) => JsonValue::Array(
            items
                .into_iter()
                .map(|item| recase_keys(item, key_case))
                .collect(),
        ),
        other => other,
    }
}

/// Serialize a document to a JSON string according to `config`
pub fn to_json_string<T: Serialize + ?Sized>(
    document: &T,
    config: &WriterConfig,
) -> Result<String> {
    let mut value = serde_json::to_value(document)?;
    if config.key_case != KeyCase::Preserve {
        value = recase_keys(value, config.key_case);
    }

    if config.indent == 0 {
        return Ok(serde_json::to_string(&value)?);
    }

    let indent = vec![b' '; config.indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only emits valid UTF-8
    String::from_utf8(buf).map_err(|e| Error::Serialization(serde::ser::Error::custom(e)))
}

/// Serialize `document` and replace the file at `path` with the result.
///
/// The text goes to a temporary file next to `path` which is synced and then
/// renamed over the target, so a failed write leaves the old file intact.
pub fn write<T: Serialize + ?Sized>(
    path: &Path,
    document: &T,
    config: &WriterConfig,
) -> Result<()> {
    let json = to_json_string(document, config)?;
    write_atomic(path, json.as_bytes()).map_err(|e| Error::io(path, e))?;
    debug!("Wrote {} ({} bytes)", path.display(), json.len());
    Ok(())
}

/// Write a document to its designated file inside `dir`
pub fn write_document<D: Document>(
    dir: &Path,
    document: &D,
    config: &WriterConfig,
) -> Result<PathBuf> {
    let path = dir.join(D::FILE_NAME);
    write(&path, document, config)?;
    Ok(path)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    builder.prefix(".raidex-");
    // Same mode as a plain `File::create`, so the umask decides
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder.tempfile_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

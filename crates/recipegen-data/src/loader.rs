//! Content loading: reads item and tag data files and builds the registry.
//!
//! Provides format detection (RON/JSON/TOML), file discovery, and
//! deserialization helpers, plus [`load_content`] which ties them together.

use crate::schema::{ItemGroupData, TagData};
use recipegen_core::registry::{ContentKind, ContentRegistry, RegistryBuilder, RegistryError};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur during content loading.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// A required data file was not found in the given directory.
    #[error("required file '{file}' not found in {dir}")]
    MissingRequired { file: String, dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same base name but different formats exist.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// A name is not a valid `namespace:path` identifier.
    #[error("invalid name in {file}: {detail}")]
    InvalidName { file: PathBuf, detail: String },

    /// A name reference could not be resolved.
    #[error("unresolved {expected_kind} reference '{name}' in {file}")]
    UnresolvedRef {
        file: PathBuf,
        name: String,
        expected_kind: &'static str,
    },

    /// A duplicate name was found.
    #[error("duplicate {kind} '{name}' in {file}")]
    DuplicateName {
        file: PathBuf,
        name: String,
        kind: &'static str,
    },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn kind_str(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Item => "item",
        ContentKind::Tag => "tag",
    }
}

/// Attach the offending file to a registry error.
fn registry_error(file: &Path, err: RegistryError) -> DataLoadError {
    let file = file.to_path_buf();
    match err {
        RegistryError::DuplicateEntry { kind, name } => DataLoadError::DuplicateName {
            file,
            name,
            kind: kind_str(kind),
        },
        RegistryError::UnknownTagMember { member, .. } => DataLoadError::UnresolvedRef {
            file,
            name: member,
            expected_kind: "item",
        },
        RegistryError::MissingContentReference { kind, name } => DataLoadError::UnresolvedRef {
            file,
            name,
            expected_kind: kind_str(kind),
        },
        RegistryError::InvalidId(e) => DataLoadError::InvalidName {
            file,
            detail: e.to_string(),
        },
    }
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Scan a directory for `{base_name}.ron`, `.toml` or `.json`.
///
/// Returns `Ok(None)` if no file is found, or `Err(ConflictingFormats)` if
/// more than one format exists for the same base name.
pub fn find_data_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let mut found: Option<PathBuf> = None;

    for ext in ["ron", "toml", "json"] {
        let candidate = dir.join(format!("{base_name}.{ext}"));
        if !candidate.exists() {
            continue;
        }
        if let Some(existing) = found {
            return Err(DataLoadError::ConflictingFormats {
                a: existing,
                b: candidate,
            });
        }
        found = Some(candidate);
    }

    Ok(found)
}

/// Like [`find_data_file`], but a missing file is an error.
pub fn require_data_file(dir: &Path, base_name: &str) -> Result<PathBuf, DataLoadError> {
    find_data_file(dir, base_name)?.ok_or_else(|| DataLoadError::MissingRequired {
        file: base_name.to_string(),
        dir: dir.to_path_buf(),
    })
}

// ===========================================================================
// Deserialization
// ===========================================================================

fn parse_error(path: &Path, e: impl std::fmt::Display) -> DataLoadError {
    DataLoadError::Parse {
        file: path.to_path_buf(),
        detail: e.to_string(),
    }
}

/// Read a file and deserialize it according to its format.
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Json => serde_json::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Toml => toml::from_str(&content).map_err(|e| parse_error(path, e)),
    }
}

/// Deserialize a list from a file. TOML files hold the array under
/// `toml_key` in a top-level table; RON and JSON hold a bare list.
pub fn deserialize_list<T: DeserializeOwned>(
    path: &Path,
    toml_key: &str,
) -> Result<Vec<T>, DataLoadError> {
    if detect_format(path)? != Format::Toml {
        return deserialize_file(path);
    }

    let content = std::fs::read_to_string(path)?;
    let table: toml::Table = toml::from_str(&content).map_err(|e| parse_error(path, e))?;
    let array = table
        .get(toml_key)
        .ok_or_else(|| parse_error(path, format!("missing key '{toml_key}' in TOML file")))?
        .clone();
    array
        .try_into()
        .map_err(|e: toml::de::Error| parse_error(path, e))
}

// ===========================================================================
// Registry loading
// ===========================================================================

/// Load `items.*` (required) and `tags.*` (optional) from `dir` into a
/// frozen content registry.
pub fn load_content(dir: &Path) -> Result<ContentRegistry, DataLoadError> {
    let mut builder = RegistryBuilder::new();

    let items_path = require_data_file(dir, "items")?;
    let groups: Vec<ItemGroupData> = deserialize_list(&items_path, "items")?;
    for group in &groups {
        for name in group.qualified() {
            builder
                .register_item(&name)
                .map_err(|e| registry_error(&items_path, e))?;
        }
    }

    let tags_path = find_data_file(dir, "tags")?;
    if let Some(path) = &tags_path {
        let tags: Vec<TagData> = deserialize_list(path, "tags")?;
        for tag in &tags {
            let members: Vec<&str> = tag.members.iter().map(String::as_str).collect();
            builder
                .register_tag(&tag.name, &members)
                .map_err(|e| registry_error(path, e))?;
        }
    }

    let item_count = builder.item_count();
    let tag_count = builder.tag_count();
    let registry = builder
        .build()
        .map_err(|e| registry_error(tags_path.as_deref().unwrap_or(&items_path), e))?;

    tracing::debug!(
        dir = %dir.display(),
        items = item_count,
        tags = tag_count,
        "content registry loaded"
    );
    Ok(registry)
}

// ===========================================================================
// Tests
// ===========================================================================

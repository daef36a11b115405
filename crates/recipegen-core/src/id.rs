use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Namespace used when an identifier is written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A namespaced identifier (`namespace:path`). Cheap to clone and compare.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceLocation {
    namespace: String,
    path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("empty {0} in resource location")]
    Empty(&'static str),
    #[error("invalid character '{ch}' in namespace of '{id}'")]
    BadNamespace { id: String, ch: char },
    #[error("invalid character '{ch}' in path of '{id}'")]
    BadPath { id: String, ch: char },
    /// An empty, `.` or `..` component; it would not name a file of its own.
    #[error("invalid segment '{segment}' in '{id}'")]
    BadSegment { id: String, segment: String },
}

fn namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

fn path_char(c: char) -> bool {
    namespace_char(c) || c == '/'
}

fn bad_segment(segment: &str) -> bool {
    matches!(segment, "" | "." | "..")
}

impl ResourceLocation {
    /// Validate and join a namespace and path.
    ///
    /// Every `/`-separated segment (and the namespace) must be non-empty and
    /// not `.` or `..`, so an identity always maps to its own file.
    pub fn new(namespace: &str, path: &str) -> Result<Self, IdError> {
        if namespace.is_empty() {
            return Err(IdError::Empty("namespace"));
        }
        if path.is_empty() {
            return Err(IdError::Empty("path"));
        }
        if let Some(ch) = namespace.chars().find(|c| !namespace_char(*c)) {
            return Err(IdError::BadNamespace {
                id: format!("{namespace}:{path}"),
                ch,
            });
        }
        if let Some(ch) = path.chars().find(|c| !path_char(*c)) {
            return Err(IdError::BadPath {
                id: format!("{namespace}:{path}"),
                ch,
            });
        }
        if let Some(segment) = std::iter::once(namespace)
            .chain(path.split('/'))
            .find(|s| bad_segment(s))
        {
            return Err(IdError::BadSegment {
                id: format!("{namespace}:{path}"),
                segment: segment.to_string(),
            });
        }
        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Parse `namespace:path`. A bare `path` falls back to [`DEFAULT_NAMESPACE`].
    pub fn parse(s: &str) -> Result<Self, IdError> {
        match s.split_once(':') {
            Some((ns, path)) => Self::new(ns, path),
            None => Self::new(DEFAULT_NAMESPACE, s),
        }
    }

    /// Namespace part, before the `:`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Path part; may contain `/` separators.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for ResourceLocation {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ResourceLocation {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ResourceLocation> for String {
    fn from(value: ResourceLocation) -> Self {
        value.to_string()
    }
}

//! Translation document representation and the override merge operation.

use std::path::{
    Path,
    PathBuf,
};

use serde_json::{
    Map,
    Value,
};
use thiserror::Error;

/// Defines errors that may occur while loading or serializing a translation
/// document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Error when the file cannot be read
    #[error("Failed to read translation file {path}: {source}")]
    Read {
        /// Path of the unreadable file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Error when the file content is not valid JSON
    #[error("Failed to parse translation file {path}: {source}")]
    Parse {
        /// Path of the malformed file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
    /// Error when the top level of the file is not a JSON object
    #[error("Translation file {path} must contain a JSON object at the top level")]
    NotAnObject {
        /// Path of the rejected file
        path: PathBuf,
    },
    /// Error when the document cannot be serialized
    #[error("Failed to serialize translation document: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// In-memory translation document: a top-level JSON object whose values are
/// typically nested maps of strings (e.g., `"nav": { "home": "Home" }`).
///
/// The underlying map preserves insertion order so generated files diff
/// cleanly against the baseline they were derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationDocument {
    /// Top-level key map.
    root: Map<String, Value>,
}

impl TranslationDocument {
    /// Create a document from a top-level JSON object.
    #[must_use]
    pub const fn new(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Load a translation document from a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// does not contain a JSON object at the top level.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| DocumentError::Read { path: path.to_path_buf(), source })?;

        let json: Value = serde_json::from_str(&content)
            .map_err(|source| DocumentError::Parse { path: path.to_path_buf(), source })?;

        match json {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(DocumentError::NotAnObject { path: path.to_path_buf() }),
        }
    }

    /// Derive a new document by deep-copying this one and setting each key in
    /// `overrides` at the top level of the copy.
    ///
    /// Replacement is wholesale, not a deep merge: nested keys that the
    /// override does not restate are dropped for that top-level key. Keys
    /// absent from `overrides` are carried over unchanged, and an override
    /// key missing from this document is simply added.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use i18n_locale_gen::document::TranslationDocument;
    ///
    /// let baseline = json!({
    ///     "nav": { "home": "Home" },
    ///     "footer": { "copyright": "©2024" }
    /// })
    /// .as_object()
    /// .cloned()
    /// .unwrap_or_default();
    /// let overrides = json!({ "nav": { "home": "Accueil" } }).as_object().cloned().unwrap_or_default();
    ///
    /// let derived = TranslationDocument::new(baseline).with_overrides(&overrides);
    /// assert_eq!(derived.root().get("nav"), Some(&json!({ "home": "Accueil" })));
    /// assert_eq!(derived.root().get("footer"), Some(&json!({ "copyright": "©2024" })));
    /// ```
    #[must_use]
    pub fn with_overrides(&self, overrides: &Map<String, Value>) -> Self {
        let mut root = self.root.clone();
        for (key, value) in overrides {
            root.insert(key.clone(), value.clone());
        }
        Self { root }
    }

    /// Serialize to pretty-printed JSON: two-space indentation, non-ASCII
    /// characters emitted literally, no trailing newline.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(&self.root).map_err(DocumentError::Serialize)
    }

    /// Number of leaf values in the document (strings, numbers, booleans,
    /// nulls), counted across all nesting levels.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.root.values().map(count_leaves).sum()
    }

    /// Access the top-level key map.
    #[must_use]
    pub const fn root(&self) -> &Map<String, Value> {
        &self.root
    }
}

/// Count leaf values below a JSON value.
fn count_leaves(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.values().map(count_leaves).sum(),
        Value::Array(arr) => arr.iter().map(count_leaves).sum(),
        _ => 1,
    }
}

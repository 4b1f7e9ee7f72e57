use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "localesDir")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings for one generation run.
///
/// The defaults reproduce the fixed paths the generator has always used;
/// a workspace config file can relocate them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorSettings {
    /// Directory holding one subdirectory per locale.
    pub locales_dir: PathBuf,

    /// Locale whose translation file is the source of truth.
    pub baseline_language: String,

    /// Translation file name inside each locale directory.
    pub file_name: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            locales_dir: PathBuf::from("frontend/public/locales"),
            baseline_language: "en".to_string(),
            file_name: "translation.json".to_string(),
        }
    }
}

impl GeneratorSettings {
    /// Path of the baseline translation file.
    #[must_use]
    pub fn baseline_path(&self) -> PathBuf {
        self.locale_path(&self.baseline_language)
    }

    /// Output path for a locale's translation file.
    #[must_use]
    pub fn locale_path(&self, locale: &str) -> PathBuf {
        self.locales_dir.join(locale).join(&self.file_name)
    }

    /// # Errors
    /// - Required field is empty
    /// - File name contains path separators
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.locales_dir.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "localesDir",
                "The directory cannot be empty. Example: \"frontend/public/locales\"",
            ));
        }

        if self.baseline_language.is_empty() {
            errors.push(ValidationError::new(
                "baselineLanguage",
                "The language code cannot be empty. Example: \"en\"",
            ));
        }

        if self.file_name.is_empty() {
            errors.push(ValidationError::new(
                "fileName",
                "The file name cannot be empty. Example: \"translation.json\"",
            ));
        } else if Path::new(&self.file_name).components().count() > 1 {
            errors.push(ValidationError::new(
                "fileName",
                format!("The file name cannot contain path separators, got \"{}\"", self.file_name),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

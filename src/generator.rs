//! Locale file generation pipeline.
//!
//! Reads the baseline translation file once, derives one document per target
//! locale by applying that locale's compiled-in overrides, and writes each
//! document to its per-locale destination. Fully sequential, one shot: the
//! first failure aborts the run and earlier locales keep their files.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::{
    Map,
    Value,
};
use thiserror::Error;

use crate::config::GeneratorSettings;
use crate::document::{
    DocumentError,
    TranslationDocument,
};
use crate::locales;

/// Defines errors that may occur during a generation run.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Error while loading or serializing a translation document
    #[error(transparent)]
    Document(#[from] DocumentError),
    /// Error when an output file cannot be written
    #[error("Failed to write {locale} translations to {path}: {source}")]
    Write {
        /// Locale whose output failed
        locale: String,
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Outcome of a completed generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Locale files written.
    pub locales_written: usize,
    /// Locales that had a compiled-in override set applied.
    pub translated: usize,
}

/// Derive one document per locale from the baseline.
///
/// Each output is an independent deep copy of `baseline` with the locale's
/// override keys replaced wholesale at the top level. A locale with an empty
/// override map gets an exact copy.
#[must_use]
pub fn generate(
    baseline: &TranslationDocument,
    overrides: &BTreeMap<String, Map<String, Value>>,
) -> BTreeMap<String, TranslationDocument> {
    overrides
        .iter()
        .map(|(locale, override_map)| (locale.clone(), baseline.with_overrides(override_map)))
        .collect()
}

/// One-shot generator that writes every target locale's translation file.
#[derive(Debug, Clone)]
pub struct LocaleGenerator {
    /// Resolved settings for this run.
    settings: GeneratorSettings,
}

impl LocaleGenerator {
    /// Create a generator from resolved settings.
    #[must_use]
    pub const fn new(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    /// Run the full read-copy-override-write cycle for every target locale.
    ///
    /// The baseline is read once and never mutated; each locale gets its own
    /// deep copy. Output files fully replace whatever was at the destination.
    /// Output directories are not created here, so a missing locale directory
    /// surfaces as a write failure.
    ///
    /// # Errors
    /// Returns an error if the baseline cannot be loaded or any output file
    /// cannot be written. Locales written before the failure keep their
    /// files.
    pub fn run(&self) -> Result<GenerationSummary, GeneratorError> {
        let baseline_path = self.settings.baseline_path();
        tracing::debug!(path = %baseline_path.display(), "Loading baseline translations");
        let baseline = TranslationDocument::load(&baseline_path)?;

        let overrides: BTreeMap<String, Map<String, Value>> = locales::TARGET_LOCALES
            .iter()
            .copied()
            // The baseline file is the source of truth and is never regenerated.
            .filter(|locale| *locale != self.settings.baseline_language)
            .map(|locale| {
                let map = locales::overrides_for(locale).cloned().unwrap_or_default();
                (locale.to_string(), map)
            })
            .collect();

        let documents = generate(&baseline, &overrides);

        let mut summary = GenerationSummary { locales_written: 0, translated: 0 };
        for (locale, document) in &documents {
            self.write_locale(locale, document)?;

            let translated = overrides.get(locale).is_some_and(|map| !map.is_empty());
            tracing::info!(
                locale = %locale,
                keys = document.leaf_count(),
                translated,
                "Generated translation file"
            );

            summary.locales_written += 1;
            if translated {
                summary.translated += 1;
            }
        }

        Ok(summary)
    }

    /// Serialize a document and write it to the locale's destination.
    fn write_locale(
        &self,
        locale: &str,
        document: &TranslationDocument,
    ) -> Result<(), GeneratorError> {
        let path = self.settings.locale_path(locale);
        let content = document.to_pretty_json()?;

        std::fs::write(&path, content).map_err(|source| GeneratorError::Write {
            locale: locale.to_string(),
            path,
            source,
        })
    }
}

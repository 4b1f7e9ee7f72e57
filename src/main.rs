//! Entry point for the locale file generator.

use std::path::Path;
use std::process::ExitCode;

use i18n_locale_gen::LocaleGenerator;
use i18n_locale_gen::config;
use tracing_subscriber::EnvFilter;

/// Load settings, run the generator once, and report the outcome.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = match config::load_or_default(Path::new(".")) {
        Ok(settings) => settings,
        Err(error) => {
            tracing::error!(%error, "Invalid generator configuration");
            return ExitCode::FAILURE;
        }
    };

    match LocaleGenerator::new(settings).run() {
        Ok(summary) => {
            tracing::info!(
                locales = summary.locales_written,
                translated = summary.translated,
                "Generated locale translation files"
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "Locale file generation failed");
            ExitCode::FAILURE
        }
    }
}

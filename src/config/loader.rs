//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    GeneratorSettings,
};

/// ワークスペースから設定を読み込む
///
/// `.i18n-gen.json` ファイルを探して読み込む
///
/// # Arguments
/// * `workspace_root` - ワークスペースのルートパス
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub(super) fn load_from_workspace(
    workspace_root: &Path,
) -> Result<Option<GeneratorSettings>, ConfigError> {
    let config_path = workspace_root.join(".i18n-gen.json");

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: GeneratorSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}

/// ワークスペースの設定を読み込み、バリデーションして返す
///
/// 設定ファイルが存在しない場合はデフォルト値を使う
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
/// - バリデーションエラー
pub fn load_or_default(workspace_root: &Path) -> Result<GeneratorSettings, ConfigError> {
    let settings = load_from_workspace(workspace_root)?.map_or_else(GeneratorSettings::default, |ws| {
        tracing::debug!("Loaded workspace settings: {:?}", ws);
        ws
    });

    settings.validate().map_err(ConfigError::ValidationErrors)?;

    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// `load_from_workspace`: 設定ファイルが存在する場合
    #[rstest]
    fn test_load_from_workspace_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"baselineLanguage": "en-GB"}"#;
        fs::write(temp_dir.path().join(".i18n-gen.json"), config_content).unwrap();

        let result = load_from_workspace(temp_dir.path());

        assert!(result.is_ok());
        let settings = result.unwrap();
        assert!(settings.is_some());
        assert_eq!(settings.unwrap().baseline_language, "en-GB");
    }

    /// `load_from_workspace`: 設定ファイルが存在しない場合
    #[rstest]
    fn test_load_from_workspace_no_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_workspace(temp_dir.path());

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    /// `load_from_workspace`: JSON パースエラー
    #[rstest]
    fn test_load_from_workspace_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".i18n-gen.json"), "invalid json").unwrap();

        let result = load_from_workspace(temp_dir.path());

        assert!(result.is_err());
    }

    /// `load_or_default`: 設定ファイルがない場合はデフォルト値
    #[rstest]
    fn test_load_or_default_without_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let settings = load_or_default(temp_dir.path()).unwrap();

        assert_eq!(settings.baseline_language, "en");
        assert_eq!(settings.file_name, "translation.json");
    }

    /// `load_or_default`: 無効な設定でエラー
    #[rstest]
    fn test_load_or_default_invalid_settings() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".i18n-gen.json"), r#"{"fileName": ""}"#).unwrap();

        let result = load_or_default(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
    }
}

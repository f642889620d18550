//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value logic / 禁止默认值逻辑**
//!
//! Defaults and environment overrides are applied in `wiring.rs`.

use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;
use vc_core::config::AppConfig;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed**: empty strings and missing sections are
/// accepted as facts.
/// **不执行任何验证**：空字符串和缺失的部分都被视为事实。
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
/// 无法读取文件或内容不是有效 TOML 时返回错误。
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Pick the configuration source.
///
/// An explicitly requested file must exist. The default file is optional;
/// without it every value is empty.
pub fn resolve_config(explicit: Option<PathBuf>, default_path: &Path) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => load_config(path),
        None if default_path.is_file() => load_config(default_path.to_path_buf()),
        None => {
            debug!(path = %default_path.display(), "no config file, using environment only");
            Ok(AppConfig::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Test that valid TOML is parsed correctly
    /// 测试有效 TOML 被正确解析
    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [model]
            api_key = "secret"
            name = "gemini-2.0-flash"
            base_url = "http://localhost:9000"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.model_api_key, "secret");
        assert_eq!(config.model_name, "gemini-2.0-flash");
        assert_eq!(config.model_base_url, "http://localhost:9000");
    }

    /// Test that missing values result in empty values
    /// 测试缺失的值导致空值
    #[test]
    fn test_load_config_returns_empty_values_when_missing() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[model]\n# api_key is missing\n").unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[model\napi_key = ").unwrap();

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_resolve_config_default_file_is_optional() {
        let dir = tempfile::tempdir().unwrap();

        let config = resolve_config(None, &dir.path().join("config.toml")).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_resolve_config_explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        let err = resolve_config(Some(missing), &dir.path().join("config.toml")).unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }
}

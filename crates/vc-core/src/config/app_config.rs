/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Model service API key (may be empty - the environment may supply it)
    /// 模型服务 API 密钥（可能为空 - 可由环境变量提供）
    pub model_api_key: String,

    /// Model name, e.g. `gemini-2.0-flash` (may be empty)
    pub model_name: String,

    /// Model service base URL (may be empty)
    pub model_base_url: String,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// **Prohibited / 禁止**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let model_str = |key: &str| {
            toml_value
                .get("model")
                .and_then(|m| m.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            model_api_key: model_str("api_key"),
            model_name: model_str("name"),
            model_base_url: model_str("base_url"),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            model_api_key: String::new(),
            model_name: String::new(),
            model_base_url: String::new(),
        }
    }
}

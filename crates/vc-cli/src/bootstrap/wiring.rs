//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Apply defaults and environment overrides to the model settings
//! - ✅ Create infra implementations (model client, file reader, clock) / 创建 infra 层具体实现
//! - ✅ Inject all dependencies into AppDeps / 将所有依赖注入到 AppDeps
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//!
//! > **This is the only place allowed to depend on vc-infra + vc-app simultaneously.**
//! > **这是唯一允许同时依赖 vc-infra 和 vc-app 的地方。**

use std::sync::Arc;

use tracing::info;
use vc_app::AppDeps;
use vc_core::config::AppConfig;
use vc_core::ports::{NotifierPort, SessionEventPort};
use vc_infra::{GeminiClient, GeminiConfig, SystemClock, TokioImageReader};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("No model API key: set GEMINI_API_KEY (or GOOGLE_API_KEY), or api_key under [model] in the config file")]
    MissingApiKey,

    #[error("Model client initialization failed: {0}")]
    ModelClientInit(String),
}

/// Environment variables holding the API key, in precedence order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];
pub const MODEL_VAR: &str = "VISIONARY_MODEL";
pub const BASE_URL_VAR: &str = "VISIONARY_BASE_URL";

/// UI-side ports, chosen by the command being run.
pub struct UiPorts {
    pub notifier: Arc<dyn NotifierPort>,
    pub session_events: Arc<dyn SessionEventPort>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Combine file config, environment and defaults into model settings.
///
/// Environment beats the file; empty values count as unset.
pub fn resolve_model_config(
    config: &AppConfig,
    env: impl Fn(&str) -> Option<String>,
) -> WiringResult<GeminiConfig> {
    let from_file = |value: &str| non_empty(Some(value.to_string()));

    let api_key = API_KEY_VARS
        .iter()
        .find_map(|var| non_empty(env(var)))
        .or_else(|| from_file(&config.model_api_key))
        .ok_or(WiringError::MissingApiKey)?;
    let model = non_empty(env(MODEL_VAR))
        .or_else(|| from_file(&config.model_name))
        .unwrap_or_else(|| GeminiConfig::DEFAULT_MODEL.to_string());
    let base_url = non_empty(env(BASE_URL_VAR))
        .or_else(|| from_file(&config.model_base_url))
        .unwrap_or_else(|| GeminiConfig::DEFAULT_BASE_URL.to_string());

    Ok(GeminiConfig {
        api_key,
        model,
        base_url,
    })
}

/// Wire all dependencies together.
/// 将所有依赖连接在一起。
pub fn wire_dependencies(model: GeminiConfig, ui: UiPorts) -> WiringResult<AppDeps> {
    info!(model = %model.model, base_url = %model.base_url, "wiring model client");

    let client = Arc::new(
        GeminiClient::new(model).map_err(|e| WiringError::ModelClientInit(e.to_string()))?,
    );

    Ok(AppDeps {
        image_reader: Arc::new(TokioImageReader::default()),
        classifier: client.clone(),
        describer: client,
        notifier: ui.notifier,
        session_events: ui.session_events,
        clock: Arc::new(SystemClock),
    })
}

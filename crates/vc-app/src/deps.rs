//! # Application Dependencies / 应用依赖
//!
//! This module defines the dependency grouping for use case construction.
//! 此模块定义用例构造的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern.
//! - No build steps / 无构建步骤
//! - No default values / 无默认值
//! - Just parameter grouping / 仅用于参数打包

use std::sync::Arc;
use vc_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
///
/// All dependencies are required - no defaults, no optional fields.
/// 所有依赖都是必需的 - 无默认值，无可选字段。
#[derive(Clone)]
pub struct AppDeps {
    // Upload dependencies / 上传依赖
    pub image_reader: Arc<dyn ImageReaderPort>,

    // Model dependencies / 模型依赖
    pub classifier: Arc<dyn ImageClassifierPort>,
    pub describer: Arc<dyn ImageDescriberPort>,

    // UI dependencies / UI 依赖
    pub notifier: Arc<dyn NotifierPort>,
    pub session_events: Arc<dyn SessionEventPort>,

    // System dependencies / 系统依赖
    pub clock: Arc<dyn ClockPort>,
}

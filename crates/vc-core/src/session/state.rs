use serde::{Deserialize, Serialize};

use crate::classification::{ClassificationResult, HistoryEntry};
use crate::ids::RequestToken;
use crate::image::EncodedImage;

/// Where the session is in the upload-to-result pipeline.
///
/// 会话在上传到结果流程中的阶段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Nothing uploaded yet.
    ///
    /// 尚未上传。
    Idle,
    /// Waiting for the model to answer.
    ///
    /// 等待模型响应。
    Loading,
    /// Last classification succeeded.
    ///
    /// 最近一次分类成功。
    Success,
    /// Last classification failed.
    ///
    /// 最近一次分类失败。
    Failure,
}

/// Everything the presentation layer needs to draw one frame.
///
/// Owned by a single running session and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub phase: SessionPhase,
    pub current_image: Option<EncodedImage>,
    pub current_result: Option<ClassificationResult>,
    pub error: Option<String>,
    /// Newest first. Grows for the lifetime of the session.
    pub history: Vec<HistoryEntry>,
    /// Token of the classification currently in flight, if any.
    pub active_request: Option<RequestToken>,
    /// Highest token ever accepted. Survives completion so an older upload
    /// can never take over after a newer one.
    #[serde(skip)]
    pub latest_request: Option<RequestToken>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Idle,
            current_image: None,
            current_result: None,
            error: None,
            history: Vec::new(),
            active_request: None,
            latest_request: None,
        }
    }
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Loading
    }
}

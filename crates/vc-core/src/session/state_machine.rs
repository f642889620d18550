//! Session state machine.
//!
//! Defines a pure state transition function for the upload/classify flow.
//! Side effects (calling the model, showing toasts) are returned as actions
//! and executed by the caller.

use super::notification::Notification;
use super::state::{SessionPhase, SessionState};
use crate::classification::{ClassificationResult, HistoryEntry};
use crate::ids::{HistoryEntryId, RequestToken};
use crate::image::EncodedImage;

/// Events that drive the session.
///
/// 驱动会话的事件。
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// An upload passed validation and was encoded.
    ///
    /// 上传通过校验并已编码。
    ImageEncoded {
        image: EncodedImage,
        token: RequestToken,
    },
    /// The model answered with a well-formed result.
    ///
    /// 模型返回了合法结果。
    ClassificationSucceeded {
        token: RequestToken,
        result: ClassificationResult,
        entry_id: HistoryEntryId,
        classified_at_ms: i64,
    },
    /// The model call failed or returned malformed data.
    ///
    /// 模型调用失败或返回了错误数据。
    ClassificationFailed { token: RequestToken, message: String },
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::ImageEncoded { .. } => "ImageEncoded",
            SessionEvent::ClassificationSucceeded { .. } => "ClassificationSucceeded",
            SessionEvent::ClassificationFailed { .. } => "ClassificationFailed",
        }
    }
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Send the image to the classifier.
    ///
    /// 将图片发送给分类器。
    Classify {
        image: EncodedImage,
        token: RequestToken,
    },
    /// Show a transient notification.
    ///
    /// 显示瞬时通知。
    Notify(Notification),
}

/// Pure session state machine.
///
/// 纯状态机：不包含副作用。
pub struct SessionStateMachine;

impl SessionStateMachine {
    /// Whether `event` would be applied to `state`.
    ///
    /// Uploads are only accepted with a token newer than any seen before.
    /// Completions are only accepted while loading and only for the token of
    /// the latest upload.
    pub fn accepts(state: &SessionState, event: &SessionEvent) -> bool {
        match event {
            SessionEvent::ImageEncoded { token, .. } => {
                state.latest_request.map_or(true, |latest| *token > latest)
            }
            SessionEvent::ClassificationSucceeded { token, .. }
            | SessionEvent::ClassificationFailed { token, .. } => {
                state.phase == SessionPhase::Loading
                    && state.active_request == Some(*token)
                    && state.current_image.is_some()
            }
        }
    }

    pub fn transition(
        state: SessionState,
        event: SessionEvent,
    ) -> (SessionState, Vec<SessionAction>) {
        if !Self::accepts(&state, &event) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                event = event.name(),
                phase = ?state.phase,
                active_request = ?state.active_request,
                "session event ignored"
            );
            return (state, Vec::new());
        }

        match event {
            SessionEvent::ImageEncoded { image, token } => (
                SessionState {
                    phase: SessionPhase::Loading,
                    current_image: Some(image.clone()),
                    current_result: None,
                    error: None,
                    active_request: Some(token),
                    latest_request: Some(token),
                    ..state
                },
                vec![SessionAction::Classify { image, token }],
            ),
            SessionEvent::ClassificationSucceeded {
                result,
                entry_id,
                classified_at_ms,
                ..
            } => {
                let mut history = state.history;
                if let Some(image) = state.current_image.clone() {
                    history.insert(
                        0,
                        HistoryEntry::new(entry_id, image, result.clone(), classified_at_ms),
                    );
                }
                let notification = Notification::classification_succeeded(&result);
                (
                    SessionState {
                        phase: SessionPhase::Success,
                        current_image: state.current_image,
                        current_result: Some(result),
                        error: None,
                        history,
                        active_request: None,
                        latest_request: state.latest_request,
                    },
                    vec![SessionAction::Notify(notification)],
                )
            }
            SessionEvent::ClassificationFailed { message, .. } => {
                let notification = Notification::classification_failed(&message);
                (
                    SessionState {
                        phase: SessionPhase::Failure,
                        current_result: None,
                        error: Some(message),
                        active_request: None,
                        ..state
                    },
                    vec![SessionAction::Notify(notification)],
                )
            }
        }
    }
}

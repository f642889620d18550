//! Session orchestrator.
//!
//! This module coordinates the session state machine and its side effects:
//! encoding uploads, calling the classifier, notifying and publishing state.

use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn, Instrument};

use vc_core::{
    classification::{ClassifyImageInput, HistoryEntry},
    ids::HistoryEntryId,
    image::{UploadError, UploadFile},
    ports::{ClockPort, NotifierPort, SessionEventPort},
    session::{Notification, SessionAction, SessionEvent, SessionState, SessionStateMachine},
};

use super::context::SessionContext;
use crate::deps::AppDeps;
use crate::usecases::{ClassifyImage, EncodeImage};

/// Orchestrator that drives session state and side effects.
///
/// One instance lives for the whole session. Uploads may be issued
/// concurrently; only the latest one is ever applied.
pub struct SessionOrchestrator {
    context: Arc<SessionContext>,

    // 能力型 use cases (依赖注入)
    encode_image: Arc<EncodeImage>,
    classify_image: Arc<ClassifyImage>,
    notifier: Arc<dyn NotifierPort>,
    session_events: Arc<dyn SessionEventPort>,
    clock: Arc<dyn ClockPort>,
}

impl SessionOrchestrator {
    pub fn new(
        encode_image: Arc<EncodeImage>,
        classify_image: Arc<ClassifyImage>,
        notifier: Arc<dyn NotifierPort>,
        session_events: Arc<dyn SessionEventPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            context: SessionContext::new(SessionState::default()).arc(),
            encode_image,
            classify_image,
            notifier,
            session_events,
            clock,
        }
    }

    pub fn from_deps(deps: &AppDeps) -> Self {
        Self::new(
            Arc::new(EncodeImage::from_ports(deps.image_reader.clone())),
            Arc::new(ClassifyImage::new(deps.classifier.clone())),
            deps.notifier.clone(),
            deps.session_events.clone(),
            deps.clock.clone(),
        )
    }

    /// Upload a file and run it through classification.
    ///
    /// Pre-flight failures (validation or read) leave the session untouched
    /// and are returned to the caller after a notification. Otherwise the
    /// state after the pipeline settles is returned; if a newer upload took
    /// over in the meantime, that is the newer upload's state.
    pub async fn upload_image(&self, file: &UploadFile) -> Result<SessionState, UploadError> {
        let span = info_span!("usecase.session_orchestrator.upload_image", file = %file.name);

        async {
            let image = match self.encode_image.execute(file).await {
                Ok(image) => image,
                Err(err) => {
                    self.notifier.notify(Notification::upload_failed(&err)).await;
                    return Err(err);
                }
            };

            let token = self.context.issue_token();
            debug!(%token, "upload accepted");
            Ok(self
                .dispatch(SessionEvent::ImageEncoded { image, token })
                .await)
        }
        .instrument(span)
        .await
    }

    pub async fn get_state(&self) -> SessionState {
        self.context.get_state().await
    }

    pub async fn history(&self) -> Vec<HistoryEntry> {
        self.context.get_state().await.history
    }

    async fn dispatch(&self, event: SessionEvent) -> SessionState {
        let span = info_span!("usecase.session_orchestrator.dispatch", event = event.name());

        async {
            let mut pending_events = vec![event];
            let mut latest = self.context.get_state().await;

            while let Some(event) = pending_events.pop() {
                let actions = {
                    let _dispatch_guard = self.context.acquire_dispatch_lock().await;
                    let current = self.context.get_state().await;

                    if !SessionStateMachine::accepts(&current, &event) {
                        info!(
                            event = event.name(),
                            active_request = ?current.active_request,
                            "discarding stale session event"
                        );
                        latest = current;
                        continue;
                    }

                    let from = current.phase;
                    let event_name = event.name();
                    let (next, actions) = SessionStateMachine::transition(current, event);
                    info!(from = ?from, to = ?next.phase, event = event_name, "session state transition");

                    self.context.set_state(next.clone()).await;
                    self.session_events
                        .emit_session_state_changed(next.clone())
                        .await;
                    latest = next;
                    actions
                };

                pending_events.extend(self.execute_actions(actions).await);
            }

            latest
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<SessionAction>) -> Vec<SessionEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            match action {
                SessionAction::Classify { image, token } => {
                    debug!(%token, "session executing classify");
                    let input = ClassifyImageInput {
                        photo_data_uri: image,
                    };
                    let event = match self.classify_image.execute(&input).await {
                        Ok(result) => {
                            let now_ms = self.clock.now_ms();
                            SessionEvent::ClassificationSucceeded {
                                token,
                                result,
                                entry_id: HistoryEntryId::at(now_ms),
                                classified_at_ms: now_ms,
                            }
                        }
                        Err(err) => {
                            error!(%token, error = %err, "classification error");
                            SessionEvent::ClassificationFailed {
                                token,
                                message: err.to_string(),
                            }
                        }
                    };
                    follow_up_events.push(event);
                }
                SessionAction::Notify(notification) => {
                    if notification.is_destructive() {
                        warn!(title = %notification.title, "session notification");
                    }
                    self.notifier.notify(notification).await;
                }
            }
        }
        follow_up_events
    }
}

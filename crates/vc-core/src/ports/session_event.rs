use crate::session::SessionState;

/// Observer of session state changes; the renderer hangs off this.
#[async_trait::async_trait]
pub trait SessionEventPort: Send + Sync {
    async fn emit_session_state_changed(&self, state: SessionState);
}

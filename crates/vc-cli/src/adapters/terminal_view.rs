use async_trait::async_trait;
use vc_core::ports::SessionEventPort;
use vc_core::session::SessionState;

use super::TerminalOut;
use crate::presentation::render_page;

/// Re-renders the whole page on every session state change.
pub struct TerminalSessionView {
    out: TerminalOut,
}

impl TerminalSessionView {
    pub fn new(out: TerminalOut) -> Self {
        Self { out }
    }
}

#[async_trait]
impl SessionEventPort for TerminalSessionView {
    async fn emit_session_state_changed(&self, state: SessionState) {
        self.out.write_block(&render_page(&state, None));
    }
}

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use vc_core::ids::RequestToken;
use vc_core::session::SessionState;

/// Shared session context containing state, dispatch lock and token counter.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: serializes transition + state update + emit.
/// - `state`: used for both reading (`get_state`) and writing (during dispatch).
///
/// Side effects run outside `dispatch_lock`, so a slow model call never
/// blocks a newer upload from entering `Loading`.
pub(crate) struct SessionContext {
    state: Mutex<SessionState>,
    dispatch_lock: Mutex<()>,
    last_token: AtomicU64,
}

impl SessionContext {
    pub(crate) fn new(initial_state: SessionState) -> Self {
        Self {
            state: Mutex::new(initial_state),
            dispatch_lock: Mutex::new(()),
            last_token: AtomicU64::new(0),
        }
    }

    pub(crate) fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Returns a snapshot of the current state.
    ///
    /// This is a lightweight read operation that does NOT acquire `dispatch_lock`.
    pub(crate) async fn get_state(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    pub(crate) async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// This should only be called after acquiring `dispatch_lock`.
    pub(crate) async fn set_state(&self, state: SessionState) {
        let mut guard = self.state.lock().await;
        *guard = state;
    }

    /// Hands out a token no earlier pipeline has used.
    pub(crate) fn issue_token(&self) -> RequestToken {
        RequestToken::new(self.last_token.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

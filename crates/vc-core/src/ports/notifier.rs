use crate::session::Notification;

/// Presentation-side toast channel, injected instead of a global.
#[async_trait::async_trait]
pub trait NotifierPort: Send + Sync {
    async fn notify(&self, notification: Notification);
}

use async_trait::async_trait;
use tracing::debug;
use vc_core::ports::NotifierPort;
use vc_core::session::Notification;

use super::TerminalOut;
use crate::presentation::render_notification;

/// Shows notifications as single lines on a terminal stream.
pub struct TerminalNotifier {
    out: TerminalOut,
}

impl TerminalNotifier {
    pub fn new(out: TerminalOut) -> Self {
        Self { out }
    }
}

#[async_trait]
impl NotifierPort for TerminalNotifier {
    async fn notify(&self, notification: Notification) {
        debug!(title = %notification.title, "notification shown");
        self.out.write_block(&render_notification(&notification));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::terminal_out::test_support::Captured;

    #[tokio::test]
    async fn writes_one_line_per_notification() {
        let captured = Captured::default();
        let notifier = TerminalNotifier::new(TerminalOut::from_writer(captured.clone()));

        notifier
            .notify(Notification::classification_failed("network error: reset"))
            .await;

        assert_eq!(
            captured.text(),
            "[!] Classification Failed: network error: reset\n"
        );
    }
}

//! Text rendering of the session.
//!
//! Everything here is a pure function of its arguments: the same state always
//! renders to the same text. Images are shown by MIME type and size only.

mod history_view;
mod result_view;
mod upload_view;

pub use history_view::render_history;
pub use result_view::render_result;
pub use upload_view::render_upload;

use vc_core::image::UploadError;
use vc_core::session::{Notification, SessionState};

const RULE: &str = "----------------------------------------";

/// Full page: upload control, current result and (if any) history.
///
/// `upload_error` is the inline message of the last pre-flight failure; it is
/// not part of the session state.
pub fn render_page(state: &SessionState, upload_error: Option<&UploadError>) -> String {
    let mut sections = vec![
        render_upload(state, upload_error),
        render_result(state),
    ];
    if let Some(history) = render_history(&state.history) {
        sections.push(history);
    }
    let separator = format!("\n{RULE}\n");
    sections.join(separator.as_str())
}

/// One-line form of a toast.
pub fn render_notification(notification: &Notification) -> String {
    let marker = if notification.is_destructive() { "!" } else { "*" };
    format!(
        "[{marker}] {}: {}",
        notification.title, notification.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use vc_core::classification::{ClassificationResult, HistoryEntry};
    use vc_core::ids::HistoryEntryId;
    use vc_core::image::{EncodedImage, MimeType, UploadError, UploadFile, UploadPolicy};
    use vc_core::session::SessionPhase;

    fn settled_state() -> SessionState {
        let image = EncodedImage::from_bytes(&MimeType::image_jpeg(), &[1, 2, 3, 4]);
        let result = ClassificationResult::new("a tabby cat", 0.926).unwrap();
        SessionState {
            phase: SessionPhase::Success,
            current_image: Some(image.clone()),
            current_result: Some(result.clone()),
            error: None,
            history: vec![HistoryEntry::new(
                HistoryEntryId::from("2026-01-01T00:00:00.000Z-1"),
                image,
                result,
                1,
            )],
            active_request: None,
            latest_request: None,
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let state = settled_state();
        assert_eq!(render_page(&state, None), render_page(&state.clone(), None));
    }

    #[test]
    fn empty_session_shows_placeholder_and_no_history() {
        let page = render_page(&SessionState::default(), None);

        assert!(page.contains("Upload an image to see the classification results here."));
        assert!(!page.contains("Classification History"));
    }

    #[test]
    fn settled_session_shows_result_and_history() {
        let page = render_page(&settled_state(), None);

        assert!(page.contains("a tabby cat"));
        assert!(page.contains("93%"));
        assert!(page.contains("Classification History"));
    }

    #[test]
    fn upload_error_is_shown_inline() {
        let too_large = UploadFile {
            name: "huge.png".to_string(),
            mime_type: MimeType::image_png(),
            size_bytes: 6 * 1024 * 1024,
            path: PathBuf::from("huge.png"),
        };
        let err: UploadError = UploadPolicy::default().validate(&too_large).unwrap_err().into();

        let page = render_page(&SessionState::default(), Some(&err));

        assert!(page.contains("Upload Error: File size exceeds the limit of 5MB."));
    }

    #[test]
    fn notification_line_marks_destructive() {
        let ok = Notification::classification_succeeded(
            &ClassificationResult::new("a tabby cat", 0.9).unwrap(),
        );
        let failed = Notification::classification_failed("network error: timeout");

        assert_eq!(
            render_notification(&ok),
            "[*] Classification Successful: Image classified as: a tabby cat"
        );
        assert_eq!(
            render_notification(&failed),
            "[!] Classification Failed: network error: timeout"
        );
    }
}

use vc_core::classification::ClassificationResult;
use vc_core::session::SessionState;

const BAR_WIDTH: usize = 20;

/// The "Classification Result" card.
///
/// Exactly one of loading, error, image (with or without result) or the
/// empty placeholder is shown, in that order of precedence.
pub fn render_result(state: &SessionState) -> String {
    let mut out = String::from("Classification Result\n");

    if state.is_loading() {
        out.push_str("  Classifying image...\n");
        return out;
    }
    if let Some(error) = &state.error {
        out.push_str(&format!("  Error classifying image: {error}\n"));
        return out;
    }
    match (&state.current_image, &state.current_result) {
        (Some(image), Some(result)) => {
            out.push_str(&format!("  Image: {image}\n"));
            out.push_str(&format!("  \u{2713} {}\n", result.description()));
            out.push_str(&format!("  Confidence Score {}\n", confidence_bar(result)));
        }
        (Some(image), None) => {
            out.push_str(&format!("  Image: {image}\n"));
            out.push_str("  No classification result available. Upload an image to start.\n");
        }
        (None, _) => {
            out.push_str("  Upload an image to see the classification results here.\n");
        }
    }
    out
}

fn confidence_bar(result: &ClassificationResult) -> String {
    let percent = result.confidence_percent();
    let filled = (usize::from(percent) * BAR_WIDTH + 50) / 100;
    format!(
        "[{}{}] {percent}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vc_core::image::{EncodedImage, MimeType};
    use vc_core::session::SessionPhase;

    fn with_image() -> SessionState {
        SessionState {
            current_image: Some(EncodedImage::from_bytes(&MimeType::image_png(), &[0; 10])),
            ..SessionState::default()
        }
    }

    #[test]
    fn loading_wins_over_everything() {
        let state = SessionState {
            phase: SessionPhase::Loading,
            ..with_image()
        };
        assert!(render_result(&state).contains("Classifying image..."));
    }

    #[test]
    fn error_is_prefixed() {
        let state = SessionState {
            phase: SessionPhase::Failure,
            error: Some("network error: connection refused".to_string()),
            ..with_image()
        };
        assert_eq!(
            render_result(&state),
            "Classification Result\n  Error classifying image: network error: connection refused\n"
        );
    }

    #[test]
    fn result_shows_description_and_rounded_percent() {
        let state = SessionState {
            phase: SessionPhase::Success,
            current_result: Some(ClassificationResult::new("a red bicycle", 0.875).unwrap()),
            ..with_image()
        };

        let text = render_result(&state);

        assert!(text.contains("Image: image/png (10 bytes)"));
        assert!(text.contains("a red bicycle"));
        assert!(text.contains("[##################--] 88%"));
    }

    #[test]
    fn bar_edges() {
        let zero = ClassificationResult::new("x", 0.0).unwrap();
        let full = ClassificationResult::new("x", 1.0).unwrap();
        assert_eq!(confidence_bar(&zero), format!("[{}] 0%", "-".repeat(20)));
        assert_eq!(confidence_bar(&full), format!("[{}] 100%", "#".repeat(20)));
    }
}

use vc_core::image::UploadError;
use vc_core::session::SessionState;

/// The upload control. It is disabled while a classification is in flight.
pub fn render_upload(state: &SessionState, upload_error: Option<&UploadError>) -> String {
    let mut out = String::from("Upload Image\n");
    if state.is_loading() {
        out.push_str("  (busy: a classification is in progress)\n");
    } else {
        out.push_str("  Enter the path of an image (JPEG, PNG, GIF, WEBP, etc.; max 5MB)\n");
    }
    if let Some(err) = upload_error {
        out.push_str(&format!("  Upload Error: {err}\n"));
    }
    out
}

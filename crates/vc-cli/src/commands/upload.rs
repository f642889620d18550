use std::path::Path;

use tracing::warn;
use vc_core::image::UploadError;
use vc_core::session::{Notification, SessionState};
use vc_infra::probe_upload;

use crate::bootstrap::AppRuntime;

/// Turn a path into an upload and run it through the session.
///
/// A path that cannot be probed is reported like any other pre-flight
/// failure: notified, returned, session untouched.
pub async fn upload_path(runtime: &AppRuntime, path: &Path) -> Result<SessionState, UploadError> {
    let file = match probe_upload(path).await {
        Ok(file) => file,
        Err(err) => {
            warn!(path = %path.display(), error = ?err, "upload probe failed");
            let err = UploadError::from(err);
            runtime
                .deps
                .notifier
                .notify(Notification::upload_failed(&err))
                .await;
            return Err(err);
        }
    };
    runtime.session().upload_image(&file).await
}

use std::path::Path;

use anyhow::Context;
use vc_core::image::UploadError;
use vc_infra::probe_upload;

use crate::adapters::TerminalOut;
use crate::bootstrap::AppRuntime;

/// Print a caption for one image. Failures end the command with an error.
pub async fn describe(runtime: &AppRuntime, out: &TerminalOut, path: &Path) -> anyhow::Result<()> {
    let file = probe_upload(path)
        .await
        .map_err(UploadError::from)
        .context("Upload Error")?;

    let description = runtime
        .usecases()
        .describe_image()
        .execute(&file)
        .await
        .context("Error describing image")?;

    out.write_block(description.description());
    Ok(())
}

use std::path::PathBuf;

use anyhow::Context;
use vc_core::session::SessionPhase;

use super::upload_path;
use crate::adapters::TerminalOut;
use crate::bootstrap::AppRuntime;
use crate::presentation::render_upload;

/// Upload `paths` one after another.
///
/// In text mode the session view renders every state change; in JSON mode
/// only the final state is printed.
pub async fn classify(
    runtime: &AppRuntime,
    out: &TerminalOut,
    paths: &[PathBuf],
    json: bool,
) -> anyhow::Result<()> {
    let mut failures = 0usize;
    for path in paths {
        match upload_path(runtime, path).await {
            Ok(state) if state.phase == SessionPhase::Failure => failures += 1,
            Ok(_) => {}
            Err(err) => {
                failures += 1;
                if !json {
                    let state = runtime.session().get_state().await;
                    out.write_block(&render_upload(&state, Some(&err)));
                }
            }
        }
    }

    if json {
        let state = runtime.session().get_state().await;
        let rendered =
            serde_json::to_string_pretty(&state).context("Failed to serialize session state")?;
        out.write_block(&rendered);
    }

    tracing::info!(
        uploads = paths.len(),
        failures,
        "classify run finished"
    );
    Ok(())
}

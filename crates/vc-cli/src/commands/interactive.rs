use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use super::upload_path;
use crate::adapters::TerminalOut;
use crate::bootstrap::AppRuntime;
use crate::presentation::{render_history, render_page, render_upload};

const HELP: &str = "Commands: <path> upload an image | history | help | quit";
const NO_HISTORY: &str = "No classifications yet. Upload an image to see history.";

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Empty,
    Quit,
    Help,
    History,
    Upload(PathBuf),
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line {
        "" => Input::Empty,
        "quit" | "exit" => Input::Quit,
        "help" | "?" => Input::Help,
        "history" => Input::History,
        // Drag-and-drop into a terminal often quotes the path.
        path => Input::Upload(PathBuf::from(path.trim_matches(|c| c == '"' || c == '\''))),
    }
}

/// Read commands from stdin until `quit` or end of input.
///
/// Each upload runs as its own task, so a new image can be submitted while
/// an earlier one is still being classified; only the latest is shown.
pub async fn interactive(runtime: Arc<AppRuntime>, out: TerminalOut) -> anyhow::Result<()> {
    out.write_block(&render_page(&runtime.session().get_state().await, None));
    out.write_block(HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut uploads = JoinSet::new();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match parse_input(&line) {
            Input::Empty => {}
            Input::Quit => break,
            Input::Help => out.write_block(HELP),
            Input::History => {
                let history = runtime.session().history().await;
                out.write_block(&render_history(&history).unwrap_or_else(|| NO_HISTORY.to_string()));
            }
            Input::Upload(path) => {
                let runtime = runtime.clone();
                let out = out.clone();
                uploads.spawn(async move {
                    if let Err(err) = upload_path(&runtime, &path).await {
                        let state = runtime.session().get_state().await;
                        out.write_block(&render_upload(&state, Some(&err)));
                    }
                });
            }
        }

        while let Some(finished) = uploads.try_join_next() {
            if let Err(err) = finished {
                warn!(error = %err, "upload task failed");
            }
        }
    }

    debug!(pending = uploads.len(), "waiting for in-flight uploads");
    while let Some(finished) = uploads.join_next().await {
        if let Err(err) = finished {
            warn!(error = %err, "upload task failed");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_paths() {
        assert_eq!(parse_input("   "), Input::Empty);
        assert_eq!(parse_input("quit"), Input::Quit);
        assert_eq!(parse_input(" history \n"), Input::History);
        assert_eq!(
            parse_input("'/home/me/My Cat.jpg'"),
            Input::Upload(PathBuf::from("/home/me/My Cat.jpg"))
        );
    }
}

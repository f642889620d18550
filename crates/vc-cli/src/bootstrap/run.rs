//! Process entry: resolve paths, load environment and config, start tracing,
//! wire dependencies and hand over to the selected command.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info};
use vc_app::app_paths::AppPaths;
use vc_core::ports::AppDirsPort;
use vc_infra::DirsAppDirsAdapter;

use super::config::resolve_config;
use super::runtime::AppRuntime;
use super::tracing::init_tracing_subscriber;
use super::wiring::{resolve_model_config, wire_dependencies, UiPorts};
use crate::adapters::{TerminalNotifier, TerminalOut, TerminalSessionView};
use crate::cli::{Cli, Command};
use crate::commands;

/// `.env` in the working directory first, then the one next to the config
/// file. Variables already set are never overwritten.
fn load_dotenv(paths: &AppPaths) {
    let loaded_cwd = dotenvy::dotenv().is_ok();
    let loaded_config_dir = load_dotenv_file(&paths.env_path);
    debug!(loaded_cwd, loaded_config_dir, "dotenv files processed");
}

fn load_dotenv_file(path: &Path) -> bool {
    path.is_file() && dotenvy::from_path(path).is_ok()
}

fn ui_ports(command: &Command) -> (UiPorts, TerminalOut) {
    let stdout = TerminalOut::stdout();
    match command {
        Command::Classify { json: true, .. } => (
            UiPorts {
                notifier: Arc::new(TerminalNotifier::new(TerminalOut::stderr())),
                session_events: Arc::new(TerminalSessionView::new(TerminalOut::sink())),
            },
            stdout,
        ),
        _ => (
            UiPorts {
                notifier: Arc::new(TerminalNotifier::new(stdout.clone())),
                session_events: Arc::new(TerminalSessionView::new(stdout.clone())),
            },
            stdout,
        ),
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application directories")?;
    let paths = AppPaths::from_app_dirs(&app_dirs);

    load_dotenv(&paths);
    init_tracing_subscriber(&paths).context("Failed to initialize tracing")?;

    let config = resolve_config(cli.config.clone(), &paths.config_path)?;
    let model = resolve_model_config(&config, |key| std::env::var(key).ok())?;

    let command = cli.command_or_default();
    let (ui, out) = ui_ports(&command);
    let runtime = Arc::new(AppRuntime::new(wire_dependencies(model, ui)?));
    info!(?command, "visionary started");

    match command {
        Command::Classify { paths, json } => commands::classify(&runtime, &out, &paths, json).await,
        Command::Describe { path } => commands::describe(&runtime, &out, &path).await,
        Command::Interactive => commands::interactive(runtime, out).await,
    }
}

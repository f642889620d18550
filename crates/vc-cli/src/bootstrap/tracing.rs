//! Tracing configuration for Visionary Classifier
//!
//! ## Architecture / 架构
//!
//! - **stderr layer**: warnings and errors only, it shares the terminal with
//!   the rendered page (stdout carries rendered output and JSON)
//! - **file layer**: non-blocking writer into `<data_local_dir>/visionary/logs`,
//!   at the build-type level
//! - **Sentry layer**: only when `SENTRY_DSN` is set
//!
//! Image payloads are never recorded; spans carry MIME type and length only.

use std::{fs, io, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};
use vc_app::app_paths::AppPaths;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static SENTRY_GUARD: OnceLock<sentry::ClientInitGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "visionary.log";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug level for workspace crates
/// - **Production**: info level for workspace crates
/// - **HTTP stack**: kept at warn, it is noisy at debug
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        "hyper=warn".to_string(),
        "hyper_util=warn".to_string(),
        "reqwest=warn".to_string(),
        "rustls=warn".to_string(),
        format!("vc_app={level}"),
        format!("vc_infra={level}"),
    ]
}

/// Directives for the stderr layer: quiet unless something went wrong.
fn build_stderr_directives() -> Vec<String> {
    vec!["warn".to_string()]
}

/// `RUST_LOG` wins over the built-in defaults for every layer.
fn env_filter_or(defaults: &[String]) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaults.join(",")))
}

/// Initialize the tracing subscriber
///
/// ## Behavior / 行为
///
/// - **Environment filter**: Respects RUST_LOG; otherwise stderr shows `warn`
///   and the file gets the build-type level
/// - **File logging**: falls back to stderr only if the log dir is unusable
///
/// ## Errors / 错误
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(paths: &AppPaths) -> anyhow::Result<()> {
    let is_dev = is_development();

    // Step 1: Build per-layer filters
    let stderr_filter = env_filter_or(&build_stderr_directives());
    let file_filter = env_filter_or(&build_filter_directives(is_dev));

    // Step 2: Initialize Sentry
    // - Only if SENTRY_DSN is set
    // - Guard must be kept alive
    let sentry_layer = if let Ok(dsn) = std::env::var("SENTRY_DSN") {
        let guard = sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                traces_sample_rate: 1.0,
                ..Default::default()
            },
        ));

        if SENTRY_GUARD.set(guard).is_err() {
            eprintln!("Sentry guard already initialized");
        }

        Some(sentry_tracing::layer())
    } else {
        None
    };

    // Step 3: Create writers
    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match build_file_writer(paths) {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, logging to stderr only: {err}");
            None
        }
    };

    // Step 4: Create fmt layers
    // "2026-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer)
        .with_filter(stderr_filter);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(
                "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            ))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(file_filter)
    });

    // Step 5: Register the global subscriber
    registry()
        .with(sentry_layer)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(paths: &AppPaths) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(&paths.logs_dir)?;

    let file_appender = tracing_appender::rolling::never(&paths.logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

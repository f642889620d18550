//! # vc-infra
//!
//! Adapters implementing the `vc-core` ports: the Gemini model client, the
//! filesystem image reader, per-user directories and the system clock.

pub mod app_dirs;
pub mod fs;
pub mod gemini;
pub mod time;

pub use app_dirs::DirsAppDirsAdapter;
pub use fs::{probe_upload, TokioImageReader};
pub use gemini::{GeminiClient, GeminiConfig};
pub use time::SystemClock;

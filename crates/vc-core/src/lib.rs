//! # vc-core
//!
//! Core domain models and business logic for Visionary Classifier.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod app_dirs;
pub mod classification;
pub mod config;
pub mod ids;
pub mod image;
pub mod ports;
pub mod session;

// Re-export commonly used types at the crate root
pub use classification::{ClassificationResult, HistoryEntry, ImageDescription};
pub use config::AppConfig;
pub use ids::{HistoryEntryId, RequestToken};
pub use image::{EncodedImage, MimeType, UploadError, UploadFile};
pub use session::{SessionPhase, SessionState, SessionStateMachine};

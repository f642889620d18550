//! Gemini `generateContent` adapter for the classifier and describer ports.

mod client;
mod config;
mod prompt;
mod wire;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use prompt::{CAPTION_PROMPT, CLASSIFY_PROMPT};

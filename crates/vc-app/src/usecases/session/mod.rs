//! Session use cases.
//!
//! This module exposes the session orchestrator.

mod context;
pub mod orchestrator;

pub use orchestrator::SessionOrchestrator;

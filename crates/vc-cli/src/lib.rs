//! Terminal front-end for Visionary Classifier.
//!
//! - `bootstrap`: configuration, tracing, dependency wiring and process entry
//! - `presentation`: text rendering of the session, a pure function of state
//! - `adapters`: terminal implementations of the notifier and state observer ports
//! - `commands`: the `classify`, `describe` and interactive runners

pub mod adapters;
pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod presentation;

pub use cli::{Cli, Command};

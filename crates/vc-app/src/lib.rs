//! Visionary Classifier Application Orchestration Layer
//!
//! This crate contains business logic use cases and session orchestration.

pub mod app_paths;
pub mod deps;
pub mod usecases;

pub use deps::AppDeps;

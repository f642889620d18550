pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config};
pub use run::run;
pub use runtime::{AppRuntime, UseCases};
pub use wiring::{resolve_model_config, wire_dependencies, UiPorts, WiringError};

//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! the model service, the filesystem and the terminal.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `vc-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Will it be depended upon by multiple use cases or domains?**
//! 3. **Is it implemented by the infrastructure or front-end layer?**
//!
//! If all three answers are **yes**, place it in `vc-core/ports`.
//! Otherwise, place it in the relevant `domain` submodule.

pub mod app_dirs;
pub mod classifier;
mod clock;
pub mod describer;
pub mod errors;
pub mod image_reader;
pub mod notifier;
pub mod session_event;

pub use app_dirs::AppDirsPort;
pub use classifier::ImageClassifierPort;
pub use clock::*;
pub use describer::ImageDescriberPort;
pub use errors::{AppDirsError, ClassificationError};
pub use image_reader::ImageReaderPort;
pub use notifier::NotifierPort;
pub use session_event::SessionEventPort;

//! Business logic use cases
//!
//! [file picker]
//!        ↓
//! EncodeImage          → validation + read + data URI
//!        ↓
//! SessionOrchestrator  → state machine, history, notifications
//!        ↓
//! ClassifyImage        → model round trip
//!
//! DescribeImage is the standalone caption flow; it never touches the session.

pub mod classify_image;
pub mod describe_image;
pub mod encode_image;
pub mod session;

pub use classify_image::ClassifyImage;
pub use describe_image::{DescribeImage, DescribeImageError};
pub use encode_image::EncodeImage;
pub use session::SessionOrchestrator;

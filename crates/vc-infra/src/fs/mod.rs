//! Filesystem adapters: turning a path into an upload and reading it.

mod image_reader;
mod upload_probe;

pub use image_reader::TokioImageReader;
pub use upload_probe::{mime_from_extension, probe_upload};

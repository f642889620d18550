//! Upload candidates and the pre-flight checks applied before encoding.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::MimeType;

/// Largest accepted upload: 5 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// A user-selected file, as reported by the file picker.
///
/// `mime_type` and `size_bytes` are whatever the picker reported; nothing is
/// known about the content until it is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadFile {
    pub name: String,
    pub mime_type: MimeType,
    pub size_bytes: u64,
    pub path: PathBuf,
}

/// Reasons an upload is rejected before anything is read.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Invalid file type. Please upload an image (JPEG, PNG, GIF, WEBP, etc.).")]
    InvalidType { mime_type: String },

    #[error("File size exceeds the limit of {}MB.", .limit_bytes / (1024 * 1024))]
    TooLarge { size_bytes: u64, limit_bytes: u64 },
}

/// Reasons reading an accepted upload failed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ReadError {
    #[error("Error reading the image file.")]
    Io { reason: String },

    #[error("Failed to read the image file.")]
    Empty,
}

/// Pre-flight failure of an upload. Never stored in the session state.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum UploadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Read(#[from] ReadError),
}

/// Type and size rules applied to every upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    max_size_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_size_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl UploadPolicy {
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    /// Check type first, then size. Both checks use only picker metadata.
    pub fn validate(&self, file: &UploadFile) -> Result<(), ValidationError> {
        if !file.mime_type.is_image() {
            return Err(ValidationError::InvalidType {
                mime_type: file.mime_type.to_string(),
            });
        }
        if file.size_bytes > self.max_size_bytes {
            return Err(ValidationError::TooLarge {
                size_bytes: file.size_bytes,
                limit_bytes: self.max_size_bytes,
            });
        }
        Ok(())
    }
}

use async_trait::async_trait;

use crate::image::{ReadError, UploadFile};

/// Reads the content of an upload that already passed validation.
#[async_trait]
pub trait ImageReaderPort: Send + Sync {
    /// Read the whole file.
    /// - Err(ReadError::Io) if the underlying read fails
    async fn read(&self, file: &UploadFile) -> Result<Vec<u8>, ReadError>;
}


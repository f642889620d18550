use std::path::Path;

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};
use vc_core::image::{ReadError, UploadFile, MAX_UPLOAD_BYTES};
use vc_core::ports::ImageReaderPort;

/// Reads uploads from the local filesystem.
///
/// Reads at most `limit_bytes + 1` bytes. A file that grew after probing
/// comes back over the limit instead of being loaded whole.
pub struct TokioImageReader {
    limit_bytes: u64,
}

impl TokioImageReader {
    pub fn new(limit_bytes: u64) -> Self {
        Self { limit_bytes }
    }

    async fn read_capped(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        let file = File::open(path).await?;
        let mut bytes = Vec::new();
        file.take(self.limit_bytes.saturating_add(1))
            .read_to_end(&mut bytes)
            .await?;
        Ok(bytes)
    }
}

impl Default for TokioImageReader {
    fn default() -> Self {
        Self::new(MAX_UPLOAD_BYTES)
    }
}

#[async_trait]
impl ImageReaderPort for TokioImageReader {
    #[tracing::instrument(name = "infra.fs.read_image", skip_all, fields(path = %file.path.display()))]
    async fn read(&self, file: &UploadFile) -> Result<Vec<u8>, ReadError> {
        match self.read_capped(&file.path).await {
            Ok(bytes) => {
                debug!(len = bytes.len(), "image file read");
                Ok(bytes)
            }
            Err(err) => {
                warn!(error = %err, "failed to read image file");
                Err(ReadError::Io {
                    reason: err.to_string(),
                })
            }
        }
    }
}

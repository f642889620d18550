//! Use case for turning a picked file into a data URI
//! 将选中的文件编码为 data URI 的用例

use std::sync::Arc;

use tracing::{debug, warn};
use vc_core::image::{
    EncodedImage, ReadError, UploadError, UploadFile, UploadPolicy, ValidationError,
};
use vc_core::ports::ImageReaderPort;

/// Validate an upload and encode its content.
///
/// ## Behavior / 行为
/// - Rejects non-image types and files above the size limit without reading
/// - Reads the file through the reader port and encodes it as base64
/// - Checks the limit again against what was actually read
///
/// Exactly one of `EncodedImage` or `UploadError` is produced per call.
pub struct EncodeImage {
    reader: Arc<dyn ImageReaderPort>,
    policy: UploadPolicy,
}

impl EncodeImage {
    pub fn new(reader: Arc<dyn ImageReaderPort>, policy: UploadPolicy) -> Self {
        Self { reader, policy }
    }

    pub fn from_ports(reader: Arc<dyn ImageReaderPort>) -> Self {
        Self::new(reader, UploadPolicy::default())
    }

    #[tracing::instrument(
        name = "usecase.encode_image.execute",
        skip(self, file),
        fields(file = %file.name, mime_type = %file.mime_type, size_bytes = file.size_bytes)
    )]
    pub async fn execute(&self, file: &UploadFile) -> Result<EncodedImage, UploadError> {
        if let Err(err) = self.policy.validate(file) {
            warn!(error = %err, "upload rejected by policy");
            return Err(err.into());
        }

        let bytes = self.reader.read(file).await.map_err(|err| {
            warn!(error = ?err, "upload read failed");
            err
        })?;
        if bytes.is_empty() {
            warn!("upload read returned no data");
            return Err(ReadError::Empty.into());
        }
        let read_len = bytes.len() as u64;
        if read_len > self.policy.max_size_bytes() {
            warn!(read_len, "upload grew past the size limit after validation");
            return Err(ValidationError::TooLarge {
                size_bytes: read_len,
                limit_bytes: self.policy.max_size_bytes(),
            }
            .into());
        }

        let image = EncodedImage::from_bytes(&file.mime_type, &bytes);
        debug!(decoded_len = bytes.len(), "upload encoded");
        Ok(image)
    }
}

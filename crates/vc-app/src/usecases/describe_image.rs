use std::sync::Arc;

use tracing::{info, info_span, Instrument};
use vc_core::classification::ImageDescription;
use vc_core::image::{UploadError, UploadFile};
use vc_core::ports::{ClassificationError, ImageDescriberPort};

use super::EncodeImage;

#[derive(Debug, thiserror::Error)]
pub enum DescribeImageError {
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Model(#[from] ClassificationError),
}

/// Generate a caption for a picked file.
/// 为选中的文件生成描述。
///
/// Shares the encoder with the session flow but keeps no state.
pub struct DescribeImage {
    encode_image: Arc<EncodeImage>,
    describer: Arc<dyn ImageDescriberPort>,
}

impl DescribeImage {
    pub fn new(encode_image: Arc<EncodeImage>, describer: Arc<dyn ImageDescriberPort>) -> Self {
        Self {
            encode_image,
            describer,
        }
    }

    pub async fn execute(&self, file: &UploadFile) -> Result<ImageDescription, DescribeImageError> {
        let span = info_span!("usecase.describe_image.execute", file = %file.name);

        async {
            let image = self.encode_image.execute(file).await?;
            let description = self.describer.describe(&image).await?;
            info!(chars = description.description().len(), "image described");
            Ok(description)
        }
        .instrument(span)
        .await
    }
}

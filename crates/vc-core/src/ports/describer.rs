use async_trait::async_trait;

use crate::classification::ImageDescription;
use crate::image::EncodedImage;
use crate::ports::errors::ClassificationError;

/// Caption generation for an image. Same transport rules as classification.
#[async_trait]
pub trait ImageDescriberPort: Send + Sync {
    async fn describe(&self, image: &EncodedImage) -> Result<ImageDescription, ClassificationError>;
}

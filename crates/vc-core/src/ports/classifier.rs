use async_trait::async_trait;

use crate::classification::{ClassificationResult, ClassifyImageInput};
use crate::ports::errors::ClassificationError;

/// Single request/response round trip to the image classification model.
///
/// No retry, no timeout, no streaming. Implementations must treat any
/// response that does not fit the result contract as
/// [`ClassificationError::MalformedResponse`].
#[async_trait]
pub trait ImageClassifierPort: Send + Sync {
    async fn classify(
        &self,
        input: &ClassifyImageInput,
    ) -> Result<ClassificationResult, ClassificationError>;
}


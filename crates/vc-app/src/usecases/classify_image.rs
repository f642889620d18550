use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};
use vc_core::classification::{ClassificationResult, ClassifyImageInput};
use vc_core::ports::{ClassificationError, ImageClassifierPort};

/// Send one encoded image to the classifier.
/// 将一张已编码图片发送给分类器。
pub struct ClassifyImage {
    classifier: Arc<dyn ImageClassifierPort>,
}

impl ClassifyImage {
    pub fn new(classifier: Arc<dyn ImageClassifierPort>) -> Self {
        Self { classifier }
    }

    pub async fn execute(
        &self,
        input: &ClassifyImageInput,
    ) -> Result<ClassificationResult, ClassificationError> {
        let span = info_span!(
            "usecase.classify_image.execute",
            mime_type = input.photo_data_uri.mime_type(),
            decoded_len = input.photo_data_uri.decoded_len()
        );

        async {
            match self.classifier.classify(input).await {
                Ok(result) => {
                    info!(
                        description = result.description(),
                        confidence = result.confidence_score(),
                        "image classified"
                    );
                    Ok(result)
                }
                Err(err) => {
                    warn!(error = %err, "image classification failed");
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }
}

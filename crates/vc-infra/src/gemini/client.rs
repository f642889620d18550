use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use vc_core::classification::{ClassificationResult, ClassifyImageInput, ImageDescription};
use vc_core::image::EncodedImage;
use vc_core::ports::{ClassificationError, ImageClassifierPort, ImageDescriberPort};

use super::config::GeminiConfig;
use super::prompt::{caption_schema, classify_schema, CAPTION_PROMPT, CLASSIFY_PROMPT};
use super::wire::{
    ApiErrorEnvelope, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, Part,
};

/// Client for Gemini's `generateContent` endpoint.
///
/// One round trip per call: no retry, no streaming and no client-side timeout.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ClassificationError> {
        if config.api_key.trim().is_empty() {
            return Err(ClassificationError::Config("API key is empty".to_string()));
        }
        if config.model.trim().is_empty() {
            return Err(ClassificationError::Config("model name is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("visionary/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClassificationError::Config(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Send `prompt` plus the image and parse the model's JSON answer as `T`.
    async fn generate<T: DeserializeOwned>(
        &self,
        prompt: &str,
        schema: Value,
        image: &EncodedImage,
    ) -> Result<T, ClassificationError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part::Text { text: prompt },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type(),
                            data: image.payload(),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        };

        let response = self
            .http
            .post(self.config.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClassificationError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClassificationError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| {
                    let trimmed = body.trim();
                    if trimmed.is_empty() {
                        status.canonical_reason().unwrap_or("unknown error").to_string()
                    } else {
                        trimmed.to_string()
                    }
                });
            warn!(status = status.as_u16(), message = %message, "model service rejected request");
            return Err(ClassificationError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| ClassificationError::MalformedResponse(e.to_string()))?;
        let text = envelope.first_text().ok_or_else(|| {
            ClassificationError::MalformedResponse("response has no candidate text".to_string())
        })?;
        debug!(len = text.len(), "model answered");

        serde_json::from_str(&text).map_err(|e| ClassificationError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl ImageClassifierPort for GeminiClient {
    #[tracing::instrument(
        name = "infra.gemini.classify",
        skip_all,
        fields(model = %self.config.model, mime_type = input.photo_data_uri.mime_type())
    )]
    async fn classify(
        &self,
        input: &ClassifyImageInput,
    ) -> Result<ClassificationResult, ClassificationError> {
        self.generate(CLASSIFY_PROMPT, classify_schema(), &input.photo_data_uri)
            .await
    }
}

#[async_trait]
impl ImageDescriberPort for GeminiClient {
    #[tracing::instrument(
        name = "infra.gemini.describe",
        skip_all,
        fields(model = %self.config.model, mime_type = image.mime_type())
    )]
    async fn describe(&self, image: &EncodedImage) -> Result<ImageDescription, ClassificationError> {
        self.generate(CAPTION_PROMPT, caption_schema(), image).await
    }
}

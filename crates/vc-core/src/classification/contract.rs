//! Request/response contract of the classification and caption flows.
//!
//! These are the shapes exchanged with the model service. Output types are
//! untrusted until converted into [`ClassificationResult`] or
//! [`ImageDescription`].
//!
//! [`ClassificationResult`]: super::ClassificationResult
//! [`ImageDescription`]: super::ImageDescription

use serde::{Deserialize, Serialize};

use crate::image::EncodedImage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyImageInput {
    /// A photo to classify, as a data URI that must include a MIME type and
    /// use Base64 encoding: `data:<mimetype>;base64,<encoded_data>`.
    pub photo_data_uri: EncodedImage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyImageOutput {
    /// A description of the image content.
    pub description: String,
    /// The confidence score of the classification (0-1).
    pub confidence_score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateImageDescriptionOutput {
    /// A human-like summary of the image content.
    pub description: String,
}

use serde::{Deserialize, Serialize};

use super::{GenerateImageDescriptionOutput, ResultError};

/// A free-form caption for an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GenerateImageDescriptionOutput")]
pub struct ImageDescription {
    description: String,
}

impl ImageDescription {
    pub fn new(description: impl Into<String>) -> Result<Self, ResultError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ResultError::EmptyDescription);
        }
        Ok(Self { description })
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl TryFrom<GenerateImageDescriptionOutput> for ImageDescription {
    type Error = ResultError;

    fn try_from(output: GenerateImageDescriptionOutput) -> Result<Self, Self::Error> {
        Self::new(output.description)
    }
}

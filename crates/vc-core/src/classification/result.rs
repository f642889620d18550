use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ClassifyImageOutput;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultError {
    #[error("description is empty")]
    EmptyDescription,

    #[error("confidence score {0} is outside [0, 1]")]
    ConfidenceOutOfRange(String),
}

/// Outcome of one successful classification. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ClassifyImageOutput")]
pub struct ClassificationResult {
    description: String,
    confidence_score: f64,
}

impl ClassificationResult {
    pub fn new(description: impl Into<String>, confidence_score: f64) -> Result<Self, ResultError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ResultError::EmptyDescription);
        }
        // NaN fails both comparisons.
        if !(0.0..=1.0).contains(&confidence_score) {
            return Err(ResultError::ConfidenceOutOfRange(confidence_score.to_string()));
        }
        Ok(Self {
            description,
            confidence_score,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn confidence_score(&self) -> f64 {
        self.confidence_score
    }

    /// Confidence as a whole percentage, rounded half away from zero.
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence_score * 100.0).round() as u8
    }
}

impl TryFrom<ClassifyImageOutput> for ClassificationResult {
    type Error = ResultError;

    fn try_from(output: ClassifyImageOutput) -> Result<Self, Self::Error> {
        Self::new(output.description, output.confidence_score)
    }
}

impl From<ClassificationResult> for ClassifyImageOutput {
    fn from(result: ClassificationResult) -> Self {
        Self {
            description: result.description,
            confidence_score: result.confidence_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_bounds() {
        assert!(ClassificationResult::new("a cat", 0.0).is_ok());
        assert!(ClassificationResult::new("a cat", 1.0).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range_and_nan() {
        assert!(matches!(
            ClassificationResult::new("a cat", 1.01),
            Err(ResultError::ConfidenceOutOfRange(_))
        ));
        assert!(matches!(
            ClassificationResult::new("a cat", -0.1),
            Err(ResultError::ConfidenceOutOfRange(_))
        ));
        assert!(matches!(
            ClassificationResult::new("a cat", f64::NAN),
            Err(ResultError::ConfidenceOutOfRange(_))
        ));
    }

    #[test]
    fn test_new_rejects_blank_description() {
        assert_eq!(
            ClassificationResult::new("  ", 0.5),
            Err(ResultError::EmptyDescription)
        );
    }

    #[test]
    fn test_confidence_percent_rounds() {
        let result = ClassificationResult::new("a dog", 0.876).unwrap();
        assert_eq!(result.confidence_percent(), 88);
        let result = ClassificationResult::new("a dog", 0.125).unwrap();
        assert_eq!(result.confidence_percent(), 13);
    }

    #[test]
    fn test_deserialize_validates_contract() {
        let ok: ClassificationResult =
            serde_json::from_str(r#"{"description":"a bird","confidenceScore":0.9}"#).unwrap();
        assert_eq!(ok.description(), "a bird");
        assert_eq!(ok.confidence_score(), 0.9);

        assert!(serde_json::from_str::<ClassificationResult>(
            r#"{"description":"a bird","confidenceScore":4}"#
        )
        .is_err());
        assert!(
            serde_json::from_str::<ClassificationResult>(r#"{"description":"a bird"}"#).is_err()
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = ClassificationResult::new("a bird", 0.5).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["confidenceScore"], 0.5);
        assert_eq!(json["description"], "a bird");
    }
}

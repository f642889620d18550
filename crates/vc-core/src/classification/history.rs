use serde::{Deserialize, Serialize};

use super::ClassificationResult;
use crate::ids::HistoryEntryId;
use crate::image::EncodedImage;

/// One past classification. Created on success, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: HistoryEntryId,
    pub image: EncodedImage,
    pub result: ClassificationResult,
    pub classified_at_ms: i64,
}

impl HistoryEntry {
    pub fn new(
        id: HistoryEntryId,
        image: EncodedImage,
        result: ClassificationResult,
        classified_at_ms: i64,
    ) -> Self {
        Self {
            id,
            image,
            result,
            classified_at_ms,
        }
    }
}

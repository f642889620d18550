use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// History entry identifier.
/// Format: "{rfc3339-timestamp}-{uuid-v4}"
///
/// The timestamp prefix keeps ids human-sortable, the uuid suffix keeps them
/// unique when two classifications finish within the same millisecond.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryEntryId(String);

impl_id!(HistoryEntryId);

impl HistoryEntryId {
    /// Generate a fresh id stamped with the given wall-clock time.
    pub fn at(now_ms: i64) -> Self {
        let stamp = DateTime::<Utc>::from_timestamp_millis(now_ms)
            .unwrap_or_default()
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        Self(format!("{}-{}", stamp, uuid::Uuid::new_v4()))
    }
}

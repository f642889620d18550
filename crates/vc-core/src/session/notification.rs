use serde::{Deserialize, Serialize};

use crate::classification::ClassificationResult;
use crate::image::UploadError;

/// Visual weight of a notification.
///
/// 通知的视觉样式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// Transient user-visible message (toast).
///
/// 瞬时的用户可见消息（toast）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn classification_succeeded(result: &ClassificationResult) -> Self {
        Self {
            title: "Classification Successful".to_string(),
            description: format!("Image classified as: {}", result.description()),
            variant: NotificationVariant::Default,
        }
    }

    pub fn classification_failed(message: &str) -> Self {
        Self {
            title: "Classification Failed".to_string(),
            description: message.to_string(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn upload_failed(error: &UploadError) -> Self {
        Self {
            title: "Upload Error".to_string(),
            description: error.to_string(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

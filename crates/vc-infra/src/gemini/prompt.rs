use serde_json::{json, Value};

pub const CLASSIFY_PROMPT: &str = "You are an AI image classifier.  Describe the contents of the image, and provide a confidence score (0-1) for your classification.";

pub const CAPTION_PROMPT: &str = "You are an AI model that specializes in generating descriptive captions of images. Based on the image provided, create a detailed and engaging caption that summarizes the content, context, and key elements of the image, so a user can understand and share the image's context more easily.";

/// Response schema matching `ClassifyImageOutput`.
pub(crate) fn classify_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "description": {
                "type": "STRING",
                "description": "A description of the image content."
            },
            "confidenceScore": {
                "type": "NUMBER",
                "description": "The confidence score of the classification (0-1)."
            }
        },
        "required": ["description", "confidenceScore"]
    })
}

/// Response schema matching `GenerateImageDescriptionOutput`.
pub(crate) fn caption_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "description": {
                "type": "STRING",
                "description": "A human-like summary of the image content."
            }
        },
        "required": ["description"]
    })
}

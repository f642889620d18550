//! Self-describing inline image representation.
//!
//! An [`EncodedImage`] is always a well-formed `data:<mimetype>;base64,<payload>`
//! string. It is either produced from raw bytes by [`EncodedImage::from_bytes`]
//! or checked by [`EncodedImage::parse`]; there is no other way to build one.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::MimeType;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataUriError {
    #[error("data URI must start with `data:`")]
    MissingScheme,

    #[error("data URI must carry a `;base64,` payload")]
    MissingBase64Marker,

    #[error("data URI has an invalid MIME type: `{0}`")]
    InvalidMimeType(String),

    #[error("data URI payload is empty")]
    EmptyPayload,

    #[error("data URI payload is not valid base64: {0}")]
    InvalidPayload(String),
}

/// Image bytes encoded as a data URI.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EncodedImage {
    uri: String,
    payload_start: usize,
}

impl EncodedImage {
    /// Encode raw bytes under the given MIME type.
    pub fn from_bytes(mime_type: &MimeType, bytes: &[u8]) -> Self {
        let prefix = format!("{SCHEME}{}{BASE64_MARKER}", mime_type.as_str());
        let payload_start = prefix.len();
        let mut uri = prefix;
        STANDARD.encode_string(bytes, &mut uri);
        Self { uri, payload_start }
    }

    /// Validate an arbitrary string as a base64 data URI.
    pub fn parse(value: impl Into<String>) -> Result<Self, DataUriError> {
        let uri = value.into();
        let rest = uri
            .strip_prefix(SCHEME)
            .ok_or(DataUriError::MissingScheme)?;
        let marker_at = rest
            .find(BASE64_MARKER)
            .ok_or(DataUriError::MissingBase64Marker)?;

        let mime = &rest[..marker_at];
        if !is_valid_mime(mime) {
            return Err(DataUriError::InvalidMimeType(mime.to_string()));
        }

        let payload_start = SCHEME.len() + marker_at + BASE64_MARKER.len();
        let payload = &uri[payload_start..];
        if payload.is_empty() {
            return Err(DataUriError::EmptyPayload);
        }
        STANDARD
            .decode(payload)
            .map_err(|err| DataUriError::InvalidPayload(err.to_string()))?;

        Ok(Self { uri, payload_start })
    }

    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// MIME type declared by the URI, e.g. `image/jpeg`.
    pub fn mime_type(&self) -> &str {
        &self.uri[SCHEME.len()..self.payload_start - BASE64_MARKER.len()]
    }

    /// Base64 payload without the `data:...;base64,` prefix.
    pub fn payload(&self) -> &str {
        &self.uri[self.payload_start..]
    }

    /// Size of the decoded image in bytes, computed from the payload length.
    pub fn decoded_len(&self) -> usize {
        let payload = self.payload().as_bytes();
        let padding = payload.iter().rev().take_while(|b| **b == b'=').count();
        (payload.len() / 4) * 3 - padding
    }
}

fn is_valid_mime(mime: &str) -> bool {
    match mime.split_once('/') {
        Some((kind, subtype)) => {
            !kind.is_empty()
                && !subtype.is_empty()
                && !mime.chars().any(|c| c.is_whitespace() || c == ',')
        }
        None => false,
    }
}

impl TryFrom<String> for EncodedImage {
    type Error = DataUriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EncodedImage> for String {
    fn from(image: EncodedImage) -> Self {
        image.uri
    }
}

// Payloads run to megabytes; keep them out of logs and panics.
impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("mime_type", &self.mime_type())
            .field("decoded_len", &self.decoded_len())
            .finish()
    }
}

impl fmt::Display for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.mime_type(), self.decoded_len())
    }
}

//! Image upload domain: MIME types, upload candidates and data URIs.

pub mod data_uri;
pub mod mime;
pub mod upload;

pub use data_uri::{DataUriError, EncodedImage};
pub use mime::MimeType;
pub use upload::{ReadError, UploadError, UploadFile, UploadPolicy, ValidationError, MAX_UPLOAD_BYTES};

//! Build an [`UploadFile`] from a path, the way a browser file picker would.
//!
//! The picker reports the MIME type from the file extension without looking
//! at the content; content sniffing is only a fallback for unknown extensions.

use std::path::Path;

use image::ImageFormat;
use tokio::io::AsyncReadExt;
use tracing::debug;
use vc_core::image::{MimeType, ReadError, UploadFile};

const SNIFF_LEN: usize = 64;

/// Non-image types a picker commonly reports.
const OTHER_TYPES: &[(&str, &str)] = &[
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("csv", "text/csv"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("json", "application/json"),
    ("pdf", "application/pdf"),
    ("svg", "image/svg+xml"),
    ("heic", "image/heic"),
];

/// MIME type for a file extension, if it is a known one.
pub fn mime_from_extension(path: &Path) -> Option<MimeType> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();

    if let Some((_, mime)) = OTHER_TYPES.iter().find(|(known, _)| *known == ext) {
        return Some(MimeType(mime.to_string()));
    }

    ImageFormat::from_extension(&ext).map(|format| MimeType(format.to_mime_type().to_string()))
}

/// Describe the file at `path` as an upload candidate.
///
/// Size comes from metadata. Nothing beyond a short header is read here.
pub async fn probe_upload(path: &Path) -> Result<UploadFile, ReadError> {
    let io_error = |err: std::io::Error| ReadError::Io {
        reason: err.to_string(),
    };

    let metadata = tokio::fs::metadata(path).await.map_err(io_error)?;
    if !metadata.is_file() {
        return Err(ReadError::Io {
            reason: format!("{} is not a file", path.display()),
        });
    }

    let mime_type = match mime_from_extension(path) {
        Some(mime) => mime,
        None => sniff_mime(path).await.map_err(io_error)?,
    };

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    debug!(name = %name, mime_type = %mime_type.as_str(), size_bytes = metadata.len(), "upload probed");

    Ok(UploadFile {
        name,
        mime_type,
        size_bytes: metadata.len(),
        path: path.to_path_buf(),
    })
}

async fn sniff_mime(path: &Path) -> std::io::Result<MimeType> {
    let file = tokio::fs::File::open(path).await?;
    let mut header = Vec::with_capacity(SNIFF_LEN);
    file.take(SNIFF_LEN as u64).read_to_end(&mut header).await?;

    Ok(image::guess_format(&header)
        .map(|format| MimeType(format.to_mime_type().to_string()))
        .unwrap_or_else(|_| MimeType::octet_stream()))
}

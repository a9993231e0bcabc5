//! Upload validation policy
//!
//! One policy for both input paths (drag-drop and picker): JPEG or PNG, at
//! most 10 MiB. The declared MIME type and size are checked before the file
//! is ever read.

use crate::error::{Error, Result};

/// Maximum accepted file size in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types the personalizer accepts.
pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// `accept` attribute value for the file picker, derived from the policy.
pub fn picker_accept() -> String {
    ACCEPTED_MIME_TYPES.join(",")
}

/// Check a candidate upload's declared MIME type and size.
///
/// Type is checked before size, and non-images are distinguished from
/// unsupported image formats so the alert stays actionable.
pub fn check_upload(mime: &str, size: u64) -> Result<()> {
    if !mime.starts_with("image/") {
        return Err(Error::NotAnImage(mime.to_string()));
    }
    if !ACCEPTED_MIME_TYPES.contains(&mime) {
        return Err(Error::UnsupportedImageType(mime.to_string()));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(Error::FileTooLarge(size));
    }
    Ok(())
}

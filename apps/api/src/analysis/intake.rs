//! Upload intake: the file-type gate and text decoding for analyze requests.
//!
//! Uploads are never parsed as binary formats. A .pdf or .docx passes the
//! type gate but its bytes are read as plain text, so extraction tooling can
//! slot in later without touching the gate.

use crate::errors::AppError;

/// MIME types accepted for resume uploads.
const ALLOWED_CONTENT_TYPES: [&str; 3] = [
    "text/plain",
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Extensions accepted when the MIME type is absent or unrecognized.
const ALLOWED_EXTENSIONS: [&str; 3] = ["txt", "pdf", "docx"];

/// An upload is supported when its MIME type is recognized or its file name
/// carries a supported extension. Either signal alone is enough.
pub fn is_supported_upload(file_name: &str, content_type: Option<&str>) -> bool {
    if let Some(content_type) = content_type {
        if ALLOWED_CONTENT_TYPES.contains(&content_type) {
            return true;
        }
    }
    has_supported_extension(file_name)
}

fn has_supported_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, extension)| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(extension))
        })
        .unwrap_or(false)
}

/// Decodes uploaded bytes as UTF-8 text. Binary or mis-encoded uploads fail
/// here, before the analyzer ever runs.
pub fn decode_text(data: &[u8]) -> Result<String, AppError> {
    String::from_utf8(data.to_vec()).map_err(|_| {
        AppError::UnreadableUpload("Error reading file. Please try again.".to_string())
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

// ABOUTME: Encodes a company logo file as a data URL for inline company registration
// ABOUTME: MIME type is inferred from the file extension

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use std::path::Path;

use crate::error::{HireError, Result};

fn mime_for(path: &Path) -> Result<&'static str> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "gif" => Ok("image/gif"),
        "webp" => Ok("image/webp"),
        "svg" => Ok("image/svg+xml"),
        _ => Err(HireError::Validation(format!(
            "unsupported logo format for {} (use png, jpg, gif, webp or svg)",
            path.display()
        ))),
    }
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

pub fn logo_data_url(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let mime = mime_for(path)?;
    let bytes = fs::read(path)?;
    Ok(encode_data_url(mime, &bytes))
}

//! Display-surface affordances — clipboard copy and image download.
//!
//! Text results render with a copy button, image results with a download
//! button; both land here. Clipboard access goes through arboard, which
//! works reliably where the webview clipboard API does not.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("not a base64 data URI")]
    InvalidDataUri,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("could not find Desktop directory")]
    NoDesktopDir,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ExportError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ExportError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ExportError::Clipboard(e.to_string()))?;
    log::info!("[EXPORT] Copied {} chars to clipboard", text.len());
    Ok(())
}

/// Suggested filename for a downloaded image: fixed prefix plus an
/// epoch-ms token, so repeated downloads never collide.
pub fn download_file_name() -> String {
    let epoch_ms = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("nexus-gen-{epoch_ms}.png")
}

/// Split a `data:<mime>;base64,<payload>` URI into its MIME type and
/// decoded bytes.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>), ExportError> {
    let rest = uri.strip_prefix("data:").ok_or(ExportError::InvalidDataUri)?;
    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or(ExportError::InvalidDataUri)?;
    let bytes = base64::Engine::decode(&base64::engine::general_purpose::STANDARD, payload)?;
    Ok((mime.to_string(), bytes))
}

/// Write an image data URI's payload to the given path.
pub fn write_image_to_path(data_uri: &str, path: &Path) -> Result<(), ExportError> {
    let (_, bytes) = decode_data_uri(data_uri)?;
    std::fs::write(path, bytes)?;
    log::info!("[EXPORT] Wrote image: {}", path.display());
    Ok(())
}

/// Save an image data URI to the user's Desktop with a generated
/// filename. Returns the full path written.
pub fn save_image_to_desktop(data_uri: &str) -> Result<PathBuf, ExportError> {
    let desktop = dirs::desktop_dir().ok_or(ExportError::NoDesktopDir)?;
    let path = desktop.join(download_file_name());
    write_image_to_path(data_uri, &path)?;
    Ok(path)
}

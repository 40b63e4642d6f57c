use crate::error::{CommonError, CommonErrorExt};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::Path;
use tracing::info;

/// Decodes standard base64 text and writes the bytes to `output`.
///
/// ASCII whitespace (line breaks from wrapped payloads included) is ignored. The content is
/// not checked to be an image.
///
/// # Errors
/// Returns [`CommonError::Base64`] for malformed input and [`CommonError::Io`] if the file
/// cannot be written. Nothing is written when decoding fails.
pub fn decode_image(
    encoded: impl AsRef<[u8]>,
    output: impl AsRef<Path>,
) -> Result<(), CommonError> {
    let output = output.as_ref();
    let compact: Vec<u8> =
        encoded.as_ref().iter().copied().filter(|b| !b.is_ascii_whitespace()).collect();
    let bytes = STANDARD.decode(compact).context("Invalid base64 image payload")?;
    fs::write(output, &bytes).context(format!("Failed to write {}", output.display()))?;

    info!(path = %output.display(), bytes = bytes.len(), "Image decoded");
    Ok(())
}

/// Reads a file and returns its content as standard, padded base64 text.
///
/// # Errors
/// Returns [`CommonError::Io`] if the file cannot be read.
pub fn encode_image(path: impl AsRef<Path>) -> Result<String, CommonError> {
    let path = path.as_ref();
    let bytes = fs::read(path).context(format!("Failed to read {}", path.display()))?;
    Ok(STANDARD.encode(bytes))
}

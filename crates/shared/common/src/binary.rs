use crate::error::{CommonError, CommonErrorExt};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

/// Persists any serializable value as a `postcard` binary artifact.
///
/// # Errors
/// Returns [`CommonError::Binary`] if encoding fails and [`CommonError::Io`] if the file
/// cannot be written.
pub fn save_bin<T>(data: &T, path: impl AsRef<Path>) -> Result<(), CommonError>
where
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let bytes = postcard::to_stdvec(data).context("Postcard encoding failed")?;
    fs::write(path, bytes).context(format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), "Binary file saved");
    Ok(())
}

/// Loads a value previously written by [`save_bin`].
///
/// The whole file must be consumed by the decoded value.
///
/// # Errors
/// Returns [`CommonError::Io`] if the file cannot be read and [`CommonError::Binary`] if it
/// does not decode as `T` or carries trailing bytes.
pub fn load_bin<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, CommonError> {
    let path = path.as_ref();
    let bytes = fs::read(path).context(format!("Failed to read {}", path.display()))?;
    let (value, rest) = postcard::take_from_bytes::<T>(&bytes)
        .context(format!("Postcard decoding failed for {}", path.display()))?;
    if !rest.is_empty() {
        return Err(CommonError::Binary {
            source: postcard::Error::DeserializeBadEncoding,
            context: Some(
                format!("{} trailing bytes in {}", rest.len(), path.display()).into(),
            ),
        });
    }

    info!(path = %path.display(), "Binary file loaded");
    Ok(value)
}

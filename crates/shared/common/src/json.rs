use crate::document::{ConfigDocument, value_kind};
use crate::error::{CommonError, CommonErrorExt};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;
use tracing::info;

const INDENT: &[u8] = b"    ";

/// Writes `data` as pretty-printed JSON with 4-space indentation and no trailing newline.
///
/// # Errors
/// Returns [`CommonError::TypeContract`] if `data` does not serialize to a JSON object,
/// [`CommonError::Json`] if serialization fails and [`CommonError::Io`] if the file
/// cannot be written.
pub fn save_json<T>(path: impl AsRef<Path>, data: &T) -> Result<(), CommonError>
where
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let value = serde_json::to_value(data).context("Failed to serialize JSON payload")?;
    if !value.is_object() {
        return Err(CommonError::TypeContract {
            message: format!("save_json expects a mapping, found {}", value_kind(&value)).into(),
            context: Some(path.display().to_string().into()),
        });
    }

    let rendered = to_json_pretty(&value)?;
    fs::write(path, rendered).context(format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), "JSON file saved");
    Ok(())
}

/// Renders any serializable value in the workspace JSON style: 4-space indent, no trailing
/// newline. Unlike [`save_json`] the root may be any JSON value.
///
/// # Errors
/// Returns [`CommonError::Json`] if serialization fails.
pub fn to_json_pretty<T>(data: &T) -> Result<String, CommonError>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    data.serialize(&mut serializer).context("Failed to render JSON")?;
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Reads a JSON file whose root is an object.
///
/// # Errors
/// Returns [`CommonError::Io`] if the file cannot be read, [`CommonError::Json`] if it is not
/// valid JSON and [`CommonError::TypeContract`] if the root is not an object.
pub fn load_json(path: impl AsRef<Path>) -> Result<ConfigDocument, CommonError> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&content).context(format!("Failed to parse {}", path.display()))?;
    let document = ConfigDocument::from_value(value).context(path.display().to_string())?;

    info!(path = %path.display(), "JSON file loaded successfully");
    Ok(document)
}

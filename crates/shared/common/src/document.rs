use crate::error::{CommonError, CommonErrorExt};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// An immutable, ordered configuration mapping loaded from YAML or JSON.
///
/// Keys keep their file order. Values follow the JSON data model, so nested mappings,
/// sequences and scalars are all reachable through explicit lookups:
///
/// ```rust
/// # use cnn_common::ConfigDocument;
/// # use serde_json::json;
/// let doc = ConfigDocument::try_from(json!({
///     "artifacts_root": "artifacts",
///     "data_ingestion": { "root_dir": "artifacts/data_ingestion" }
/// }))?;
///
/// assert_eq!(doc.get("artifacts_root"), Some(&json!("artifacts")));
/// assert_eq!(doc.lookup("data_ingestion.root_dir"), Some(&json!("artifacts/data_ingestion")));
///
/// #[derive(serde::Deserialize)]
/// struct Ingestion { root_dir: std::path::PathBuf }
/// let ingestion: Ingestion = doc.get_as("data_ingestion")?;
/// assert_eq!(ingestion.root_dir, std::path::PathBuf::from("artifacts/data_ingestion"));
/// # Ok::<(), cnn_common::CommonError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigDocument {
    entries: Map<String, Value>,
}

impl ConfigDocument {
    /// Wraps a parsed value; the root must be a mapping.
    ///
    /// # Errors
    /// Returns [`CommonError::TypeContract`] for any non-mapping root.
    pub fn from_value(value: Value) -> Result<Self, CommonError> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(CommonError::type_contract(format!(
                "expected a mapping at the document root, found {}",
                value_kind(&other)
            ))),
        }
    }

    /// Returns the value stored under a top-level key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Walks a dotted path such as `training.params.epochs` or `classes.0`.
    ///
    /// Numeric segments index into sequences.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        segments.try_fold(self.entries.get(first)?, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Like [`ConfigDocument::lookup`], but a missing path is an error.
    ///
    /// # Errors
    /// Returns [`CommonError::MissingKey`] if nothing is stored at `path`.
    pub fn require(&self, path: &str) -> Result<&Value, CommonError> {
        self.lookup(path).ok_or_else(|| CommonError::MissingKey {
            message: path.to_owned().into(),
            context: None,
        })
    }

    /// Returns the nested mapping at `path` as its own document.
    ///
    /// # Errors
    /// Returns [`CommonError::MissingKey`] if the path is absent and
    /// [`CommonError::TypeContract`] if it does not hold a mapping.
    pub fn section(&self, path: &str) -> Result<Self, CommonError> {
        let value = self.require(path)?.clone();
        Self::from_value(value).context(format!("section '{path}'"))
    }

    /// Deserializes the value at `path` into a typed record.
    ///
    /// # Errors
    /// Returns [`CommonError::MissingKey`] if the path is absent and
    /// [`CommonError::TypeContract`] if the value does not fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, CommonError> {
        let value = self.require(path)?;
        Deserialize::deserialize(value).map_err(|e| CommonError::TypeContract {
            message: e.to_string().into(),
            context: Some(format!("key '{path}'").into()),
        })
    }

    /// Deserializes the whole document into a typed record.
    ///
    /// # Errors
    /// Returns [`CommonError::TypeContract`] if the document does not fit `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, CommonError> {
        serde_json::from_value(Value::Object(self.entries.clone()))
            .map_err(|e| CommonError::type_contract(e.to_string()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.entries)
    }
}

impl TryFrom<Value> for ConfigDocument {
    type Error = CommonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<ConfigDocument> for Value {
    fn from(doc: ConfigDocument) -> Self {
        doc.into_value()
    }
}

pub(crate) const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConfigDocument {
        ConfigDocument::from_value(json!({
            "artifacts_root": "artifacts",
            "training": {
                "root_dir": "artifacts/training",
                "params": { "epochs": 10, "batch_size": 16, "augmentation": true }
            },
            "classes": ["normal", "tumor"]
        }))
        .unwrap()
    }

    #[test]
    fn rejects_non_mapping_roots() {
        for value in [json!(null), json!([1, 2]), json!("text"), json!(3)] {
            let err = ConfigDocument::from_value(value).unwrap_err();
            assert!(matches!(err, CommonError::TypeContract { .. }), "got {err:?}");
        }
    }

    #[test]
    fn keeps_file_order() {
        let keys: Vec<_> = sample().keys().map(str::to_owned).collect();
        assert_eq!(keys, ["artifacts_root", "training", "classes"]);
    }

    #[test]
    fn lookup_walks_mappings_and_sequences() {
        let doc = sample();
        assert_eq!(doc.lookup("training.params.epochs"), Some(&json!(10)));
        assert_eq!(doc.lookup("classes.1"), Some(&json!("tumor")));
        assert_eq!(doc.lookup("classes.7"), None);
        assert_eq!(doc.lookup("artifacts_root.nested"), None);
        assert_eq!(doc.lookup("missing"), None);
    }

    #[test]
    fn require_reports_missing_path() {
        let err = sample().require("training.params.lr").unwrap_err();
        match err {
            CommonError::MissingKey { message, .. } => assert_eq!(message, "training.params.lr"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn section_requires_a_mapping() {
        let doc = sample();
        let params = doc.section("training.params").unwrap();
        assert_eq!(params.len(), 3);

        let err = doc.section("classes").unwrap_err();
        assert!(err.to_string().contains("section 'classes'"));
    }

    #[test]
    fn typed_population() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Params {
            epochs: u32,
            batch_size: u32,
            augmentation: bool,
        }

        let doc = sample();
        let params: Params = doc.get_as("training.params").unwrap();
        assert_eq!(params, Params { epochs: 10, batch_size: 16, augmentation: true });

        let err = doc.get_as::<Params>("classes").unwrap_err();
        assert!(matches!(err, CommonError::TypeContract { .. }));
    }

    #[test]
    fn whole_document_deserialization() {
        #[derive(Deserialize)]
        struct Root {
            artifacts_root: String,
            classes: Vec<String>,
        }

        let root: Root = sample().deserialize().unwrap();
        assert_eq!(root.artifacts_root, "artifacts");
        assert_eq!(root.classes, ["normal", "tumor"]);
    }
}

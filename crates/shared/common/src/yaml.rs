use crate::document::ConfigDocument;
use crate::error::{CommonError, CommonErrorExt};
use serde_json::{Map, Number, Value};
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads a YAML file into a [`ConfigDocument`].
///
/// # Errors
/// * [`CommonError::EmptyConfig`] if the file is empty, holds only comments or a `null` document.
/// * [`CommonError::TypeContract`] if the root is not a mapping or a mapping key is not a string.
/// * [`CommonError::Io`] / [`CommonError::Yaml`] if the file cannot be read or parsed.
pub fn read_yaml(path: impl AsRef<Path>) -> Result<ConfigDocument, CommonError> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?;
    let document = parse_yaml(&content).context(path.display().to_string())?;

    info!(path = %path.display(), "YAML file loaded successfully");
    Ok(document)
}

/// Parses YAML text into a [`ConfigDocument`] under the same rules as [`read_yaml`].
///
/// Merge keys (`<<: *anchor`) are resolved; tags are dropped in favour of the tagged value.
///
/// # Errors
/// See [`read_yaml`].
pub fn parse_yaml(text: &str) -> Result<ConfigDocument, CommonError> {
    if is_blank(text) {
        return Err(empty_document());
    }

    let mut raw: serde_yaml::Value = serde_yaml::from_str(text)?;
    raw.apply_merge()?;

    match into_json(raw)? {
        Value::Null => Err(empty_document()),
        value => ConfigDocument::from_value(value),
    }
}

fn empty_document() -> CommonError {
    CommonError::EmptyConfig { message: "document has no content".into(), context: None }
}

fn is_blank(text: &str) -> bool {
    text.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

fn into_json(value: serde_yaml::Value) -> Result<Value, CommonError> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => Value::Number(into_json_number(&n)?),
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => {
            Value::Array(items.into_iter().map(into_json).collect::<Result<_, _>>()?)
        },
        Yaml::Mapping(mapping) => {
            let mut entries = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                let Yaml::String(key) = key else {
                    return Err(CommonError::type_contract(format!(
                        "mapping keys must be strings, found {key:?}"
                    )));
                };
                entries.insert(key, into_json(value)?);
            }
            Value::Object(entries)
        },
        Yaml::Tagged(tagged) => {
            let serde_yaml::value::TaggedValue { value, .. } = *tagged;
            into_json(value)?
        },
    })
}

// `.inf`, `-.inf` and `.nan` have no JSON representation and are rejected.
fn into_json_number(number: &serde_yaml::Number) -> Result<Number, CommonError> {
    if let Some(i) = number.as_i64() {
        return Ok(i.into());
    }
    if let Some(u) = number.as_u64() {
        return Ok(u.into());
    }
    number
        .as_f64()
        .and_then(Number::from_f64)
        .ok_or_else(|| {
            CommonError::type_contract(format!("non-finite number {number} is not supported"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_documents_are_empty() {
        for text in ["", "   \n\n", "# only a comment\n", "---\n# nothing\n...\n", "~", "null\n"] {
            let err = parse_yaml(text).unwrap_err();
            assert!(matches!(err, CommonError::EmptyConfig { .. }), "{text:?} gave {err:?}");
        }
    }

    #[test]
    fn empty_mapping_is_a_valid_document() {
        let doc = parse_yaml("{}").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn non_mapping_roots_break_the_contract() {
        for text in ["- a\n- b\n", "just text", "42"] {
            let err = parse_yaml(text).unwrap_err();
            assert!(matches!(err, CommonError::TypeContract { .. }), "{text:?} gave {err:?}");
        }
    }

    #[test]
    fn non_string_keys_break_the_contract() {
        let err = parse_yaml("1: one\n2: two\n").unwrap_err();
        assert!(matches!(err, CommonError::TypeContract { .. }));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = parse_yaml("key: [unclosed\n").unwrap_err();
        assert!(matches!(err, CommonError::Yaml { .. }));
    }

    #[test]
    fn non_finite_floats_break_the_contract() {
        for text in ["rate: .inf\n", "rate: -.inf\n", "rate: .NaN\n", "rates: [1.5, .nan]\n"] {
            let err = parse_yaml(text).unwrap_err();
            assert!(matches!(err, CommonError::TypeContract { .. }), "{text:?} gave {err:?}");
            assert!(err.to_string().contains("non-finite number"), "{err}");
        }
    }

    #[test]
    fn quoted_infinity_stays_a_string() {
        let doc = parse_yaml("rate: '.inf'\n").unwrap();
        assert_eq!(doc.get("rate"), Some(&json!(".inf")));
    }

    #[test]
    fn duplicate_keys_are_a_parse_error() {
        let err = parse_yaml("epochs: 1\nepochs: 2\n").unwrap_err();
        assert!(matches!(err, CommonError::Yaml { .. }), "got {err:?}");
    }

    #[test]
    fn nested_values_are_preserved() {
        let doc = parse_yaml(
            "artifacts_root: artifacts\n\
             params:\n  \
               image_size: [224, 224, 3]\n  \
               learning_rate: 0.01\n  \
               include_top: false\n  \
               weights: imagenet\n",
        )
        .unwrap();

        assert_eq!(doc.get("artifacts_root"), Some(&json!("artifacts")));
        assert_eq!(doc.lookup("params.image_size"), Some(&json!([224, 224, 3])));
        assert_eq!(doc.lookup("params.learning_rate"), Some(&json!(0.01)));
        assert_eq!(doc.lookup("params.include_top"), Some(&json!(false)));
    }

    #[test]
    fn merge_keys_are_resolved() {
        let doc = parse_yaml(
            "base: &base\n  epochs: 1\n  batch_size: 16\n\
             training:\n  <<: *base\n  epochs: 10\n",
        )
        .unwrap();

        assert_eq!(doc.lookup("training.epochs"), Some(&json!(10)));
        assert_eq!(doc.lookup("training.batch_size"), Some(&json!(16)));
    }
}

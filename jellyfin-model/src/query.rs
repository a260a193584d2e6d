//! URL query-string encoding for models.
//!
//! Without a prefix the output is form style with exploded lists
//! (`Tags=a&Tags=b`). With a prefix every key nests under it deep-object
//! style (`p[Tags][0]=a&p[Tags][1]=b`). Nested models and maps always
//! recurse as `key[Sub]`, lists of models always index as `key[i][Sub]`.
//! The prefix is used verbatim; only generated key segments are encoded.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ModelError, Result};

/// Encodes `value` as `name=value` pairs joined by `&`.
///
/// `null` members are skipped, so a model with nothing set encodes to the
/// empty string.
pub fn to_query_string<T>(value: &T, prefix: Option<&str>) -> Result<String>
where
    T: Serialize + ?Sized,
{
    // Round-trip through bytes so f32 fields keep their short spelling.
    let bytes = serde_json::to_vec(value)?;
    let tree: Value = serde_json::from_slice(&bytes)?;

    let mut pairs = Vec::new();
    match (prefix, &tree) {
        (_, Value::Null) => {}
        (None, Value::Object(members)) => {
            for (name, member) in members {
                encode_value(&encode_component(name), member, false, &mut pairs);
            }
        }
        (None, other) => {
            return Err(ModelError::UnsupportedQueryValue {
                key: String::new(),
                kind: kind_of(other),
            });
        }
        (Some(prefix), other) => {
            encode_value(prefix, other, true, &mut pairs);
        }
    }

    Ok(pairs.join("&"))
}

fn encode_value(key: &str, value: &Value, nested: bool, pairs: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::Object(members) => {
            for (name, member) in members {
                let child = format!("{key}[{}]", encode_component(name));
                encode_value(&child, member, true, pairs);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::Null => {}
                    Value::Object(_) | Value::Array(_) => {
                        encode_value(&format!("{key}[{index}]"), item, true, pairs);
                    }
                    scalar if nested => {
                        push_scalar(&format!("{key}[{index}]"), scalar, pairs);
                    }
                    scalar => push_scalar(key, scalar, pairs),
                }
            }
        }
        scalar => push_scalar(key, scalar, pairs),
    }
}

fn push_scalar(key: &str, value: &Value, pairs: &mut Vec<String>) {
    let rendered = match value {
        Value::String(text) => encode_component(text),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => encode_component(&number.to_string()),
        _ => return,
    };
    pairs.push(format!("{key}={rendered}"));
}

/// Percent-encodes one key segment or value, spaces as `%20`.
pub fn encode_component(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

use crate::error::{TokenError, TokenResult};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Read `path` and parse it as a JSON object.
///
/// The file handle lives only for the duration of this call, so it is closed
/// whether parsing succeeds or not. Missing or unreadable files map to
/// [`TokenError::FileAccess`]; invalid JSON and non-object roots map to the
/// parse-kind variants.
pub fn load_document(path: &Path) -> TokenResult<Map<String, Value>> {
    let file = File::open(path).map_err(|source| TokenError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            TokenError::FileAccess {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            TokenError::Parse {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    match value {
        Value::Object(map) => {
            debug!(path = %path.display(), keys = map.len(), "loaded trigram document");
            Ok(map)
        }
        other => Err(TokenError::NotAnObject {
            path: path.to_path_buf(),
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

use std::{fs::File, io::BufReader, path::Path};

use serde_json::{Map, Value};
use tracing::debug;

use crate::TokenError;

/// Reads and parses a full document export.
pub fn load_document(path: &Path) -> Result<Value, TokenError> {
    if !path.exists() {
        return Err(TokenError::InputNotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let value: Value = serde_json::from_reader(BufReader::new(file))?;
    debug!(path = %path.display(), "document parsed");
    Ok(value)
}

/// The node tree under the top-level `document` key, or an empty object
/// when an object export has no such key.
pub fn document_root(export: Value) -> Result<Value, TokenError> {
    match export {
        Value::Object(mut map) => Ok(map
            .remove("document")
            .unwrap_or_else(|| Value::Object(Map::new()))),
        other => Err(TokenError::UnexpectedStructure(kind_of(&other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "an object",
        Value::Array(_) => "an array",
        Value::String(_) => "a string",
        Value::Number(_) => "a number",
        Value::Bool(_) => "a boolean",
        Value::Null => "null",
    }
}

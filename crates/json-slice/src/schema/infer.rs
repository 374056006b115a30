//! Schema inference from a sample document.

use serde_json::{Map, Value};

use super::{push_pointer_segment, SchemaNode};
use crate::error::{SchemaError, ShapeViolation};

pub const SCHEMA_DIALECT: &str = "http://json-schema.org/draft-07/schema#";
pub const SCHEMA_ID: &str = "http://example.com/product.schema.json";
pub const SCHEMA_TITLE: &str = "Product";
pub const SCHEMA_DESCRIPTION: &str = "A product in the catalog";

/// Derive the schema of a nested-object sample, keeping its key order.
pub fn infer_schema(sample: &Value) -> Result<SchemaNode, SchemaError> {
    infer(sample, &mut String::new())
}

/// Derive a JSON Schema document for `sample`, with the draft-07 preamble
/// ahead of `type` and `properties`.
pub fn json_to_schema(sample: &Value) -> Result<Value, SchemaError> {
    let node = infer_schema(sample)?;
    let mut schema = Map::new();
    schema.insert("$schema".into(), Value::from(SCHEMA_DIALECT));
    schema.insert("$id".into(), Value::from(SCHEMA_ID));
    schema.insert("title".into(), Value::from(SCHEMA_TITLE));
    schema.insert("description".into(), Value::from(SCHEMA_DESCRIPTION));
    if let Value::Object(body) = node.to_json_schema() {
        schema.extend(body);
    }
    Ok(Value::Object(schema))
}

fn infer(sample: &Value, path: &mut String) -> Result<SchemaNode, SchemaError> {
    let map = match sample {
        Value::Object(map) => map,
        other => {
            return Err(SchemaError::unsupported(
                path,
                ShapeViolation::NonObjectValue(kind(other)),
            ))
        }
    };
    let mut children = Vec::with_capacity(map.len());
    for (key, value) in map {
        let mark = path.len();
        path.push('/');
        push_pointer_segment(path, key);
        let child = infer(value, path)?;
        path.truncate(mark);
        children.push((key.clone(), child));
    }
    Ok(SchemaNode::object(children))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Exact compact-JSON length of the document matching a schema.
//!
//! The layout is `{"k1":v1,"k2":v2}`: no whitespace, keys in schema order,
//! keys written without escapes. Any difference from that layout shifts every
//! slice offset derived from these lengths.

use serde_json::Value;

use crate::error::SchemaError;
use crate::schema::SchemaNode;

const BRACES: usize = 2;
const KEY_QUOTES: usize = 2;
const COLON: usize = 1;
const COMMA: usize = 1;

/// Byte length of the serialized document matching `node`.
pub fn serialized_len(node: &SchemaNode) -> usize {
    let properties = node.properties();
    let mut length = BRACES;
    for (name, child) in properties {
        length += KEY_QUOTES + name.len() + COLON + serialized_len(child) + COMMA;
    }
    if !properties.is_empty() {
        // no trailing comma
        length -= COMMA;
    }
    length
}

/// Lower a JSON Schema document and measure it.
pub fn calculate_length(schema: &Value) -> Result<usize, SchemaError> {
    SchemaNode::from_json_schema(schema).map(|node| serialized_len(&node))
}

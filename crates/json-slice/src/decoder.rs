//! Decoder builder and invoker.
//!
//! [`Decoder::build`] walks a schema once and records, for every level of a
//! single-property chain, where the child's value starts and ends in the
//! parent's text. [`Decoder::decode`] then slices at those offsets without
//! looking at the bytes in between.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::{DecodeError, SchemaError};
use crate::length::serialized_len;
use crate::schema::SchemaNode;

/// Bytes ahead of a lone field's key: `{"`.
const FIELD_OPEN: usize = 2;
/// Bytes between a lone field's key and its value: `":`.
const FIELD_SEPARATOR: usize = 2;
/// Trailing `}` after a lone field's value.
const FIELD_CLOSE: usize = 1;

/// Decoder specialized to one schema.
///
/// Holds only precomputed offsets and names, so it is `Send + Sync` and may
/// be shared freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoder {
    /// Zero-property object. Ignores its input and returns `{}`.
    Empty,
    /// Single-property object. The child's text is `text[start..end]`.
    Field {
        name: String,
        start: usize,
        end: usize,
        child: Box<Decoder>,
    },
    /// Two or more properties. Parses the whole text with `serde_json`.
    Generic,
}

impl Decoder {
    pub fn build(node: &SchemaNode) -> Self {
        match node.properties() {
            [] => Self::Empty,
            [(name, child)] => {
                let total = serialized_len(node);
                Self::Field {
                    name: name.clone(),
                    start: FIELD_OPEN + name.len() + FIELD_SEPARATOR,
                    end: total - FIELD_CLOSE,
                    child: Box::new(Self::build(child)),
                }
            }
            _ => Self::Generic,
        }
    }

    /// Decode `text`, assumed to be the compact serialization of a document
    /// matching the schema this decoder was built from.
    ///
    /// The assumption is not checked. A mismatched document produces a wrong
    /// value, a [`DecodeError::Parse`] from a garbled slice, or a
    /// [`DecodeError::SliceOutOfRange`] when the text is too short.
    pub fn decode(&self, text: &str) -> Result<Value, DecodeError> {
        match self {
            Self::Empty => Ok(Value::Object(Map::new())),
            Self::Field {
                name,
                start,
                end,
                child,
            } => {
                let slice = text.get(*start..*end).ok_or(DecodeError::SliceOutOfRange {
                    start: *start,
                    end: *end,
                    len: text.len(),
                })?;
                let mut map = Map::with_capacity(1);
                map.insert(name.clone(), child.decode(slice)?);
                Ok(Value::Object(map))
            }
            Self::Generic => Ok(serde_json::from_str(text)?),
        }
    }

    /// False only when the top level hands the whole text to `serde_json`.
    pub fn is_specialized(&self) -> bool {
        !matches!(self, Self::Generic)
    }

    /// Number of sliced levels before reaching an empty or generic level.
    pub fn chain_depth(&self) -> usize {
        match self {
            Self::Field { child, .. } => 1 + child.chain_depth(),
            Self::Empty | Self::Generic => 0,
        }
    }
}

impl fmt::Display for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Field {
                name,
                start,
                end,
                child,
            } => write!(f, "field({name:?}, {start}..{end}) -> {child}"),
            Self::Generic => write!(f, "generic"),
        }
    }
}

/// Build a decoder for `node`.
pub fn build(node: &SchemaNode) -> Decoder {
    Decoder::build(node)
}

/// Lower a JSON Schema document and build its decoder.
pub fn compile(schema: &Value) -> Result<Decoder, SchemaError> {
    let node = SchemaNode::from_json_schema(schema)?;
    let decoder = Decoder::build(&node);
    tracing::debug!(
        specialized = decoder.is_specialized(),
        chain_depth = decoder.chain_depth(),
        "compiled decoder: {decoder}"
    );
    Ok(decoder)
}

/// Like [`compile`], but a schema that cannot be lowered yields
/// [`Decoder::Generic`] and a warning instead of an error.
pub fn compile_or_generic(schema: &Value) -> Decoder {
    match compile(schema) {
        Ok(decoder) => decoder,
        Err(err) => {
            tracing::warn!(error = %err, "unable to optimize, falling back to generic parse");
            Decoder::Generic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_ignores_input() {
        let decoder = Decoder::build(&SchemaNode::Leaf);
        assert_eq!(decoder, Decoder::Empty);
        assert_eq!(decoder.decode("{}").unwrap(), json!({}));
        assert_eq!(decoder.decode("not json").unwrap(), json!({}));
    }

    #[test]
    fn single_property_offsets() {
        let decoder = Decoder::build(&SchemaNode::chain(["p1"]));
        assert_eq!(
            decoder,
            Decoder::Field {
                name: "p1".to_string(),
                start: 6,
                end: 8,
                child: Box::new(Decoder::Empty),
            }
        );
    }

    #[test]
    fn two_properties_are_generic() {
        let node = SchemaNode::object([("p1", SchemaNode::Leaf), ("p100", SchemaNode::Leaf)]);
        assert_eq!(Decoder::build(&node), Decoder::Generic);
    }

    #[test]
    fn display_shows_chain() {
        let node = SchemaNode::object([(
            "a",
            SchemaNode::object([("x", SchemaNode::Leaf), ("y", SchemaNode::Leaf)]),
        )]);
        assert_eq!(Decoder::build(&node).to_string(), r#"field("a", 5..20) -> generic"#);
    }

    #[test]
    fn compile_or_generic_falls_back_on_bad_schema() {
        assert_eq!(compile_or_generic(&json!({"type": "array"})), Decoder::Generic);
        assert!(compile(&json!({"type": "array"})).is_err());
    }
}

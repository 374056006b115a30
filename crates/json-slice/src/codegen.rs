//! Decoders as plain function values.
//!
//! Wraps a built [`Decoder`] tree in a boxed closure for callers that want
//! `Fn(&str) -> Result<Value, DecodeError>` rather than the inspectable enum.

use serde_json::Value;

use crate::decoder::{compile_or_generic, Decoder};
use crate::error::DecodeError;
use crate::schema::SchemaNode;

pub type CompiledDecoder = Box<dyn Fn(&str) -> Result<Value, DecodeError> + Send + Sync>;

pub struct SliceParserCodegen;

impl SliceParserCodegen {
    pub fn get(node: &SchemaNode) -> CompiledDecoder {
        Self::wrap(Decoder::build(node))
    }

    /// Compile from a JSON Schema document, falling back to the generic
    /// parser (with a warning) when the schema cannot be lowered.
    pub fn from_json_schema(schema: &Value) -> CompiledDecoder {
        Self::wrap(compile_or_generic(schema))
    }

    fn wrap(decoder: Decoder) -> CompiledDecoder {
        Box::new(move |text: &str| decoder.decode(text))
    }
}

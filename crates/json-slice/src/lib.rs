//! `json-slice`: decode JSON documents of a known, fixed shape by slicing
//! at precomputed byte offsets instead of scanning.
//!
//! A [`SchemaNode`] describes a nested-object shape. [`serialized_len`]
//! predicts the exact compact-JSON length of the one document matching it,
//! and [`Decoder::build`] turns those lengths into slice offsets. The
//! resulting [`Decoder`] is built once and invoked many times.
//!
//! Specialization only follows chains of single-property objects. A level
//! with two or more properties is handed to `serde_json` as a whole.
//!
//! Decoders trust their schema: a document whose keys, key order, nesting or
//! whitespace differ from the schema is sliced at the wrong offsets and
//! yields wrong output or a parse error. Nothing checks the document against
//! the schema, since that check would cost the scan the decoder exists to
//! skip.
//!
//! ```
//! use json_slice::{Decoder, SchemaNode};
//! use serde_json::json;
//!
//! let schema = SchemaNode::object([("p1", SchemaNode::Leaf)]);
//! let decoder = Decoder::build(&schema);
//! assert_eq!(decoder.decode(r#"{"p1":{}}"#).unwrap(), json!({"p1": {}}));
//! ```

pub mod bench;
pub mod codegen;
pub mod decoder;
pub mod error;
pub mod length;
pub mod schema;
pub mod verify;

pub use codegen::{CompiledDecoder, SliceParserCodegen};
pub use decoder::{build, compile, compile_or_generic, Decoder};
pub use error::{DecodeError, SchemaError, ShapeViolation};
pub use length::{calculate_length, serialized_len};
pub use schema::{infer_schema, json_to_schema, SchemaNode};
pub use verify::assert_output_same;

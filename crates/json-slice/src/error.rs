use thiserror::Error;

/// Raised when a schema or sample does not describe a nested-object shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// `path` is a JSON Pointer into the offending schema or sample.
    #[error("UNSUPPORTED_SHAPE at \"{path}\": {violation}")]
    UnsupportedShape {
        path: String,
        violation: ShapeViolation,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeViolation {
    #[error("only object schemas supported, found type {0}")]
    NotObject(String),

    #[error("schema properties missing")]
    MissingProperties,

    #[error("schema properties must be an object")]
    PropertiesNotObject,

    #[error("only object values supported, found {0}")]
    NonObjectValue(&'static str),
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("generic parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The text is too short for the precomputed slice, or the slice splits a
    /// UTF-8 sequence.
    #[error("SLICE_OUT_OF_RANGE: {start}..{end} in text of {len} bytes")]
    SliceOutOfRange { start: usize, end: usize, len: usize },

    #[error("OUTPUT_MISMATCH")]
    OutputMismatch { expected: String, actual: String },
}

impl SchemaError {
    pub(crate) fn unsupported(path: &str, violation: ShapeViolation) -> Self {
        Self::UnsupportedShape {
            path: path.to_string(),
            violation,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::UnsupportedShape { path, .. } => path,
        }
    }
}

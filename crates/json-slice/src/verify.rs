use serde_json::Value;

use crate::error::DecodeError;

/// Check that two values render to the same pretty-printed JSON.
///
/// Key order matters. Returns the shared rendering on success.
pub fn assert_output_same(expected: &Value, actual: &Value) -> Result<String, DecodeError> {
    let expected = serde_json::to_string_pretty(expected)?;
    let actual = serde_json::to_string_pretty(actual)?;
    if expected != actual {
        return Err(DecodeError::OutputMismatch { expected, actual });
    }
    Ok(actual)
}

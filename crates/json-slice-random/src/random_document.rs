use rand::Rng;
use serde_json::{Map, Value};

use crate::key::random_key;

/// Options for random document generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomDocumentOptions {
    /// Nesting depth of the document. A multi-branch level holding `n`
    /// remaining levels also gets `n` keys.
    pub ceil: usize,
    /// Whether the root level holds a single key. Branching alternates
    /// between single and multi on every level below.
    pub single_branch: bool,
}

impl Default for RandomDocumentOptions {
    fn default() -> Self {
        Self {
            ceil: 5,
            single_branch: true,
        }
    }
}

/// Random document generator.
pub struct RandomDocument;

impl RandomDocument {
    /// Generate a random document.
    pub fn generate<R: Rng>(rng: &mut R, opts: &RandomDocumentOptions) -> Value {
        random_document(rng, opts.ceil, opts.single_branch)
    }

    /// Generate a random document and return its compact serialization.
    pub fn generate_text<R: Rng>(rng: &mut R, opts: &RandomDocumentOptions) -> String {
        Self::generate(rng, opts).to_string()
    }
}

/// Build a nested object `ceil` levels deep.
///
/// Single-branch levels hold one key; multi-branch levels hold `ceil` keys.
/// Each child flips the branching mode of its parent.
pub fn random_document<R: Rng>(rng: &mut R, ceil: usize, single_branch: bool) -> Value {
    let mut map = Map::new();
    if ceil == 0 {
        return Value::Object(map);
    }
    let width = if single_branch { 1 } else { ceil };
    for _ in 0..width {
        let key = random_key(rng);
        let child = random_document(rng, ceil - 1, !single_branch);
        map.insert(key, child);
    }
    Value::Object(map)
}

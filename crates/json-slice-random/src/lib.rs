//! Random nested-object documents.
//!
//! Every generator takes the random source as an argument, so callers decide
//! between reproducible runs ([`seeded_rng`] with a seed) and fresh entropy.
//!
//! Documents only ever contain objects: leaves are `{}` and keys are base-36
//! strings, which keeps their compact serialization free of escapes.

pub mod key;
pub mod random_document;
pub mod rng;

pub use key::{random_key, BASE36};
pub use random_document::{random_document, RandomDocument, RandomDocumentOptions};
pub use rng::{seeded_rng, SliceRng};

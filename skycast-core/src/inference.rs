//! Classifier and decoder seams
//!
//! The pipeline never sees a concrete model type; it talks to these two
//! traits. The shipped implementation lives in `skycast-ml`, and tests swap
//! in stubs.

use crate::errors::InferenceError;
use crate::features::FeatureRecord;

/// A pre-trained classifier mapping one feature record to an encoded class
/// index.
///
/// Implementations must be pure: the same record against the same loaded
/// model yields the same index, with no side effects. An implementation
/// must refuse - not repair - a record that does not match its trained
/// schema.
pub trait Classifier {
    /// Classify a single normalized record.
    fn classify(&self, record: &FeatureRecord) -> Result<usize, InferenceError>;
}

/// The fitted mapping from an encoded class index back to its class name.
pub trait LabelDecoder {
    /// Decode a class index into the class name it was fitted on.
    fn decode(&self, class_index: usize) -> Result<&str, InferenceError>;
}

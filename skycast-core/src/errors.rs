//! Error types for observation validation and inference
//!
//! Three failure families, kept separate because callers dispose of them
//! differently:
//!
//! - [`ObservationError`]: the caller supplied an observation outside the
//!   contract. Recoverable - re-prompt and retry.
//! - [`InferenceError`]: the classifier or decoder refused the request.
//!   Inference is deterministic, so retrying reproduces the same failure;
//!   surface it and stop.
//! - [`PredictError`]: the union returned by the pipeline entry point.
//!
//! Errors carry the offending value and the violated bound so the caller can
//! report the problem without a second lookup. Nothing is clamped, defaulted,
//! or silently swallowed.

use thiserror::Error;

use crate::features::FeatureKind;

/// Result type for observation validation.
pub type ValidationResult<T> = Result<T, ObservationError>;

/// An observation field violated its input contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObservationError {
    /// Value outside the valid range for its field.
    #[error("{field} {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Field that failed validation.
        field: &'static str,
        /// The supplied value.
        value: f32,
        /// Minimum acceptable value, inclusive.
        min: f32,
        /// Maximum acceptable value, inclusive.
        max: f32,
    },

    /// Value is NaN or infinite.
    #[error("{field} is not a finite number")]
    NotFinite {
        /// Field that failed validation.
        field: &'static str,
    },

    /// Text does not name a known category of the field.
    #[error("unrecognized {field}: `{value}`")]
    UnknownCategory {
        /// Field being parsed.
        field: &'static str,
        /// The unrecognized text.
        value: String,
    },
}

/// The classifier or decoder refused a request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// Record arity differs from the trained schema.
    #[error("feature record has {found} fields, model expects {expected}")]
    FieldCount {
        /// Number of fields in the trained schema.
        expected: usize,
        /// Number of fields in the record.
        found: usize,
    },

    /// Field name at a position differs from the trained schema.
    #[error("feature {position} is `{found}`, model expects `{expected}`")]
    FieldName {
        /// Zero-based position in the record.
        position: usize,
        /// Name the trained schema declares at this position.
        expected: String,
        /// Name found in the record.
        found: String,
    },

    /// Field kind at a position differs from the trained schema.
    #[error("feature `{name}` is {found:?}, model expects {expected:?}")]
    FieldKind {
        /// Name of the mismatched field.
        name: String,
        /// Kind the trained schema declares.
        expected: FeatureKind,
        /// Kind found in the record.
        found: FeatureKind,
    },

    /// Categorical token absent from the model's vocabulary.
    #[error("`{token}` is not in the vocabulary of feature `{feature}`")]
    UnknownCategory {
        /// Categorical feature being resolved.
        feature: String,
        /// Token with no vocabulary entry.
        token: String,
    },

    /// Class index outside the decoder's fitted classes.
    #[error("class index {class_index} outside the {num_classes} fitted classes")]
    UnknownClass {
        /// Index emitted by the classifier.
        class_index: usize,
        /// Number of classes the decoder was fitted on.
        num_classes: usize,
    },

    /// Decoder produced a label outside the known weather categories.
    #[error("decoder produced unknown label `{label}`")]
    UnknownLabel {
        /// The unrecognized label text.
        label: String,
    },
}

/// Failure of one prediction request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The observation was rejected before inference.
    #[error("invalid observation: {0}")]
    Invalid(#[from] ObservationError),

    /// The classifier or decoder failed.
    #[error("inference failed: {0}")]
    Inference(#[from] InferenceError),
}

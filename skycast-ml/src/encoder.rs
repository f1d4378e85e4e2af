//! Fitted label encoder
//!
//! The training job encodes class names to integer indices; this is the
//! inverse mapping, shipped alongside the classifier. The shipped artifact
//! was fitted on exactly the four weather categories, in the encoder's
//! sorted order: Cloudy, Rainy, Snowy, Sunny.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use skycast_core::{InferenceError, LabelDecoder};

/// Defect in a fitted class list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncoderError {
    /// The encoder carries no classes at all.
    #[error("label encoder has no classes")]
    Empty,

    /// The same class name appears twice.
    #[error("label encoder repeats class `{0}`")]
    Duplicate(String),
}

/// Mapping from encoded class index back to class name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Build an encoder from its fitted class list, index = position.
    pub fn new(classes: Vec<String>) -> Result<Self, EncoderError> {
        if classes.is_empty() {
            return Err(EncoderError::Empty);
        }
        for (i, class) in classes.iter().enumerate() {
            if classes[..i].contains(class) {
                return Err(EncoderError::Duplicate(class.clone()));
            }
        }
        Ok(Self { classes })
    }

    /// Fitted class names, in encoder order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of fitted classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the encoder has no classes. Never true for a constructed
    /// encoder; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl LabelDecoder for LabelEncoder {
    fn decode(&self, class_index: usize) -> Result<&str, InferenceError> {
        self.classes
            .get(class_index)
            .map(String::as_str)
            .ok_or(InferenceError::UnknownClass {
                class_index,
                num_classes: self.classes.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather_classes() -> Vec<String> {
        ["Cloudy", "Rainy", "Snowy", "Sunny"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn decodes_fitted_classes_by_index() {
        let encoder = LabelEncoder::new(weather_classes()).unwrap();

        assert_eq!(encoder.decode(0), Ok("Cloudy"));
        assert_eq!(encoder.decode(3), Ok("Sunny"));
        assert_eq!(encoder.len(), 4);
    }

    #[test]
    fn index_outside_fitted_classes_is_an_error() {
        let encoder = LabelEncoder::new(weather_classes()).unwrap();

        assert_eq!(
            encoder.decode(4),
            Err(InferenceError::UnknownClass {
                class_index: 4,
                num_classes: 4,
            })
        );
    }

    #[test]
    fn empty_class_list_rejected() {
        assert_eq!(LabelEncoder::new(vec![]), Err(EncoderError::Empty));
    }

    #[test]
    fn duplicate_class_rejected() {
        let classes = vec!["Rainy".to_string(), "Rainy".to_string()];
        assert_eq!(
            LabelEncoder::new(classes),
            Err(EncoderError::Duplicate("Rainy".to_string()))
        );
    }
}

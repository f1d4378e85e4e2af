//! Core prediction pipeline for Skycast
//!
//! Turns one validated weather observation into one categorical forecast
//! using a pre-trained classifier and a fitted label decoder.
//!
//! Key constraints:
//! - Input ranges mirror the training data, not physical plausibility
//! - The feature schema handed to the classifier must match the trained
//!   schema field-for-field, in name and order
//! - Inference is pure: no I/O, no shared mutable state
//!
//! ```no_run
//! use skycast_core::{predict, CloudCover, Location, Season, WeatherObservation};
//! # use skycast_core::{Classifier, FeatureRecord, InferenceError, LabelDecoder};
//! # struct Model; struct Decoder;
//! # impl Classifier for Model {
//! #     fn classify(&self, _: &FeatureRecord) -> Result<usize, InferenceError> { Ok(3) }
//! # }
//! # impl LabelDecoder for Decoder {
//! #     fn decode(&self, _: usize) -> Result<&str, InferenceError> { Ok("Sunny") }
//! # }
//! # let (model, decoder) = (Model, Decoder);
//!
//! let observation = WeatherObservation {
//!     temperature: 25.0,
//!     humidity: 50,
//!     wind_speed: 10.0,
//!     precipitation: 20.0,
//!     pressure: 1013.0,
//!     uv_index: 5,
//!     visibility: 10.0,
//!     cloud_cover: CloudCover::Clear,
//!     season: Season::Summer,
//!     location: Location::Inland,
//! };
//!
//! match predict(&observation, &model, &decoder) {
//!     Ok(prediction) => println!("{}", prediction),
//!     Err(e) => eprintln!("prediction failed: {}", e),
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod features;
pub mod inference;
pub mod labels;
pub mod observation;
pub mod pipeline;
pub mod ranges;

// Public API
pub use errors::{InferenceError, ObservationError, PredictError, ValidationResult};
pub use features::{FeatureKind, FeatureRecord, FeatureValue, FEATURE_COUNT, FEATURE_NAMES};
pub use inference::{Classifier, LabelDecoder};
pub use labels::WeatherLabel;
pub use observation::{CloudCover, Location, Season, WeatherObservation};
pub use pipeline::{predict, Prediction};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}

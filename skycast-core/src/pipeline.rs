//! The prediction pipeline
//!
//! One stateless operation: validate the observation, assemble the
//! normalized feature record, run the classifier, decode the class index,
//! decorate the label. Each request builds a fresh [`Prediction`]; nothing
//! is cached or shared between requests, so concurrent calls need no
//! coordination beyond the read-only model and decoder themselves.

use std::fmt;

use serde::Serialize;

use crate::{
    errors::PredictError,
    inference::{Classifier, LabelDecoder},
    labels::WeatherLabel,
    observation::WeatherObservation,
};

/// Outcome of one prediction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    /// Encoded class index as the classifier emitted it.
    pub class_index: usize,
    /// Decoded weather category.
    pub label: WeatherLabel,
    /// Decorative icon for the category.
    pub icon: &'static str,
    /// Advisory text for the category.
    pub recommendation: &'static str,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.label)
    }
}

/// Run one prediction request against a loaded classifier and decoder.
///
/// The observation is validated before the classifier is invoked; an
/// out-of-contract observation never reaches inference. The classifier's
/// class index is decoded to a class name and parsed into the known
/// categories - a name outside them is surfaced as an error, never
/// defaulted.
pub fn predict<C, D>(
    observation: &WeatherObservation,
    classifier: &C,
    decoder: &D,
) -> Result<Prediction, PredictError>
where
    C: Classifier + ?Sized,
    D: LabelDecoder + ?Sized,
{
    observation.validate()?;

    let record = observation.to_record();
    let class_index = classifier.classify(&record)?;
    let label: WeatherLabel = decoder.decode(class_index)?.parse()?;

    Ok(Prediction {
        class_index,
        label,
        icon: label.icon(),
        recommendation: label.recommendation(),
    })
}

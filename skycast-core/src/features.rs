//! Trained feature schema and observation normalization
//!
//! The classifier was trained on a fixed, ordered, named set of columns.
//! A prediction request must reproduce that schema exactly - same names,
//! same order, same kinds - or the model refuses the record.
//!
//! Normalization is the one transformation applied between raw input and
//! inference: cloud cover and location are lower-cased because the model
//! saw lower-case text for those two columns during training. Season was
//! trained with its display case and passes through unchanged; that
//! asymmetry is part of the trained artifact and must not be "fixed" here
//! without retraining it.

use serde::{Deserialize, Serialize};

use crate::observation::WeatherObservation;

/// Number of features in the trained schema.
pub const FEATURE_COUNT: usize = 10;

/// Trained column names, in training order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Temperature",
    "Humidity",
    "Wind Speed",
    "Precipitation (%)",
    "Atmospheric Pressure",
    "UV Index",
    "Visibility (km)",
    "Cloud Cover",
    "Season",
    "Location",
];

/// Kind of value a feature column carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Real-valued column.
    Numeric,
    /// Text category column.
    Categorical,
}

/// Trained column kinds, in training order.
pub const FEATURE_KINDS: [FeatureKind; FEATURE_COUNT] = [
    FeatureKind::Numeric,
    FeatureKind::Numeric,
    FeatureKind::Numeric,
    FeatureKind::Numeric,
    FeatureKind::Numeric,
    FeatureKind::Numeric,
    FeatureKind::Numeric,
    FeatureKind::Categorical,
    FeatureKind::Categorical,
    FeatureKind::Categorical,
];

/// One feature value in a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    /// Real-valued measurement.
    Numeric(f32),
    /// Normalized category token.
    Categorical(String),
}

impl FeatureValue {
    /// Kind of this value.
    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::Numeric(_) => FeatureKind::Numeric,
            Self::Categorical(_) => FeatureKind::Categorical,
        }
    }
}

/// One named field of a feature record.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureField {
    /// Column name from the trained schema.
    pub name: &'static str,
    /// Normalized value.
    pub value: FeatureValue,
}

/// A single-row feature record in the trained schema.
///
/// Only [`WeatherObservation::to_record`] constructs these, so the names
/// and order are always the canonical ones; the classifier still verifies
/// them against its own stored schema before traversing any tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    fields: Vec<FeatureField>,
}

impl FeatureRecord {
    /// Fields in schema order.
    pub fn fields(&self) -> &[FeatureField] {
        &self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl WeatherObservation {
    /// Assemble the normalized single-row feature record for this
    /// observation.
    ///
    /// Numeric fields pass through unchanged; cloud cover and location are
    /// lower-cased; season keeps its display case. The operation is pure
    /// and idempotent in effect: tokens that are already lower-case map to
    /// themselves.
    pub fn to_record(&self) -> FeatureRecord {
        let values = [
            FeatureValue::Numeric(self.temperature),
            FeatureValue::Numeric(f32::from(self.humidity)),
            FeatureValue::Numeric(self.wind_speed),
            FeatureValue::Numeric(self.precipitation),
            FeatureValue::Numeric(self.pressure),
            FeatureValue::Numeric(f32::from(self.uv_index)),
            FeatureValue::Numeric(self.visibility),
            FeatureValue::Categorical(fold_case(self.cloud_cover.as_str())),
            FeatureValue::Categorical(self.season.as_str().to_string()),
            FeatureValue::Categorical(fold_case(self.location.as_str())),
        ];

        FeatureRecord {
            fields: FEATURE_NAMES
                .iter()
                .zip(values)
                .map(|(&name, value)| FeatureField { name, value })
                .collect(),
        }
    }
}

fn fold_case(token: &str) -> String {
    token.to_lowercase()
}

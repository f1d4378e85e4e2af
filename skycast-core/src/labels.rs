//! Weather categories and their display decoration
//!
//! The classifier emits one of exactly four categories. Icon and
//! recommendation lookups are exhaustive matches: adding a fifth category
//! is a compile-visible gap in every match below, not a runtime lookup
//! miss.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::InferenceError;

/// Predicted weather category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherLabel {
    /// Rain expected.
    Rainy,
    /// Clear and sunny.
    Sunny,
    /// Significant cloud cover.
    Cloudy,
    /// Snow expected.
    Snowy,
}

impl WeatherLabel {
    /// Every category, in display order.
    pub const ALL: [WeatherLabel; 4] = [Self::Rainy, Self::Sunny, Self::Cloudy, Self::Snowy];

    /// Class name as the decoder produces it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rainy => "Rainy",
            Self::Sunny => "Sunny",
            Self::Cloudy => "Cloudy",
            Self::Snowy => "Snowy",
        }
    }

    /// Decorative icon for display layers.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Rainy => "🌧️",
            Self::Sunny => "☀️",
            Self::Cloudy => "☁️",
            Self::Snowy => "❄️",
        }
    }

    /// Advisory text for display layers.
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Rainy => "☔ Don't forget your umbrella and waterproof jacket!",
            Self::Sunny => "😎 Perfect day for outdoor activities! Don't forget sunscreen.",
            Self::Cloudy => "🌤️ Mild conditions ahead. Light jacket recommended.",
            Self::Snowy => "🧣 Bundle up warm! Watch out for icy conditions.",
        }
    }
}

impl FromStr for WeatherLabel {
    type Err = InferenceError;

    /// Parse a decoder-produced class name, exact match only.
    ///
    /// Anything else means the decoder was fitted on classes this pipeline
    /// does not know - a deployment error, not a user error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rainy" => Ok(Self::Rainy),
            "Sunny" => Ok(Self::Sunny),
            "Cloudy" => Ok(Self::Cloudy),
            "Snowy" => Ok(Self::Snowy),
            other => Err(InferenceError::UnknownLabel {
                label: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for WeatherLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

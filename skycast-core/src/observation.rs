//! Weather observation model
//!
//! One record of the ten measurements a prediction request consumes. Numeric
//! fields are validated against the ranges in [`crate::ranges`]; the three
//! categorical fields are closed enums, so an invalid category cannot be
//! represented once parsing has succeeded.
//!
//! An observation is a plain immutable value: construct it, validate it,
//! hand it to the pipeline.

use serde::{Deserialize, Serialize};

use crate::{
    errors::{ObservationError, ValidationResult},
    ranges,
};

/// Cloud cover category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloudCover {
    /// Sky fully covered.
    #[serde(rename = "Overcast")]
    Overcast,
    /// Mixed sun and cloud.
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    /// No significant cloud.
    #[serde(rename = "Clear")]
    Clear,
    /// Mostly covered.
    #[serde(rename = "Cloudy")]
    Cloudy,
}

impl CloudCover {
    /// Display form, as shown to users and stored in the training data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overcast => "Overcast",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Clear => "Clear",
            Self::Cloudy => "Cloudy",
        }
    }
}

impl TryFrom<&str> for CloudCover {
    type Error = ObservationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Overcast" => Ok(Self::Overcast),
            "Partly Cloudy" => Ok(Self::PartlyCloudy),
            "Clear" => Ok(Self::Clear),
            "Cloudy" => Ok(Self::Cloudy),
            other => Err(ObservationError::UnknownCategory {
                field: "cloud cover",
                value: other.to_string(),
            }),
        }
    }
}

/// Season of the observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// December through February.
    Winter,
    /// March through May.
    Spring,
    /// June through August.
    Summer,
    /// September through November.
    Autumn,
}

impl Season {
    /// Display form, as shown to users and stored in the training data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
        }
    }
}

impl TryFrom<&str> for Season {
    type Error = ObservationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Winter" => Ok(Self::Winter),
            "Spring" => Ok(Self::Spring),
            "Summer" => Ok(Self::Summer),
            "Autumn" => Ok(Self::Autumn),
            other => Err(ObservationError::UnknownCategory {
                field: "season",
                value: other.to_string(),
            }),
        }
    }
}

/// Geographic setting of the observation site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Away from coast and mountains.
    Inland,
    /// Mountainous terrain.
    Mountain,
    /// Near a coastline.
    Coastal,
}

impl Location {
    /// Display form, as shown to users and stored in the training data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inland => "Inland",
            Self::Mountain => "Mountain",
            Self::Coastal => "Coastal",
        }
    }
}

impl TryFrom<&str> for Location {
    type Error = ObservationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Inland" => Ok(Self::Inland),
            "Mountain" => Ok(Self::Mountain),
            "Coastal" => Ok(Self::Coastal),
            other => Err(ObservationError::UnknownCategory {
                field: "location",
                value: other.to_string(),
            }),
        }
    }
}

/// One set of raw measurements for a prediction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Wind speed in km/h.
    pub wind_speed: f32,
    /// Precipitation in percent.
    pub precipitation: f32,
    /// Atmospheric pressure in hPa.
    pub pressure: f32,
    /// UV index.
    pub uv_index: u8,
    /// Visibility in km.
    pub visibility: f32,
    /// Cloud cover category.
    pub cloud_cover: CloudCover,
    /// Season of the observation.
    pub season: Season,
    /// Geographic setting of the site.
    pub location: Location,
}

impl WeatherObservation {
    /// Check every field against its valid range.
    ///
    /// Returns the first violation found, in field order. Bounds are
    /// inclusive; nothing is clamped or coerced.
    pub fn validate(&self) -> ValidationResult<()> {
        check_finite("temperature", self.temperature)?;
        check_range("temperature", self.temperature, ranges::TEMPERATURE_C)?;

        check_range_u8("humidity", self.humidity, ranges::HUMIDITY_PCT)?;

        check_finite("wind speed", self.wind_speed)?;
        check_range("wind speed", self.wind_speed, ranges::WIND_SPEED_KMH)?;

        check_finite("precipitation", self.precipitation)?;
        check_range("precipitation", self.precipitation, ranges::PRECIPITATION_PCT)?;

        check_finite("pressure", self.pressure)?;
        check_range("pressure", self.pressure, ranges::PRESSURE_HPA)?;

        check_range_u8("UV index", self.uv_index, ranges::UV_INDEX)?;

        check_finite("visibility", self.visibility)?;
        check_range("visibility", self.visibility, ranges::VISIBILITY_KM)?;

        Ok(())
    }
}

fn check_finite(field: &'static str, value: f32) -> ValidationResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ObservationError::NotFinite { field })
    }
}

fn check_range(field: &'static str, value: f32, (min, max): (f32, f32)) -> ValidationResult<()> {
    if value < min || value > max {
        Err(ObservationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    } else {
        Ok(())
    }
}

fn check_range_u8(field: &'static str, value: u8, (min, max): (u8, u8)) -> ValidationResult<()> {
    if value < min || value > max {
        Err(ObservationError::OutOfRange {
            field,
            value: f32::from(value),
            min: f32::from(min),
            max: f32::from(max),
        })
    } else {
        Ok(())
    }
}

//! Valid input ranges for weather observations
//!
//! Bounds mirror the domain of the training data, not physical plausibility:
//! the dataset contains humidity and precipitation readings above 100%, and
//! the classifier expects the same domain at inference time. Out-of-range
//! input is rejected, never clamped.
//!
//! All bounds are inclusive.

/// Temperature in degrees Celsius.
pub const TEMPERATURE_C: (f32, f32) = (-25.0, 109.0);

/// Relative humidity in percent.
pub const HUMIDITY_PCT: (u8, u8) = (20, 109);

/// Wind speed in km/h.
pub const WIND_SPEED_KMH: (f32, f32) = (0.0, 48.5);

/// Precipitation in percent.
pub const PRECIPITATION_PCT: (f32, f32) = (0.0, 109.0);

/// Atmospheric pressure in hPa.
pub const PRESSURE_HPA: (f32, f32) = (800.12, 1199.21);

/// UV index.
pub const UV_INDEX: (u8, u8) = (0, 14);

/// Visibility in km.
pub const VISIBILITY_KM: (f32, f32) = (0.0, 20.0);

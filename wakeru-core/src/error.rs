//! Error types for registry loading and per-call input checks.

use std::io::Error as IoError;

use serde_json::Error as JsonError;

use crate::model::{Language, ZoneId};

#[derive(thiserror::Error, Debug)]
/// Fatal problems found while loading or validating zone definitions.
pub enum ConfigError {
    /// Two zones share the same identifier.
    #[error("Duplicate zone id: {0}")]
    DuplicateZoneId(ZoneId),
    /// Zone radius is zero, negative, or not a finite number.
    #[error("Zone {zone} has a non-positive radius: {radius}")]
    NonPositiveRadius {
        /// Offending zone.
        zone: ZoneId,
        /// Radius as configured, in meters.
        radius: f64,
    },
    /// Zone lacks a display name for a supported language.
    #[error("Zone {zone} is missing a name for language {language}")]
    MissingName {
        /// Offending zone.
        zone: ZoneId,
        /// Language without a usable name.
        language: Language,
    },
    /// Zone center is not a finite point on the globe.
    #[error("Zone {zone} has an invalid center ({latitude}, {longitude})")]
    InvalidCenter {
        /// Offending zone.
        zone: ZoneId,
        /// Configured latitude.
        latitude: f64,
        /// Configured longitude.
        longitude: f64,
    },
    /// Service area bounds are inverted, non-finite, or off the globe.
    #[error("Invalid service area: {0}")]
    InvalidServiceArea(String),
    /// Definition could not be decoded.
    #[error("Parse error: {0}")]
    Parse(#[from] JsonError),
    /// Definition file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
/// Rejected query coordinates.
pub enum InputError {
    /// Latitude or longitude is NaN or infinite.
    #[error("Coordinates are not finite: ({latitude}, {longitude})")]
    NonFinite {
        /// Supplied latitude.
        latitude: f64,
        /// Supplied longitude.
        longitude: f64,
    },
    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    #[error("Coordinates out of range: ({latitude}, {longitude})")]
    OutOfRange {
        /// Supplied latitude.
        latitude: f64,
        /// Supplied longitude.
        longitude: f64,
    },
}

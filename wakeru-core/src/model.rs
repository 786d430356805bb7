//! Domain data structures for query points, zones, and the service area.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::geo::distance_meters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Languages every zone must carry a display name for.
pub enum Language {
    /// English.
    #[serde(rename = "en")]
    English,
    /// Japanese.
    #[serde(rename = "ja")]
    Japanese,
    /// Korean.
    #[serde(rename = "ko")]
    Korean,
    /// Simplified Chinese.
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    /// Every supported language, in switcher order.
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Japanese,
        Language::Korean,
        Language::Chinese,
    ];

    /// Language code used in configuration and by localization tables.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Chinese => "zh",
        }
    }

    /// The language after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Language::English => Language::Japanese,
            Language::Japanese => Language::Korean,
            Language::Korean => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.code())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language code: {0}")]
/// Language code outside the supported set.
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| UnknownLanguage(code.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Stable identifier of a zone, safe to persist.
pub struct ZoneId(pub String);

impl ZoneId {
    /// Construct an identifier from anything string-like.
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        ZoneId(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Point in geographic coordinates, in degrees.
pub struct GeoPoint {
    /// Latitude, expected within [-90, 90].
    pub latitude: f64,
    /// Longitude, expected within [-180, 180].
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that the point is finite and on the globe.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonFinite`] for NaN or infinite components and
    /// [`InputError::OutOfRange`] when a component leaves its degree range.
    pub fn validate(self) -> Result<Self, InputError> {
        let Self {
            latitude,
            longitude,
        } = self;
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(InputError::NonFinite {
                latitude,
                longitude,
            });
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InputError::OutOfRange {
                latitude,
                longitude,
            });
        }
        Ok(self)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Circular service zone with localized names.
pub struct Zone {
    /// Unique identifier within a registry.
    pub id: ZoneId,
    /// Display name per supported language.
    pub names: BTreeMap<Language, String>,
    /// Center of the zone.
    pub center: GeoPoint,
    /// Maximum great-circle distance from the center, in meters.
    pub radius_meters: f64,
    /// Collection schedule page to offer for this zone.
    #[serde(default)]
    pub schedule_url: Option<String>,
}

impl Zone {
    /// Localized display name.
    ///
    /// Registries only hold zones with a name for every language, so the
    /// identifier fallback is reached only for hand-built zones.
    #[must_use]
    pub fn name(&self, language: Language) -> &str {
        self.names
            .get(&language)
            .map_or_else(|| self.id.as_str(), String::as_str)
    }

    /// Distance from the zone center to `point`, in meters.
    #[must_use]
    pub fn distance_to(&self, point: GeoPoint) -> f64 {
        distance_meters(self.center, point)
    }

    /// Whether `point` lies within the radius (boundary inclusive).
    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.distance_to(point) <= self.radius_meters
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Coarse rectangular bound of the region the application serves.
pub struct ServiceArea {
    /// Southern edge.
    pub min_lat: f64,
    /// Northern edge.
    pub max_lat: f64,
    /// Western edge.
    pub min_lng: f64,
    /// Eastern edge.
    pub max_lng: f64,
}

impl ServiceArea {
    /// Inclusive bounds check.
    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.latitude >= self.min_lat
            && point.latitude <= self.max_lat
            && point.longitude >= self.min_lng
            && point.longitude <= self.max_lng
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Unvalidated registry configuration as read from a source.
pub struct RegistryDefinition {
    /// Bounding box of the overall service area.
    pub service_area: ServiceArea,
    /// Zones in priority order.
    pub zones: Vec<Zone>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip_through_from_str() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>(), Ok(language));
        }
        assert_eq!("JA".parse::<Language>(), Ok(Language::Japanese));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn language_next_cycles_through_all() {
        let mut language = Language::English;
        for expected in Language::ALL.into_iter().skip(1) {
            language = language.next();
            assert_eq!(language, expected);
        }
        assert_eq!(language.next(), Language::English);
    }

    #[test]
    fn validate_rejects_non_finite_points() {
        let err = GeoPoint::new(f64::NAN, 131.0).validate().unwrap_err();
        assert!(matches!(err, InputError::NonFinite { .. }));
        let err = GeoPoint::new(33.0, f64::INFINITY).validate().unwrap_err();
        assert!(matches!(err, InputError::NonFinite { .. }));
    }

    #[test]
    fn validate_rejects_out_of_range_points() {
        let err = GeoPoint::new(90.5, 0.0).validate().unwrap_err();
        assert!(matches!(err, InputError::OutOfRange { .. }));
        let err = GeoPoint::new(0.0, -180.1).validate().unwrap_err();
        assert!(matches!(err, InputError::OutOfRange { .. }));
        assert!(GeoPoint::new(-90.0, 180.0).validate().is_ok());
    }

    #[test]
    fn service_area_bounds_are_inclusive() {
        let area = ServiceArea {
            min_lat: 33.0,
            max_lat: 34.0,
            min_lng: 131.0,
            max_lng: 132.0,
        };
        assert!(area.contains(GeoPoint::new(33.0, 131.0)));
        assert!(area.contains(GeoPoint::new(34.0, 132.0)));
        assert!(!area.contains(GeoPoint::new(34.000_001, 131.5)));
        assert!(!area.contains(GeoPoint::new(f64::NAN, 131.5)));
    }

    #[test]
    fn zone_deserializes_from_language_keyed_names() {
        let zone: Zone = serde_json::from_str(
            r#"{
                "id": "test",
                "names": {"en": "Test", "ja": "テスト", "ko": "테스트", "zh": "测试"},
                "center": {"latitude": 33.0, "longitude": 131.0},
                "radius_meters": 100.0
            }"#,
        )
        .unwrap();
        assert_eq!(zone.id, ZoneId::new("test"));
        assert_eq!(zone.name(Language::Korean), "테스트");
        assert!(zone.schedule_url.is_none());
    }

    #[test]
    fn zone_rejects_unknown_language_keys() {
        let result = serde_json::from_str::<Zone>(
            r#"{
                "id": "test",
                "names": {"fr": "Essai"},
                "center": {"latitude": 33.0, "longitude": 131.0},
                "radius_meters": 100.0
            }"#,
        );
        assert!(result.is_err());
    }
}

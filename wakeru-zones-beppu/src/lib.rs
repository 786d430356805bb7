//! Built-in zone definitions for Beppu, embedded at compile time.

use log::debug;
use wakeru_core::{
    error::ConfigError,
    model::RegistryDefinition,
    ports::{ZoneSource, parse_definition},
    registry::ZoneRegistry,
};

const ZONES_JSON: &str = include_str!("../data/zones.json");

/// Zone source serving the embedded Beppu definition.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeppuZones;

impl ZoneSource for BeppuZones {
    fn name(&self) -> &str {
        "beppu (built-in)"
    }

    fn definition(&self) -> Result<RegistryDefinition, ConfigError> {
        debug!("decoding built-in Beppu zones");
        parse_definition(ZONES_JSON)
    }
}

/// Build the validated Beppu registry.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the embedded definition is invalid.
pub fn registry() -> Result<ZoneRegistry, ConfigError> {
    ZoneRegistry::load(&BeppuZones)
}

#[cfg(test)]
mod tests {
    use wakeru_core::model::{GeoPoint, Language, ZoneId};

    use super::*;

    #[test]
    fn embedded_definition_is_valid() {
        let registry = registry().unwrap();
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn every_zone_center_resolves_to_itself() {
        let registry = registry().unwrap();
        for zone in registry.zones() {
            let resolved = registry.resolve_zone(zone.center).unwrap().unwrap();
            assert_eq!(resolved.id, zone.id);
        }
    }

    #[test]
    fn campus_lookup_and_resolution() {
        let registry = registry().unwrap();
        let campus = registry
            .lookup_zone_by_id(&ZoneId::new("apu_campus"))
            .unwrap();
        assert!((campus.radius_meters - 800.0).abs() < f64::EPSILON);
        assert_eq!(campus.name(Language::Japanese), "APUキャンパス");

        let resolved = registry
            .resolve_zone(GeoPoint::new(33.1599, 131.6046))
            .unwrap()
            .unwrap();
        assert_eq!(resolved.id.as_str(), "apu_campus");

        assert!(
            registry
                .resolve_zone(GeoPoint::new(33.25, 131.60))
                .unwrap()
                .is_none()
        );
        assert!(
            registry
                .lookup_zone_by_id(&ZoneId::new("nonexistent"))
                .is_none()
        );
    }

    #[test]
    fn service_area_covers_beppu_but_not_tokyo() {
        let registry = registry().unwrap();
        assert!(registry.is_within_service_area(GeoPoint::new(33.28, 131.49)));
        assert!(!registry.is_within_service_area(GeoPoint::new(35.0, 139.0)));
    }
}

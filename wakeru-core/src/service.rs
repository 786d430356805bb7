//! High-level service facade over the zone registry.

use std::sync::Arc;

use serde::Serialize;

use crate::error::InputError;
use crate::model::{GeoPoint, Language, Zone, ZoneId};
use crate::registry::ZoneRegistry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// How well a point is covered by location-tailored content.
pub enum Coverage {
    /// Inside a specific zone.
    Zone(ZoneId),
    /// Inside the service area but in no zone; use the generic experience.
    ServiceArea,
    /// Outside the service area and every zone.
    Outside,
}

#[derive(Debug, Clone, Serialize)]
/// Outcome of locating a point.
pub struct Located {
    /// The queried point.
    pub point: GeoPoint,
    /// Resolved coverage.
    pub coverage: Coverage,
    /// Result of the bounding-box check, reported separately from zones.
    pub in_service_area: bool,
}

impl Located {
    /// Identifier of the matched zone, if any.
    #[must_use]
    pub fn zone_id(&self) -> Option<&ZoneId> {
        match &self.coverage {
            Coverage::Zone(id) => Some(id),
            Coverage::ServiceArea | Coverage::Outside => None,
        }
    }
}

/// Public entry point for location-tailored lookups.
pub struct ZoneService {
    registry: Arc<ZoneRegistry>,
}

impl ZoneService {
    /// Create a new service bound to the provided registry.
    #[must_use]
    pub fn new(registry: Arc<ZoneRegistry>) -> Self {
        Self { registry }
    }

    /// Underlying registry.
    #[must_use]
    pub fn registry(&self) -> &ZoneRegistry {
        &self.registry
    }

    /// All zones with their names in `language`, in registry order.
    #[must_use]
    pub fn zones(&self, language: Language) -> Vec<(ZoneId, String)> {
        self.registry
            .zones()
            .iter()
            .map(|zone| (zone.id.clone(), zone.name(language).to_owned()))
            .collect()
    }

    /// Resolve a point to its zone and service-area status.
    ///
    /// A zone match wins over the bounding box, so a misconfigured zone that
    /// pokes outside the box still reports [`Coverage::Zone`].
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] for non-finite or out-of-range coordinates.
    pub fn locate(&self, point: GeoPoint) -> Result<Located, InputError> {
        let zone = self.registry.resolve_zone(point)?;
        let in_service_area = self.registry.is_within_service_area(point);

        let coverage = match zone {
            Some(zone) => Coverage::Zone(zone.id.clone()),
            None if in_service_area => Coverage::ServiceArea,
            None => Coverage::Outside,
        };

        Ok(Located {
            point,
            coverage,
            in_service_area,
        })
    }

    /// Re-hydrate a stored zone identifier.
    #[must_use]
    pub fn zone(&self, id: &ZoneId) -> Option<&Zone> {
        self.registry.lookup_zone_by_id(id)
    }

    /// Localized name of a stored zone identifier.
    #[must_use]
    pub fn zone_name(&self, id: &ZoneId, language: Language) -> Option<&str> {
        self.zone(id).map(|zone| zone.name(language))
    }
}

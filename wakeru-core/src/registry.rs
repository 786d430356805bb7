//! Validated, immutable registry of service zones.

use std::collections::HashMap;

use log::{debug, warn};

use crate::error::{ConfigError, InputError};
use crate::model::{GeoPoint, Language, RegistryDefinition, ServiceArea, Zone, ZoneId};
use crate::ports::ZoneSource;

/// Ordered zones plus the service area, checked once at construction.
///
/// Zone order is priority order: when radii overlap, the earlier zone wins.
#[derive(Debug, Clone)]
pub struct ZoneRegistry {
    zones: Vec<Zone>,
    index: HashMap<ZoneId, usize>,
    service_area: ServiceArea,
}

impl ZoneRegistry {
    /// Validate a definition and build the registry from it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for duplicate ids, non-positive radii, missing
    /// localized names, invalid centers, or an invalid service area.
    pub fn new(definition: RegistryDefinition) -> Result<Self, ConfigError> {
        let RegistryDefinition {
            service_area,
            zones,
        } = definition;

        validate_service_area(&service_area)?;

        let mut index = HashMap::with_capacity(zones.len());
        for (position, zone) in zones.iter().enumerate() {
            validate_zone(zone)?;
            if index.insert(zone.id.clone(), position).is_some() {
                return Err(ConfigError::DuplicateZoneId(zone.id.clone()));
            }
        }

        debug!("zone registry ready with {} zones", zones.len());
        Ok(Self {
            zones,
            index,
            service_area,
        })
    }

    /// Fetch a definition from `source` and validate it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the source fails or the definition is invalid.
    pub fn load(source: &dyn ZoneSource) -> Result<Self, ConfigError> {
        let registry = source.definition().and_then(Self::new);
        if let Err(err) = &registry {
            warn!("rejected zone definitions from {}: {err}", source.name());
        }
        registry
    }

    /// Zones in priority order.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Configured service area.
    #[must_use]
    pub fn service_area(&self) -> ServiceArea {
        self.service_area
    }

    /// Number of zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether the registry holds no zones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// First zone, in registry order, whose radius covers `point`.
    ///
    /// `Ok(None)` means the point is outside every zone.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] for non-finite or out-of-range coordinates.
    pub fn resolve_zone(&self, point: GeoPoint) -> Result<Option<&Zone>, InputError> {
        let point = point.validate()?;
        let zone = self.zones.iter().find(|zone| zone.contains(point));
        debug!(
            "resolved ({point}) to {}",
            zone.map_or("no zone", |zone| zone.id.as_str())
        );
        Ok(zone)
    }

    /// Zone with the given identifier.
    #[must_use]
    pub fn lookup_zone_by_id(&self, id: &ZoneId) -> Option<&Zone> {
        self.index
            .get(id)
            .and_then(|position| self.zones.get(*position))
    }

    /// Whether `point` lies inside the service area bounding box.
    ///
    /// Independent of zone membership.
    #[must_use]
    pub fn is_within_service_area(&self, point: GeoPoint) -> bool {
        self.service_area.contains(point)
    }

    /// Distance from `point` to every zone center, in registry order.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] for non-finite or out-of-range coordinates.
    pub fn distances(&self, point: GeoPoint) -> Result<Vec<(&Zone, f64)>, InputError> {
        let point = point.validate()?;
        Ok(self
            .zones
            .iter()
            .map(|zone| (zone, zone.distance_to(point)))
            .collect())
    }
}

fn validate_zone(zone: &Zone) -> Result<(), ConfigError> {
    if !zone.radius_meters.is_finite() || zone.radius_meters <= 0.0 {
        return Err(ConfigError::NonPositiveRadius {
            zone: zone.id.clone(),
            radius: zone.radius_meters,
        });
    }

    if zone.center.validate().is_err() {
        return Err(ConfigError::InvalidCenter {
            zone: zone.id.clone(),
            latitude: zone.center.latitude,
            longitude: zone.center.longitude,
        });
    }

    let missing = Language::ALL.into_iter().find(|language| {
        zone.names
            .get(language)
            .is_none_or(|name| name.trim().is_empty())
    });
    if let Some(language) = missing {
        return Err(ConfigError::MissingName {
            zone: zone.id.clone(),
            language,
        });
    }

    Ok(())
}

fn validate_service_area(area: &ServiceArea) -> Result<(), ConfigError> {
    let corners = [
        GeoPoint::new(area.min_lat, area.min_lng),
        GeoPoint::new(area.max_lat, area.max_lng),
    ];
    if let Some(err) = corners.into_iter().find_map(|corner| corner.validate().err()) {
        return Err(ConfigError::InvalidServiceArea(err.to_string()));
    }
    if area.min_lat > area.max_lat || area.min_lng > area.max_lng {
        return Err(ConfigError::InvalidServiceArea(format!(
            "minimum exceeds maximum in [{}, {}] x [{}, {}]",
            area.min_lat, area.max_lat, area.min_lng, area.max_lng
        )));
    }
    Ok(())
}

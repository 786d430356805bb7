use std::sync::Arc;

use wakeru_core::{
    model::{GeoPoint, Language, ZoneId},
    service::{Located, ZoneService},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Latitude,
    Longitude,
}

/// One row of the distance table.
pub(crate) struct ZoneDistance {
    pub id: ZoneId,
    pub name: String,
    pub radius_meters: f64,
    pub distance_meters: f64,
}

pub(crate) struct App {
    pub service: Arc<ZoneService>,

    pub language: Language,
    pub home_zone: Option<ZoneId>,

    pub field: Field,
    pub latitude_input: String,
    pub longitude_input: String,

    pub located: Option<Located>,
    pub distances: Vec<ZoneDistance>,

    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new(
        service: Arc<ZoneService>,
        language: Language,
        home_zone: Option<ZoneId>,
    ) -> Self {
        Self {
            service,
            language,
            home_zone,
            field: Field::Latitude,
            latitude_input: String::new(),
            longitude_input: String::new(),
            located: None,
            distances: Vec::new(),
            error_message: None,
        }
    }

    pub(crate) fn active_input_mut(&mut self) -> &mut String {
        match self.field {
            Field::Latitude => &mut self.latitude_input,
            Field::Longitude => &mut self.longitude_input,
        }
    }

    pub(crate) fn toggle_field(&mut self) {
        self.field = match self.field {
            Field::Latitude => Field::Longitude,
            Field::Longitude => Field::Latitude,
        };
    }

    pub(crate) fn cycle_language(&mut self) {
        self.language = self.language.next();
        self.refresh_names();
    }

    /// Parse both inputs and resolve them against the registry.
    pub(crate) fn resolve(&mut self) {
        let point = match self.parse_point() {
            Ok(point) => point,
            Err(msg) => {
                self.error_message = Some(msg);
                return;
            }
        };

        let located = self.service.locate(point);
        let distances = self.service.registry().distances(point);

        match (located, distances) {
            (Ok(located), Ok(distances)) => {
                self.distances = distances
                    .into_iter()
                    .map(|(zone, distance_meters)| ZoneDistance {
                        id: zone.id.clone(),
                        name: zone.name(self.language).to_owned(),
                        radius_meters: zone.radius_meters,
                        distance_meters,
                    })
                    .collect();
                self.located = Some(located);
                self.error_message = None;
            }
            (Err(err), _) | (_, Err(err)) => {
                self.located = None;
                self.distances.clear();
                self.error_message = Some(format!("Cannot resolve: {err}"));
            }
        }
    }

    pub(crate) fn home_zone_name(&self) -> Option<&str> {
        let id = self.home_zone.as_ref()?;
        self.service.zone_name(id, self.language)
    }

    fn parse_point(&self) -> Result<GeoPoint, String> {
        let latitude = parse_degrees("latitude", &self.latitude_input)?;
        let longitude = parse_degrees("longitude", &self.longitude_input)?;
        Ok(GeoPoint::new(latitude, longitude))
    }

    fn refresh_names(&mut self) {
        let language = self.language;
        for row in &mut self.distances {
            if let Some(name) = self.service.zone_name(&row.id, language) {
                name.clone_into(&mut row.name);
            }
        }
    }
}

fn parse_degrees(label: &str, input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("Type a {label} first"));
    }
    trimmed
        .parse::<f64>()
        .map_err(|err| format!("Invalid {label} {trimmed:?}: {err}"))
}

#[cfg(test)]
mod tests {
    use wakeru_core::service::Coverage;

    use super::*;

    fn app() -> App {
        let registry = wakeru_zones_beppu::registry().unwrap();
        let service = Arc::new(ZoneService::new(Arc::new(registry)));
        App::new(service, Language::English, Some(ZoneId::new("apu_campus")))
    }

    #[test]
    fn resolve_fills_coverage_and_distances() {
        let mut app = app();
        app.latitude_input = "33.1599".into();
        app.longitude_input = "131.6046".into();
        app.resolve();

        let located = app.located.as_ref().unwrap();
        assert_eq!(located.coverage, Coverage::Zone(ZoneId::new("apu_campus")));
        assert_eq!(app.distances.len(), app.service.registry().len());
        assert!(app.error_message.is_none());
    }

    #[test]
    fn resolve_reports_unparseable_input() {
        let mut app = app();
        app.latitude_input = "33.1.2".into();
        app.longitude_input = "131.6".into();
        app.resolve();
        assert!(app.located.is_none());
        assert!(app.error_message.is_some());
    }

    #[test]
    fn resolve_reports_out_of_range_input() {
        let mut app = app();
        app.latitude_input = "95".into();
        app.longitude_input = "131.6".into();
        app.resolve();
        assert!(app.located.is_none());
        assert!(app.error_message.unwrap().starts_with("Cannot resolve"));
    }

    #[test]
    fn cycling_language_renames_rows() {
        let mut app = app();
        app.latitude_input = "33.1599".into();
        app.longitude_input = "131.6046".into();
        app.resolve();
        app.cycle_language();

        assert_eq!(app.language, Language::Japanese);
        assert_eq!(app.home_zone_name(), Some("APUキャンパス"));
        let first = app.distances.first().unwrap();
        assert_eq!(first.name, "APUキャンパス");
    }

    #[test]
    fn toggle_field_switches_active_input() {
        let mut app = app();
        app.active_input_mut().push('3');
        app.toggle_field();
        app.active_input_mut().push('1');
        assert_eq!(app.latitude_input, "3");
        assert_eq!(app.longitude_input, "1");
    }
}

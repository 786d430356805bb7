//! Core types and zone lookup for the wakeru waste guidance service.

/// Configuration and query errors.
pub mod error;
/// Great-circle distance on a spherical Earth.
pub mod geo;
/// Domain models for points, languages, zones, and the service area.
pub mod model;
/// Traits and built-in sources that supply zone definitions.
pub mod ports;
/// Validated, read-only zone registry.
pub mod registry;
/// High-level service facade used by clients.
pub mod service;

pub use error::*;
pub use geo::*;
pub use model::*;
pub use ports::*;
pub use registry::*;
pub use service::*;

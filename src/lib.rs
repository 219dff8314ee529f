//! GeoRouter - grid-based route planning over geographic coordinates
//!
//! This crate plans routes between two lat/lng coordinates on an implicit
//! 8-connected grid, softly steering around user-placed obstacles via
//! proximity penalties. The search core is a pure function; a
//! `RoutingSession` layers obstacle bookkeeping and a penalty-relaxation
//! fallback policy on top of it.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod planning;

// Re-export common types for convenience
pub use common::{GeoPath, GeoPoint, GridKey, ObstacleSet};
pub use common::RoutePlanner;
pub use common::{RouterError, RouterResult};
pub use planning::{grid_search, GridRoutePlanner, RoutingSession, SearchConfig, SearchStrategy};
pub use utils::RoutePlot;

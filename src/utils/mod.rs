//! Utility modules for georouter

pub mod geo;
pub mod visualization;

pub use geo::*;
pub use visualization::RoutePlot;

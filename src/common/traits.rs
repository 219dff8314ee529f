//! Common traits defining interfaces for route planning

use crate::common::types::{GeoPath, GeoPoint, ObstacleSet};

/// Trait for route planning algorithms
///
/// Implementations never fail with an error: an unreachable end is reported
/// as the single-element sentinel path so callers can retry with relaxed
/// parameters or fall back to a previously known good route.
pub trait RoutePlanner {
    /// Plan a route from start to end around the given obstacles
    fn plan(&self, start: GeoPoint, end: GeoPoint, obstacles: &ObstacleSet) -> GeoPath;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DirectPlanner;

    impl RoutePlanner for DirectPlanner {
        fn plan(&self, start: GeoPoint, end: GeoPoint, _obstacles: &ObstacleSet) -> GeoPath {
            GeoPath::from_points(vec![start, end])
        }
    }

    #[test]
    fn test_route_planner_trait_object() {
        let planner: Box<dyn RoutePlanner> = Box::new(DirectPlanner);
        let path = planner.plan(
            GeoPoint::new(12.971, 77.5946),
            GeoPoint::new(12.976, 77.5996),
            &ObstacleSet::new(),
        );
        assert_eq!(path.len(), 2);
        assert!(!path.is_trivial());
    }
}

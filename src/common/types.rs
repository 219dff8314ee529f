//! Common types used throughout georouter

use std::collections::HashSet;

use crate::utils::geo;

/// Grid identity is defined at this precision: coordinates within half of
/// 1e-6 degrees of each other share a key.
const KEY_SCALE: f64 = 1e6;

/// Geographic coordinate (latitude, longitude) in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Euclidean distance in coordinate-degree space.
    ///
    /// This is the planning metric, not a ground distance; see
    /// [`geo::haversine_km`] for the physical one.
    pub fn distance_deg(&self, other: &GeoPoint) -> f64 {
        ((self.lat - other.lat).powi(2) + (self.lng - other.lng).powi(2)).sqrt()
    }

    /// Great-circle distance in kilometers.
    pub fn haversine_km(&self, other: &GeoPoint) -> f64 {
        geo::haversine_km(self, other)
    }

    /// Grid-node identity of this coordinate.
    pub fn grid_key(&self) -> GridKey {
        GridKey {
            lat_e6: (self.lat * KEY_SCALE).round() as i64,
            lng_e6: (self.lng * KEY_SCALE).round() as i64,
        }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from(tuple: (f64, f64)) -> Self {
        Self { lat: tuple.0, lng: tuple.1 }
    }
}

/// Grid-node key: a coordinate rounded to fixed 1e-6 degree precision.
///
/// Obstacle membership and best-cost bookkeeping both use this key, so the
/// two always agree on node identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridKey {
    pub lat_e6: i64,
    pub lng_e6: i64,
}

impl GridKey {
    /// The rounded coordinate this key stands for.
    pub fn to_point(&self) -> GeoPoint {
        GeoPoint::new(self.lat_e6 as f64 / KEY_SCALE, self.lng_e6 as f64 / KEY_SCALE)
    }
}

/// Route represented as an ordered sequence of coordinates
///
/// A single-element path is the "no path found" sentinel; callers detect it
/// with [`GeoPath::is_trivial`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPath {
    points: Vec<GeoPoint>,
}

impl GeoPath {
    pub fn from_points(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the path does not actually connect two points.
    pub fn is_trivial(&self) -> bool {
        self.points.len() < 2
    }

    pub fn first(&self) -> Option<&GeoPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&GeoPoint> {
        self.points.last()
    }

    /// Total route length in kilometers, summed great-circle leg by leg.
    ///
    /// Deliberately independent of the grid-search cost metric.
    pub fn total_km(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.points
            .windows(2)
            .map(|w| geo::haversine_km(&w[0], &w[1]))
            .sum()
    }

    pub fn lat_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.lat).collect()
    }

    pub fn lng_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.lng).collect()
    }
}

/// Obstacle coordinates, stored by grid key
///
/// Mutated only between searches (add/clear), read by cost computation.
#[derive(Debug, Clone, Default)]
pub struct ObstacleSet {
    keys: HashSet<GridKey>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self { keys: HashSet::new() }
    }

    /// Insert an obstacle; returns false if its grid node was already marked.
    pub fn add(&mut self, point: GeoPoint) -> bool {
        self.keys.insert(point.grid_key())
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, key: GridKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Obstacle coordinates at grid precision.
    pub fn points(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.keys.iter().map(GridKey::to_point)
    }

    /// Soft cost for standing near obstacles: each obstacle within `radius`
    /// contributes `weight * (1 - d / radius)`, summed without a cap.
    pub fn proximity_penalty(&self, node: &GeoPoint, radius: f64, weight: f64) -> f64 {
        self.points()
            .map(|obs| {
                let d = node.distance_deg(&obs);
                if d < radius {
                    weight * (1.0 - d / radius)
                } else {
                    0.0
                }
            })
            .sum()
    }

    /// True when any obstacle lies within `radius` of the straight segment
    /// from `a` to `b`.
    pub fn blocks_segment(&self, a: &GeoPoint, b: &GeoPoint, radius: f64) -> bool {
        self.points()
            .any(|obs| geo::point_to_segment_deg(&obs, a, b) < radius)
    }
}

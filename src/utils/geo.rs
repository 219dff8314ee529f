//! Geometric helpers in coordinate-degree space

use crate::common::types::GeoPoint;

/// Mean Earth radius [km]
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers.
pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let sin_d_lat = (d_lat / 2.0).sin();
    let sin_d_lng = (d_lng / 2.0).sin();
    let h = sin_d_lat * sin_d_lat + lat1.cos() * lat2.cos() * sin_d_lng * sin_d_lng;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance from point `p` to the segment `a`-`b`, in degree space.
///
/// The projection parameter is clamped to the segment, so points beyond
/// either endpoint measure against that endpoint.
pub fn point_to_segment_deg(p: &GeoPoint, a: &GeoPoint, b: &GeoPoint) -> f64 {
    let ap_lat = p.lat - a.lat;
    let ap_lng = p.lng - a.lng;
    let ab_lat = b.lat - a.lat;
    let ab_lng = b.lng - a.lng;

    let dot = ap_lat * ab_lat + ap_lng * ab_lng;
    let len_sq = ab_lat * ab_lat + ab_lng * ab_lng;
    // Degenerate segment: measure against the single point
    let t = if len_sq > 0.0 { (dot / len_sq).max(0.0).min(1.0) } else { 0.0 };

    let closest = GeoPoint::new(a.lat + t * ab_lat, a.lng + t * ab_lng);
    p.distance_deg(&closest)
}

//! Geodesy helpers for short regional legs.
//!
//! Distances use a flat-earth approximation: latitude degrees scale by a fixed metres-per-degree
//! constant and longitude degrees additionally by the cosine of the mean latitude. Errors grow
//! with leg length and latitude, so continental-scale legs are only indicative.

use mission_core::constants::METERS_PER_DEGREE;

/// A polygon as a list of `(lat_deg, lon_deg)` vertices. Closing edge is implicit.
pub type Polygon = Vec<(f64, f64)>;

/// Great-circle initial bearing from the first point to the second, in `[0, 360)`.
pub fn bearing_deg(lat0: f64, lon0: f64, lat1: f64, lon1: f64) -> f64 {
    if (lat1 - lat0).abs() < 1e-9 && (lon1 - lon0).abs() < 1e-9 {
        return 0.0;
    }
    let dlon = (lon1 - lon0).to_radians();
    let (lat0_r, lat1_r) = (lat0.to_radians(), lat1.to_radians());
    let x = dlon.sin() * lat1_r.cos();
    let y = lat0_r.cos() * lat1_r.sin() - lat0_r.sin() * lat1_r.cos() * dlon.cos();
    x.atan2(y).to_degrees().rem_euclid(360.0)
}

/// Flat-earth distance in metres.
pub fn distance_m(lat0: f64, lon0: f64, lat1: f64, lon1: f64) -> f64 {
    let mean_lat = ((lat0 + lat1) / 2.0).to_radians();
    let dlat = (lat1 - lat0) * METERS_PER_DEGREE;
    let dlon = (lon1 - lon0) * METERS_PER_DEGREE * mean_lat.cos();
    dlat.hypot(dlon)
}

/// Ray-casting containment test treating latitude as `y` and longitude as `x`.
/// Degenerate polygons (fewer than three vertices) contain nothing.
pub fn point_in_polygon(lat: f64, lon: f64, polygon: &[(f64, f64)]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (yi, xi) = polygon[i];
        let (yj, xj) = polygon[j];
        if (yi > lat) != (yj > lat) && lon < (xj - xi) * (lat - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

//! Simplified two-body orbit helpers for low Earth orbit scheduling.
//!
//! The orbit is circular at a fixed inclination with the ascending node at longitude zero at
//! epoch. There is no nodal precession, drag or Earth rotation, and visibility is a cone around
//! the sub-satellite point rather than an elevation mask.

use mission_core::angles::wrap_longitude_deg;
use mission_core::constants::{EARTH_RADIUS_KM, MU_EARTH_KM3_S2};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Orbit geometry and sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    pub altitude_km: f64,
    /// ISS-like 51.6° by default.
    pub inclination_deg: f64,
    /// Largest angular distance from the sub-satellite point at which a ground point is visible.
    pub visibility_half_angle_deg: f64,
    /// Sampling step of the pass search. Passes shorter than this may be missed.
    pub sample_step_s: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            altitude_km: 400.0,
            inclination_deg: 51.6,
            visibility_half_angle_deg: 60.0,
            sample_step_s: 30.0,
        }
    }
}

impl OrbitConfig {
    pub fn period_s(&self) -> f64 {
        orbit_period_s(self.altitude_km)
    }

    /// Sub-satellite point at `t` seconds from epoch.
    pub fn ground_track(&self, t: f64) -> (f64, f64) {
        ground_track_position(self.altitude_km, self.inclination_deg, t)
    }
}

/// Keplerian period (s) of a circular orbit `altitude_km` above the mean Earth radius.
pub fn orbit_period_s(altitude_km: f64) -> f64 {
    let r = EARTH_RADIUS_KM + altitude_km;
    2.0 * std::f64::consts::PI * (r.powi(3) / MU_EARTH_KM3_S2).sqrt()
}

/// Sub-satellite `(lat_deg, lon_deg)` at time `t`, longitude wrapped into `[-180, 180]`.
pub fn ground_track_position(altitude_km: f64, inclination_deg: f64, t: f64) -> (f64, f64) {
    let mean_motion = 2.0 * std::f64::consts::PI / orbit_period_s(altitude_km);
    let arg = mean_motion * t;
    let inc = inclination_deg.to_radians();
    let lat = (inc.sin() * arg.sin()).asin();
    let lon = lat.tan().atan2(inc.cos()) + arg;
    (lat.to_degrees(), wrap_longitude_deg(lon.to_degrees()))
}

/// Great-circle angular separation in degrees (haversine).
pub fn angular_distance_deg(lat0: f64, lon0: f64, lat1: f64, lon1: f64) -> f64 {
    let dlat = (lat1 - lat0).to_radians();
    let dlon = (lon1 - lon0).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat0.to_radians().cos() * lat1.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    (2.0 * a.sqrt().min(1.0).asin()).to_degrees()
}

/// Whether the target lies within `max_angle_deg` of the sub-satellite point.
pub fn is_visible(
    sat_lat: f64,
    sat_lon: f64,
    target_lat: f64,
    target_lon: f64,
    max_angle_deg: f64,
) -> bool {
    angular_distance_deg(sat_lat, sat_lon, target_lat, target_lon) <= max_angle_deg
}

/// A contiguous interval (s) during which a ground point is visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PassWindow {
    pub start_s: f64,
    pub end_s: f64,
}

impl PassWindow {
    pub fn duration_s(&self) -> f64 {
        self.end_s - self.start_s
    }
}

/// Sample the orbit every `sample_step_s` over `[t_start, t_end]` and return each visible run.
///
/// A window closes at the first sample where the point is no longer visible; one still open at
/// the end of the interval closes at `t_end`.
pub fn pass_windows(
    orbit: &OrbitConfig,
    lat: f64,
    lon: f64,
    t_start: f64,
    t_end: f64,
) -> Vec<PassWindow> {
    let dt = orbit.sample_step_s;
    if !dt.is_finite() || dt <= 0.0 {
        warn!(dt, "pass search needs a positive sampling step");
        return Vec::new();
    }

    let mut windows = Vec::new();
    let mut open: Option<f64> = None;
    let mut t = t_start;
    while t <= t_end {
        let (sat_lat, sat_lon) = orbit.ground_track(t);
        let visible = is_visible(sat_lat, sat_lon, lat, lon, orbit.visibility_half_angle_deg);
        match (visible, open) {
            (true, None) => open = Some(t),
            (false, Some(start_s)) => {
                windows.push(PassWindow { start_s, end_s: t });
                open = None;
            }
            _ => {}
        }
        t += dt;
    }
    if let Some(start_s) = open {
        windows.push(PassWindow {
            start_s,
            end_s: t_end,
        });
    }
    windows
}

/// Ground target with a science value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub value: f64,
}

/// Pass windows over one target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetWindows {
    pub target_index: usize,
    pub target: Target,
    pub windows: Vec<PassWindow>,
}

/// Run [`pass_windows`] once per target, keeping each target's index and value.
pub fn observation_windows(
    orbit: &OrbitConfig,
    targets: &[Target],
    t_start: f64,
    t_end: f64,
) -> Vec<TargetWindows> {
    targets
        .iter()
        .enumerate()
        .map(|(target_index, target)| TargetWindows {
            target_index,
            target: *target,
            windows: pass_windows(orbit, target.lat_deg, target.lon_deg, t_start, t_end),
        })
        .collect()
}

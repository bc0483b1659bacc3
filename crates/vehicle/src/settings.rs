//! Conversion from mission settings into runtime vehicle inputs.

use mission_config::{AircraftSettings, WaypointSetting};

use crate::geo::Polygon;
use crate::model::{VehicleModel, Waypoint};
use crate::wind::WindVector;

impl From<&AircraftSettings> for VehicleModel {
    fn from(settings: &AircraftSettings) -> Self {
        Self {
            kind: settings.vehicle_kind,
            cruise_speed_m_s: settings.cruise_speed_m_s,
            max_turn_rate_deg_s: settings.max_turn_rate_deg_s,
            energy_budget: settings.energy_budget(),
            consumption_per_s: settings.consumption_per_s,
            turn_penalty_per_deg: settings.turn_penalty_per_deg,
            min_altitude_m: settings.min_altitude_m,
            max_altitude_m: settings.max_altitude_m,
            default_altitude_m: settings.default_altitude_m,
            nominal_wind: WindVector::CALM,
        }
    }
}

impl From<&WaypointSetting> for Waypoint {
    fn from(setting: &WaypointSetting) -> Self {
        Self {
            lat_deg: setting.lat_deg(),
            lon_deg: setting.lon_deg(),
            alt_m: setting.alt_m(),
        }
    }
}

/// Waypoints in settings order, altitudes as written.
pub fn waypoints(settings: &AircraftSettings) -> Vec<Waypoint> {
    settings.waypoints.iter().map(Waypoint::from).collect()
}

/// No-fly polygons as configured.
pub fn no_fly_zones(settings: &AircraftSettings) -> Vec<Polygon> {
    settings.no_fly_zones.clone()
}

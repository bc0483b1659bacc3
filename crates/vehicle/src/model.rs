//! Point-mass kinematics with a turn-rate limit and an energy consumption model.

use mission_core::angles::turn_angle_deg;
use serde::{Deserialize, Serialize};

use crate::VehicleKind;
use crate::geo::{bearing_deg, distance_m};
use crate::wind::{WindModel, WindVector};

/// A waypoint in degrees with an optional altitude in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub alt_m: Option<f64>,
}

impl Waypoint {
    pub const fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            lat_deg,
            lon_deg,
            alt_m: None,
        }
    }

    pub const fn with_altitude(lat_deg: f64, lon_deg: f64, alt_m: f64) -> Self {
        Self {
            lat_deg,
            lon_deg,
            alt_m: Some(alt_m),
        }
    }
}

/// Vehicle state on arrival at a waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VehicleState {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub heading_deg: f64,
    pub time_s: f64,
    pub energy_used: f64,
}

impl VehicleState {
    /// At rest on `waypoint`, heading north, with the clocks at zero.
    pub fn at(waypoint: &Waypoint) -> Self {
        Self {
            lat_deg: waypoint.lat_deg,
            lon_deg: waypoint.lon_deg,
            heading_deg: 0.0,
            time_s: 0.0,
            energy_used: 0.0,
        }
    }
}

/// States visited along a path and the totals relative to the initial state.
#[derive(Debug, Clone, Serialize)]
pub struct PathSimulation {
    pub states: Vec<VehicleState>,
    pub total_time_s: f64,
    pub total_energy: f64,
}

/// Vehicle performance and operating envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleModel {
    pub kind: VehicleKind,
    pub cruise_speed_m_s: f64,
    pub max_turn_rate_deg_s: f64,
    pub energy_budget: f64,
    /// Energy drawn per second of flight or turning.
    pub consumption_per_s: f64,
    /// Extra energy per degree of heading change.
    pub turn_penalty_per_deg: f64,
    pub min_altitude_m: f64,
    pub max_altitude_m: f64,
    pub default_altitude_m: f64,
    /// Wind assumed while planning. Calm unless configured otherwise.
    pub nominal_wind: WindVector,
}

impl Default for VehicleModel {
    fn default() -> Self {
        Self {
            kind: VehicleKind::Plane,
            cruise_speed_m_s: 25.0,
            max_turn_rate_deg_s: 15.0,
            energy_budget: 1.0e6,
            consumption_per_s: 100.0,
            turn_penalty_per_deg: 2.0,
            min_altitude_m: 0.0,
            max_altitude_m: 4_000.0,
            default_altitude_m: 100.0,
            nominal_wind: WindVector::CALM,
        }
    }
}

impl VehicleModel {
    /// Time to fly straight between two points.
    ///
    /// Ground speed is cruise airspeed plus the wind component along the track, sampled at the
    /// segment midpoint at `t0`. It is floored at 1 m/s so strong headwinds cannot stall the
    /// division.
    pub fn segment_time_s<W: WindModel + ?Sized>(
        &self,
        from: (f64, f64),
        to: (f64, f64),
        wind: &W,
        t0: f64,
    ) -> f64 {
        let (lat0, lon0) = from;
        let (lat1, lon1) = to;
        let dist = distance_m(lat0, lon0, lat1, lon1);
        if dist < 1e-6 {
            return 0.0;
        }
        let w = wind.wind_at(t0, (lat0 + lat1) / 2.0, (lon0 + lon1) / 2.0);
        let track = bearing_deg(lat0, lon0, lat1, lon1).to_radians();
        let ground_speed = (self.cruise_speed_m_s + w.along_track(track)).max(1.0);
        dist / ground_speed
    }

    /// Time to change heading by `turn_deg` at the maximum turn rate.
    pub fn turn_time_s(&self, turn_deg: f64) -> f64 {
        if turn_deg.abs() < 1e-6 {
            return 0.0;
        }
        turn_deg.abs() / self.max_turn_rate_deg_s
    }

    /// Energy for `dt` seconds of flight plus the turn penalty for `turn_deg`.
    pub fn segment_energy(&self, dt: f64, turn_deg: f64) -> f64 {
        dt * self.consumption_per_s + turn_deg.abs() * self.turn_penalty_per_deg
    }

    /// Turn towards `(lat, lon)` and fly there.
    pub fn fly_segment<W: WindModel + ?Sized>(
        &self,
        state: &VehicleState,
        lat: f64,
        lon: f64,
        wind: &W,
    ) -> VehicleState {
        let heading = bearing_deg(state.lat_deg, state.lon_deg, lat, lon);
        let turn = turn_angle_deg(state.heading_deg, heading);
        let turn_t = self.turn_time_s(turn);
        let fly_t = self.segment_time_s(
            (state.lat_deg, state.lon_deg),
            (lat, lon),
            wind,
            state.time_s + turn_t,
        );
        let energy = self.segment_energy(fly_t, turn) + turn_t * self.consumption_per_s;

        VehicleState {
            lat_deg: lat,
            lon_deg: lon,
            heading_deg: heading,
            time_s: state.time_s + turn_t + fly_t,
            energy_used: state.energy_used + energy,
        }
    }

    /// Fly through `waypoints` in order, starting from `initial` (normally at `waypoints[0]`).
    pub fn simulate_path<W: WindModel + ?Sized>(
        &self,
        waypoints: &[Waypoint],
        initial: VehicleState,
        wind: &W,
    ) -> PathSimulation {
        let mut states = Vec::with_capacity(waypoints.len().max(1));
        states.push(initial);
        for waypoint in waypoints.iter().skip(1) {
            let last = states[states.len() - 1];
            states.push(self.fly_segment(&last, waypoint.lat_deg, waypoint.lon_deg, wind));
        }
        let last = states[states.len() - 1];
        PathSimulation {
            total_time_s: last.time_s - initial.time_s,
            total_energy: last.energy_used - initial.energy_used,
            states,
        }
    }

    /// Fill and clamp waypoint altitudes into this model's envelope.
    pub fn correct_altitudes(&self, waypoints: &[Waypoint]) -> Vec<Waypoint> {
        correct_waypoint_altitudes(
            waypoints,
            self.min_altitude_m,
            self.max_altitude_m,
            self.default_altitude_m,
        )
    }
}

/// Give every waypoint a concrete altitude inside `[min_m, max_m]`.
///
/// Missing altitudes take `default_m`; out-of-range ones are clamped to the nearest limit.
/// Nothing is rejected, and applying this twice changes nothing.
pub fn correct_waypoint_altitudes(
    waypoints: &[Waypoint],
    min_m: f64,
    max_m: f64,
    default_m: f64,
) -> Vec<Waypoint> {
    waypoints
        .iter()
        .map(|wp| {
            let alt = wp.alt_m.unwrap_or(default_m).max(min_m).min(max_m);
            Waypoint::with_altitude(wp.lat_deg, wp.lon_deg, alt)
        })
        .collect()
}

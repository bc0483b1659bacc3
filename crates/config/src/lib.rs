//! Mission settings models and loaders.
//!
//! Settings files are YAML unless the extension is `.toml`. Every field is optional and falls
//! back to the reference mission: a Vilnius → Warsaw → Berlin → Lisbon flight and a week of
//! observations from a 400 km orbit.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Airframe family. Selects which energy store bounds the endurance budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    /// Fixed-wing aircraft running on a fuel tank.
    #[default]
    #[serde(alias = "fixed-wing")]
    Plane,
    /// Battery-powered drone.
    #[serde(alias = "drone")]
    Uav,
}

/// A waypoint as written in settings: `[lat, lon]` or `[lat, lon, alt_m]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WaypointSetting {
    WithAltitude(f64, f64, f64),
    Surface(f64, f64),
}

impl WaypointSetting {
    pub fn lat_deg(&self) -> f64 {
        match *self {
            Self::WithAltitude(lat, _, _) | Self::Surface(lat, _) => lat,
        }
    }

    pub fn lon_deg(&self) -> f64 {
        match *self {
            Self::WithAltitude(_, lon, _) | Self::Surface(_, lon) => lon,
        }
    }

    pub fn alt_m(&self) -> Option<f64> {
        match *self {
            Self::WithAltitude(_, _, alt) => Some(alt),
            Self::Surface(..) => None,
        }
    }
}

/// Aircraft mission and vehicle model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftSettings {
    pub waypoints: Vec<WaypointSetting>,
    pub vehicle_kind: VehicleKind,
    pub cruise_speed_m_s: f64,
    pub max_turn_rate_deg_s: f64,
    /// Fallback budget when the kind-specific capacity is not positive.
    pub energy_budget_j: f64,
    pub fuel_tank_capacity_j: f64,
    pub battery_capacity_j: f64,
    pub consumption_per_s: f64,
    pub turn_penalty_per_deg: f64,
    pub min_altitude_m: f64,
    pub max_altitude_m: f64,
    pub default_altitude_m: f64,
    /// No-fly polygons, each a list of `[lat, lon]` vertices.
    pub no_fly_zones: Vec<Vec<(f64, f64)>>,
}

impl Default for AircraftSettings {
    fn default() -> Self {
        Self {
            waypoints: vec![
                WaypointSetting::WithAltitude(54.6341, 25.2858, 100.0),
                WaypointSetting::WithAltitude(52.1657, 20.9671, 100.0),
                WaypointSetting::WithAltitude(52.3625, 13.5006, 100.0),
                WaypointSetting::WithAltitude(38.7813, -9.1359, 100.0),
            ],
            vehicle_kind: VehicleKind::Plane,
            cruise_speed_m_s: 25.0,
            max_turn_rate_deg_s: 15.0,
            energy_budget_j: 2.0e6,
            fuel_tank_capacity_j: 2.0e6,
            battery_capacity_j: 2.0e6,
            consumption_per_s: 80.0,
            turn_penalty_per_deg: 2.0,
            min_altitude_m: 0.0,
            max_altitude_m: 4_000.0,
            default_altitude_m: 100.0,
            no_fly_zones: Vec::new(),
        }
    }
}

impl AircraftSettings {
    /// Fuel tank for planes, battery for UAVs, generic budget when that capacity is unset.
    pub fn energy_budget(&self) -> f64 {
        let capacity = match self.vehicle_kind {
            VehicleKind::Plane => self.fuel_tank_capacity_j,
            VehicleKind::Uav => self.battery_capacity_j,
        };
        if capacity > 0.0 {
            capacity
        } else {
            self.energy_budget_j
        }
    }
}

/// Wind-perturbation robustness runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloSettings {
    pub runs: usize,
    /// Half-width of the uniform wind distribution on each axis (m/s).
    pub wind_scale_m_s: f64,
    /// RNG seed; unseeded runs draw from entropy.
    pub seed: Option<u64>,
}

impl Default for MonteCarloSettings {
    fn default() -> Self {
        Self {
            runs: 10,
            wind_scale_m_s: 2.0,
            seed: Some(42),
        }
    }
}

/// Ground target with its science value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetSetting {
    pub lat_deg: f64,
    pub lon_deg: f64,
    #[serde(default = "default_target_value")]
    pub value: f64,
}

fn default_target_value() -> f64 {
    1.0
}

/// Ground station location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationSetting {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

/// Spacecraft orbit, targets and scheduling limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacecraftSettings {
    pub altitude_km: f64,
    pub inclination_deg: f64,
    pub visibility_half_angle_deg: f64,
    pub sample_step_s: f64,
    pub targets: Vec<TargetSetting>,
    pub station: StationSetting,
    pub schedule_days: u32,
    pub min_slew_s: f64,
    pub max_active_per_orbit_s: f64,
}

impl Default for SpacecraftSettings {
    fn default() -> Self {
        Self {
            altitude_km: 400.0,
            inclination_deg: 51.6,
            visibility_half_angle_deg: 60.0,
            sample_step_s: 30.0,
            targets: vec![
                TargetSetting {
                    lat_deg: 52.5,
                    lon_deg: 4.5,
                    value: 1.0,
                },
                TargetSetting {
                    lat_deg: 53.0,
                    lon_deg: 5.0,
                    value: 1.0,
                },
                TargetSetting {
                    lat_deg: 51.0,
                    lon_deg: 3.0,
                    value: 1.0,
                },
            ],
            station: StationSetting {
                lat_deg: 52.0,
                lon_deg: 4.0,
            },
            schedule_days: 7,
            min_slew_s: 60.0,
            max_active_per_orbit_s: 600.0,
        }
    }
}

/// Complete settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionSettings {
    pub aircraft: AircraftSettings,
    pub monte_carlo: MonteCarloSettings,
    pub spacecraft: SpacecraftSettings,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Load and validate mission settings from a YAML or TOML file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<MissionSettings, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let settings: MissionSettings = if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        toml::from_str(&contents)?
    } else {
        serde_yaml::from_str(&contents)?
    };
    settings.validate()?;
    Ok(settings)
}

impl MissionSettings {
    /// Reject values the planners cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let aircraft = &self.aircraft;
        require_positive("aircraft.cruise_speed_m_s", aircraft.cruise_speed_m_s)?;
        require_positive("aircraft.max_turn_rate_deg_s", aircraft.max_turn_rate_deg_s)?;
        require_non_negative("aircraft.consumption_per_s", aircraft.consumption_per_s)?;
        require_non_negative("aircraft.turn_penalty_per_deg", aircraft.turn_penalty_per_deg)?;
        if aircraft.min_altitude_m > aircraft.max_altitude_m {
            return Err(invalid(
                "aircraft.min_altitude_m",
                format!(
                    "{} exceeds max_altitude_m {}",
                    aircraft.min_altitude_m, aircraft.max_altitude_m
                ),
            ));
        }
        if let Some(zone) = aircraft.no_fly_zones.iter().find(|zone| zone.len() < 3) {
            return Err(invalid(
                "aircraft.no_fly_zones",
                format!("polygon with {} vertices needs at least 3", zone.len()),
            ));
        }

        require_non_negative("monte_carlo.wind_scale_m_s", self.monte_carlo.wind_scale_m_s)?;

        let spacecraft = &self.spacecraft;
        require_positive("spacecraft.altitude_km", spacecraft.altitude_km)?;
        require_positive("spacecraft.sample_step_s", spacecraft.sample_step_s)?;
        require_positive(
            "spacecraft.visibility_half_angle_deg",
            spacecraft.visibility_half_angle_deg,
        )?;
        require_non_negative("spacecraft.min_slew_s", spacecraft.min_slew_s)?;
        require_non_negative(
            "spacecraft.max_active_per_orbit_s",
            spacecraft.max_active_per_orbit_s,
        )?;
        if spacecraft.schedule_days == 0 {
            return Err(invalid("spacecraft.schedule_days", "must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} must be positive")))
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} must not be negative")))
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

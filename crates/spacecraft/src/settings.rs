//! Conversion from mission settings into a scheduler configuration.

use mission_config::SpacecraftSettings;
use mission_orbits::{OrbitConfig, Target};

use crate::planner::{GroundStation, SpacecraftMissionConfig};

impl From<&SpacecraftSettings> for SpacecraftMissionConfig {
    fn from(settings: &SpacecraftSettings) -> Self {
        Self {
            orbit: OrbitConfig {
                altitude_km: settings.altitude_km,
                inclination_deg: settings.inclination_deg,
                visibility_half_angle_deg: settings.visibility_half_angle_deg,
                sample_step_s: settings.sample_step_s,
            },
            targets: settings
                .targets
                .iter()
                .map(|t| Target {
                    lat_deg: t.lat_deg,
                    lon_deg: t.lon_deg,
                    value: t.value,
                })
                .collect(),
            station: GroundStation {
                lat_deg: settings.station.lat_deg,
                lon_deg: settings.station.lon_deg,
            },
            schedule_days: settings.schedule_days,
            min_slew_s: settings.min_slew_s,
            max_active_per_orbit_s: settings.max_active_per_orbit_s,
        }
    }
}

//! JSON reports for aircraft and spacecraft runs.

use std::io::Write;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use mission_spacecraft::{Schedule, SpacecraftMissionConfig};
use mission_vehicle::geo::Polygon;
use mission_vehicle::{FlightPlan, MissionSimulation, MonteCarloReport, RoutePoint, VehicleModel};
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{ExportError, writer_for_path};

/// Everything produced by one aircraft run.
#[derive(Debug, Serialize)]
pub struct AircraftReport<'a> {
    pub generated_utc: String,
    pub vehicle: &'a VehicleModel,
    pub no_fly_zones: &'a [Polygon],
    pub plan: &'a FlightPlan,
    /// Planned waypoints with arrival time and cumulative energy.
    pub route: Vec<RoutePoint>,
    /// Budget left on arrival at each planned waypoint.
    pub energy_remaining: Vec<f64>,
    pub simulation: &'a MissionSimulation,
    pub monte_carlo: &'a MonteCarloReport,
}

impl<'a> AircraftReport<'a> {
    pub fn new(
        vehicle: &'a VehicleModel,
        no_fly_zones: &'a [Polygon],
        plan: &'a FlightPlan,
        simulation: &'a MissionSimulation,
        monte_carlo: &'a MonteCarloReport,
    ) -> Self {
        Self {
            generated_utc: timestamp(),
            vehicle,
            no_fly_zones,
            route: plan.route(),
            energy_remaining: plan.energy_remaining(vehicle),
            plan,
            simulation,
            monte_carlo,
        }
    }
}

/// A spacecraft schedule with the orbit, targets and station it was planned for.
#[derive(Debug, Serialize)]
pub struct SpacecraftReport<'a> {
    pub generated_utc: String,
    pub mission: &'a SpacecraftMissionConfig,
    #[serde(flatten)]
    pub schedule: &'a Schedule,
}

impl<'a> SpacecraftReport<'a> {
    pub fn new(mission: &'a SpacecraftMissionConfig, schedule: &'a Schedule) -> Self {
        Self {
            generated_utc: timestamp(),
            mission,
            schedule,
        }
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ExportError> {
    let mut writer = writer_for_path(path)?;
    to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write an aircraft report as pretty JSON to `path` (`-` for stdout).
pub fn write_aircraft_report(path: &Path, report: &AircraftReport<'_>) -> Result<(), ExportError> {
    write_json(path, report)
}

/// Write a spacecraft report as pretty JSON to `path` (`-` for stdout).
pub fn write_spacecraft_report(
    path: &Path,
    report: &SpacecraftReport<'_>,
) -> Result<(), ExportError> {
    write_json(path, report)
}

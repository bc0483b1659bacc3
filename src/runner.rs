//! End-to-end runs used by the binaries: plan, evaluate, and write artifacts.

use std::path::{Path, PathBuf};

use mission_config::MissionSettings;
use mission_core::time::split_duration;
use mission_export::{
    AircraftReport, ExportError, SpacecraftReport, render_flight_path, write_aircraft_report,
    write_flight_path_csv, write_schedule_csv, write_spacecraft_report,
};
use mission_spacecraft::{Schedule, SpacecraftMissionConfig};
use mission_vehicle::settings::{no_fly_zones, waypoints};
use mission_vehicle::{
    FlightPlan, MissionSimulation, MonteCarloReport, VehicleModel, monte_carlo_mission,
    plan_mission, simulate_mission,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub const AIRCRAFT_REPORT: &str = "aircraft_mission.json";
pub const AIRCRAFT_PATH_CSV: &str = "aircraft_flight_path.csv";
pub const AIRCRAFT_PLOT: &str = "aircraft_mission_plot.png";
pub const SPACECRAFT_REPORT: &str = "spacecraft_mission.json";
pub const SPACECRAFT_SCHEDULE_CSV: &str = "spacecraft_schedule.csv";

const PLOT_SIZE: (u32, u32) = (1000, 700);

/// Install a `tracing` subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Results of an aircraft run plus the files written.
#[derive(Debug)]
pub struct AircraftRun {
    pub model: VehicleModel,
    pub plan: FlightPlan,
    pub simulation: MissionSimulation,
    pub monte_carlo: MonteCarloReport,
    pub artifacts: Vec<PathBuf>,
}

/// Results of a spacecraft run plus the files written.
#[derive(Debug)]
pub struct SpacecraftRun {
    pub config: SpacecraftMissionConfig,
    pub schedule: Schedule,
    pub artifacts: Vec<PathBuf>,
}

/// Plan, simulate and stress the configured aircraft mission, then write its artifacts.
pub fn run_aircraft(
    settings: &MissionSettings,
    output_dir: &Path,
) -> Result<AircraftRun, ExportError> {
    let model = VehicleModel::from(&settings.aircraft);
    let route = waypoints(&settings.aircraft);
    let zones = no_fly_zones(&settings.aircraft);

    let plan = plan_mission(&route, &model, &zones);
    let simulation = simulate_mission(&plan, &model, &model.nominal_wind);
    let mc = &settings.monte_carlo;
    let monte_carlo = monte_carlo_mission(&plan, &model, mc.runs, mc.wind_scale_m_s, mc.seed);

    let mut artifacts = Vec::new();
    let report_path = output_dir.join(AIRCRAFT_REPORT);
    let report = AircraftReport::new(&model, &zones, &plan, &simulation, &monte_carlo);
    write_aircraft_report(&report_path, &report)?;
    artifacts.push(report_path);

    let csv_path = output_dir.join(AIRCRAFT_PATH_CSV);
    write_flight_path_csv(&csv_path, &plan)?;
    artifacts.push(csv_path);

    if plan.waypoints.is_empty() {
        warn!("no planned waypoints, skipping flight path plot");
    } else {
        let plot_path = output_dir.join(AIRCRAFT_PLOT);
        render_flight_path(&plot_path, &plan.waypoints, PLOT_SIZE.0, PLOT_SIZE.1)?;
        artifacts.push(plot_path);
    }

    let (days, hours, minutes) = split_duration(plan.total_time_s);
    info!(
        complete = plan.complete,
        energy_ok = simulation.energy_ok,
        flight_time = %format!("{days}d {hours}h {minutes}m"),
        success_rate = monte_carlo.success_rate,
        "aircraft mission written to {}",
        output_dir.display()
    );

    Ok(AircraftRun {
        model,
        plan,
        simulation,
        monte_carlo,
        artifacts,
    })
}

/// Schedule the configured spacecraft mission and write its artifacts.
pub fn run_spacecraft(
    settings: &MissionSettings,
    output_dir: &Path,
) -> Result<SpacecraftRun, ExportError> {
    let config = SpacecraftMissionConfig::from(&settings.spacecraft);
    let schedule = mission_spacecraft::plan_mission(&config);

    let mut artifacts = Vec::new();
    let report_path = output_dir.join(SPACECRAFT_REPORT);
    write_spacecraft_report(&report_path, &SpacecraftReport::new(&config, &schedule))?;
    artifacts.push(report_path);

    let csv_path = output_dir.join(SPACECRAFT_SCHEDULE_CSV);
    write_schedule_csv(&csv_path, &schedule.activities)?;
    artifacts.push(csv_path);

    info!(
        activities = schedule.activities.len(),
        mission_value = schedule.mission_value,
        complete = schedule.complete,
        "spacecraft mission written to {}",
        output_dir.display()
    );

    Ok(SpacecraftRun {
        config,
        schedule,
        artifacts,
    })
}

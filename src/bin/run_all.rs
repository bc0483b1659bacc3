use anyhow::Context;
use clap::Parser;
use mission_planner::config::load_settings;
use mission_planner::runner::{init_logging, run_aircraft, run_spacecraft};
use std::path::PathBuf;

/// Run the aircraft and spacecraft missions into one output directory.
#[derive(Parser, Debug)]
#[command(author, version, about = "Aircraft and spacecraft mission planning end to end")]
struct Cli {
    /// Mission settings file (YAML or TOML)
    #[arg(long, default_value = "configs/mission.yaml")]
    config: PathBuf,

    /// Directory receiving every artifact
    #[arg(long, default_value = "outputs")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let settings = load_settings(&cli.config)
        .with_context(|| format!("loading settings from {}", cli.config.display()))?;

    let aircraft = run_aircraft(&settings, &cli.output_dir).context("aircraft mission")?;
    let spacecraft = run_spacecraft(&settings, &cli.output_dir).context("spacecraft mission")?;

    println!(
        "Aircraft: {:.1} s, {:.1} J, energy {}",
        aircraft.plan.total_time_s,
        aircraft.plan.total_energy,
        if aircraft.simulation.energy_ok { "ok" } else { "exceeded" }
    );
    println!(
        "Spacecraft: {} activities, mission value {:.0}",
        spacecraft.schedule.activities.len(),
        spacecraft.schedule.mission_value
    );
    for path in aircraft.artifacts.iter().chain(&spacecraft.artifacts) {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

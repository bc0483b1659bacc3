use anyhow::Context;
use clap::Parser;
use mission_planner::config::load_settings;
use mission_planner::runner::{init_logging, run_spacecraft};
use std::path::PathBuf;

/// Build the configured observation and downlink schedule.
#[derive(Parser, Debug)]
#[command(author, version, about = "Spacecraft observation/downlink scheduler")]
struct Cli {
    /// Mission settings file (YAML or TOML)
    #[arg(long, default_value = "configs/mission.yaml")]
    config: PathBuf,

    /// Directory receiving the JSON report and CSV schedule
    #[arg(long, default_value = "outputs")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let settings = load_settings(&cli.config)
        .with_context(|| format!("loading settings from {}", cli.config.display()))?;

    let run =
        run_spacecraft(&settings, &cli.output_dir).context("writing spacecraft artifacts")?;

    let schedule = &run.schedule;
    println!(
        "Spacecraft schedule: {} activities ({} observations, {} downlinks) from {} opportunities",
        schedule.activities.len(),
        schedule.observations().count(),
        schedule.downlinks().count(),
        schedule.opportunities
    );
    println!(
        "Mission value {:.0}, orbit period {:.1} s over {} days",
        schedule.mission_value, schedule.orbit_period_s, schedule.schedule_days
    );
    for path in &run.artifacts {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

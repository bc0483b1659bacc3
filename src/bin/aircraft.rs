use anyhow::Context;
use clap::Parser;
use mission_planner::config::load_settings;
use mission_planner::runner::{init_logging, run_aircraft};
use std::path::PathBuf;

/// Plan, simulate and stress-test the configured aircraft route.
#[derive(Parser, Debug)]
#[command(author, version, about = "Aircraft/UAV route planner")]
struct Cli {
    /// Mission settings file (YAML or TOML)
    #[arg(long, default_value = "configs/mission.yaml")]
    config: PathBuf,

    /// Directory receiving the JSON report, CSV table and plot
    #[arg(long, default_value = "outputs")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let settings = load_settings(&cli.config)
        .with_context(|| format!("loading settings from {}", cli.config.display()))?;

    let run = run_aircraft(&settings, &cli.output_dir).context("writing aircraft artifacts")?;

    println!(
        "Aircraft route: {} of {} waypoints, {:.1} s, {:.1} J ({})",
        run.plan.waypoints.len(),
        settings.aircraft.waypoints.len(),
        run.plan.total_time_s,
        run.plan.total_energy,
        if run.plan.complete { "complete" } else { "incomplete" }
    );
    if let Some(depletion) = &run.simulation.depletion {
        println!(
            "Energy depleted between waypoints {} and {} at t = {:.1} s",
            depletion.segment_from, depletion.segment_to, depletion.time_s
        );
    }
    println!(
        "Monte-Carlo success rate: {:.0}% over {} runs",
        run.monte_carlo.success_rate * 100.0,
        run.monte_carlo.runs
    );
    for path in &run.artifacts {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

//! Re-flying a planned route under arbitrary wind, energy depletion, and Monte-Carlo robustness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::VehicleKind;
use crate::model::{VehicleModel, VehicleState};
use crate::planner::FlightPlan;
use crate::wind::{WindModel, WindVector};

/// What ran out when the budget was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DepletionReason {
    NoFuel,
    NoBattery,
}

impl From<VehicleKind> for DepletionReason {
    fn from(kind: VehicleKind) -> Self {
        match kind {
            VehicleKind::Plane => Self::NoFuel,
            VehicleKind::Uav => Self::NoBattery,
        }
    }
}

/// Where and when the energy budget ran out, interpolated linearly along the segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Depletion {
    pub reason: DepletionReason,
    pub segment_from: usize,
    pub segment_to: usize,
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub time_s: f64,
    pub energy_used: f64,
}

/// Outcome of flying a planned route under a given wind.
#[derive(Debug, Clone, Serialize)]
pub struct MissionSimulation {
    pub states: Vec<VehicleState>,
    pub total_time_s: f64,
    pub total_energy: f64,
    pub energy_ok: bool,
    /// Budget left on arrival at each waypoint. Negative once depleted.
    pub energy_remaining: Vec<f64>,
    pub depletion: Option<Depletion>,
}

/// Fly `plan` under `wind`. Routes with fewer than two waypoints produce an empty simulation.
pub fn simulate_mission<W: WindModel + ?Sized>(
    plan: &FlightPlan,
    model: &VehicleModel,
    wind: &W,
) -> MissionSimulation {
    let Some(first) = plan.waypoints.first().filter(|_| plan.waypoints.len() >= 2) else {
        return MissionSimulation {
            states: Vec::new(),
            total_time_s: 0.0,
            total_energy: 0.0,
            energy_ok: true,
            energy_remaining: Vec::new(),
            depletion: None,
        };
    };

    let path = model.simulate_path(&plan.waypoints, VehicleState::at(first), wind);
    let energy_remaining = path
        .states
        .iter()
        .map(|s| model.energy_budget - s.energy_used)
        .collect();
    let depletion = find_depletion(&path.states, model);

    MissionSimulation {
        energy_ok: path.total_energy <= model.energy_budget,
        total_time_s: path.total_time_s,
        total_energy: path.total_energy,
        energy_remaining,
        depletion,
        states: path.states,
    }
}

fn find_depletion(states: &[VehicleState], model: &VehicleModel) -> Option<Depletion> {
    let start = states.first()?.energy_used;
    let budget = model.energy_budget;
    let index = states
        .iter()
        .position(|s| s.energy_used - start > budget)?;
    if index == 0 {
        return None;
    }
    let (prev, next) = (&states[index - 1], &states[index]);
    let used_prev = prev.energy_used - start;
    let used_next = next.energy_used - start;
    let fraction = if used_next > used_prev {
        ((budget - used_prev) / (used_next - used_prev)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let lerp = |a: f64, b: f64| a + (b - a) * fraction;

    Some(Depletion {
        reason: model.kind.into(),
        segment_from: index - 1,
        segment_to: index,
        lat_deg: lerp(prev.lat_deg, next.lat_deg),
        lon_deg: lerp(prev.lon_deg, next.lon_deg),
        time_s: lerp(prev.time_s, next.time_s),
        energy_used: start + budget,
    })
}

/// Minimum, mean and maximum of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleStats {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl SampleStats {
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        Some(Self { min, mean, max })
    }
}

/// Robustness of a fixed route under random constant winds.
#[derive(Debug, Clone, Serialize)]
pub struct MonteCarloReport {
    pub runs: usize,
    /// Fraction of runs finishing within the energy budget.
    pub success_rate: f64,
    pub total_times: Vec<f64>,
    pub total_energies: Vec<f64>,
    pub time_stats: Option<SampleStats>,
    pub energy_stats: Option<SampleStats>,
}

/// Re-fly `plan` `runs` times, each under a constant wind drawn uniformly from
/// `[-wind_scale, wind_scale]` on both axes, checking only the energy budget.
///
/// A seed makes the draws reproducible. Degenerate routes report no runs and full success.
pub fn monte_carlo_mission(
    plan: &FlightPlan,
    model: &VehicleModel,
    runs: usize,
    wind_scale_m_s: f64,
    seed: Option<u64>,
) -> MonteCarloReport {
    if plan.waypoints.len() < 2 || runs == 0 {
        return MonteCarloReport {
            runs: 0,
            success_rate: 1.0,
            total_times: Vec::new(),
            total_energies: Vec::new(),
            time_stats: None,
            energy_stats: None,
        };
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scale = wind_scale_m_s.abs();

    let mut successes = 0;
    let mut total_times = Vec::with_capacity(runs);
    let mut total_energies = Vec::with_capacity(runs);
    for run in 0..runs {
        let north = rng.gen_range(-scale..=scale);
        let east = rng.gen_range(-scale..=scale);
        let outcome = simulate_mission(plan, model, &WindVector::new(north, east));
        debug!(run, north, east, total_energy = outcome.total_energy, "monte-carlo run");
        if outcome.energy_ok {
            successes += 1;
        }
        total_times.push(outcome.total_time_s);
        total_energies.push(outcome.total_energy);
    }

    let success_rate = successes as f64 / runs as f64;
    info!(runs, success_rate, "monte-carlo robustness evaluated");

    MonteCarloReport {
        runs,
        success_rate,
        time_stats: SampleStats::from_samples(&total_times),
        energy_stats: SampleStats::from_samples(&total_energies),
        total_times,
        total_energies,
    }
}

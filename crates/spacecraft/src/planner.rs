//! Greedy scheduling of observations and downlinks over a fixed opportunity set.

use std::collections::BTreeSet;

use mission_core::time::days_to_seconds;
use mission_kernel::{Constraint, DecisionVariables, Objective, StopReason, solve};
use mission_orbits::{OrbitConfig, Target};
use serde::Serialize;
use tracing::{info, warn};

use crate::activity::{Activity, ActivityKind, Opportunity, OpportunityKind};
use crate::constraints::{PowerConstraint, SlewConstraint};
use crate::opportunity::generate_opportunities;
use crate::schedule::{Schedule, ScheduleChecks, science_value};

const MAX_STEPS: usize = 500;

/// Activities chosen so far plus the opportunity indices they came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpacecraftPlan {
    activities: Vec<Activity>,
    consumed: BTreeSet<usize>,
}

impl SpacecraftPlan {
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Latest end time over the chosen activities.
    pub fn last_end_s(&self) -> Option<f64> {
        self.activities.iter().map(|a| a.end_s).reduce(f64::max)
    }

    fn observed_targets(&self) -> Vec<usize> {
        self.activities
            .iter()
            .filter_map(Activity::observed_target)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn into_activities(self) -> Vec<Activity> {
        self.activities
    }
}

/// Choices are indices into the opportunity list.
pub struct ScheduleVariables<'a> {
    opportunities: &'a [Opportunity],
    horizon_s: f64,
    min_slew_s: f64,
}

impl<'a> ScheduleVariables<'a> {
    pub fn new(opportunities: &'a [Opportunity], schedule_days: u32, min_slew_s: f64) -> Self {
        Self {
            opportunities,
            horizon_s: days_to_seconds(f64::from(schedule_days)),
            min_slew_s,
        }
    }
}

impl DecisionVariables for ScheduleVariables<'_> {
    type Plan = SpacecraftPlan;
    type Choice = usize;

    fn initial_plan(&self) -> SpacecraftPlan {
        SpacecraftPlan::default()
    }

    fn candidates(&self, plan: &SpacecraftPlan) -> Vec<usize> {
        // An empty plan counts as ending one second before the epoch.
        let earliest = plan.last_end_s().unwrap_or(-1.0) + self.min_slew_s;
        self.opportunities
            .iter()
            .enumerate()
            .filter(|(i, opp)| !plan.consumed.contains(i) && opp.start_s >= earliest)
            .map(|(i, _)| i)
            .collect()
    }

    fn add(&self, plan: &SpacecraftPlan, choice: &usize) -> SpacecraftPlan {
        let opp = &self.opportunities[*choice];
        let kind = match opp.kind {
            OpportunityKind::Observe { target, value } => ActivityKind::Observe { target, value },
            OpportunityKind::Downlink => ActivityKind::Downlink {
                targets: plan.observed_targets(),
            },
        };
        let mut next = plan.clone();
        next.activities.push(Activity {
            start_s: opp.start_s,
            end_s: opp.end_s,
            kind,
        });
        next.consumed.insert(*choice);
        next
    }

    fn is_complete(&self, plan: &SpacecraftPlan) -> bool {
        match plan.activities.last() {
            None => false,
            Some(last) => {
                last.end_s >= self.horizon_s || plan.consumed.len() >= self.opportunities.len()
            }
        }
    }
}

/// Maximizes [`science_value`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScienceValueObjective;

impl Objective<SpacecraftPlan> for ScienceValueObjective {
    fn evaluate(&self, plan: &SpacecraftPlan) -> f64 {
        science_value(plan.activities())
    }
}

/// Ground station used for downlinks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroundStation {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl Default for GroundStation {
    fn default() -> Self {
        Self {
            lat_deg: 52.0,
            lon_deg: 4.0,
        }
    }
}

/// Everything the scheduler needs for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpacecraftMissionConfig {
    pub orbit: OrbitConfig,
    pub targets: Vec<Target>,
    pub station: GroundStation,
    pub schedule_days: u32,
    pub min_slew_s: f64,
    pub max_active_per_orbit_s: f64,
}

impl Default for SpacecraftMissionConfig {
    fn default() -> Self {
        Self {
            orbit: OrbitConfig::default(),
            targets: vec![
                Target {
                    lat_deg: 52.5,
                    lon_deg: 4.5,
                    value: 1.0,
                },
                Target {
                    lat_deg: 53.0,
                    lon_deg: 5.0,
                    value: 1.0,
                },
            ],
            station: GroundStation::default(),
            schedule_days: 7,
            min_slew_s: 60.0,
            max_active_per_orbit_s: 600.0,
        }
    }
}

/// Generate opportunities over `[0, schedule_days)` and schedule them greedily.
///
/// With no opportunities the result is an empty schedule; otherwise activities come back
/// sorted by start time. Check [`Schedule::complete`] to tell a finished schedule from one cut
/// short by the constraints.
pub fn plan_mission(config: &SpacecraftMissionConfig) -> Schedule {
    let horizon_s = days_to_seconds(f64::from(config.schedule_days));
    let orbit_period_s = config.orbit.period_s();
    let opportunities = generate_opportunities(
        &config.orbit,
        &config.targets,
        (config.station.lat_deg, config.station.lon_deg),
        0.0,
        horizon_s,
    );

    let slew = SlewConstraint::new(config.min_slew_s);
    let power = PowerConstraint::new(orbit_period_s, config.max_active_per_orbit_s);

    let (plan, steps, stop_reason) = if opportunities.is_empty() {
        warn!(
            targets = config.targets.len(),
            "no observation or downlink opportunities over the horizon"
        );
        (SpacecraftPlan::default(), 0, StopReason::NoCandidates)
    } else {
        let variables =
            ScheduleVariables::new(&opportunities, config.schedule_days, config.min_slew_s);
        let constraints: Vec<Box<dyn Constraint<SpacecraftPlan>>> =
            vec![Box::new(slew), Box::new(power)];
        let solution = solve(&variables, &constraints, &ScienceValueObjective, MAX_STEPS);
        (solution.plan, solution.steps, solution.stop_reason)
    };

    let mission_value = science_value(plan.activities());
    let mut activities = plan.into_activities();
    activities.sort_by(|a, b| a.start_s.total_cmp(&b.start_s));
    let checks = ScheduleChecks {
        slew: slew.check_activities(&activities),
        power: power.check_activities(&activities),
    };

    info!(
        opportunities = opportunities.len(),
        activities = activities.len(),
        mission_value,
        ?stop_reason,
        "spacecraft schedule planned"
    );

    Schedule {
        activities,
        mission_value,
        orbit_period_s,
        schedule_days: config.schedule_days,
        opportunities: opportunities.len(),
        steps,
        stop_reason,
        complete: stop_reason == StopReason::Complete,
        checks,
    }
}

//! Science value and the schedule returned to callers.

use std::collections::BTreeSet;

use mission_kernel::{Check, StopReason};
use serde::Serialize;

use crate::activity::{Activity, ActivityKind};

/// Number of distinct targets that were observed and then included in a later downlink.
///
/// Activities are read in order: a downlink only credits targets observed before it.
pub fn science_value(activities: &[Activity]) -> f64 {
    let mut observed = BTreeSet::new();
    let mut delivered = BTreeSet::new();
    for activity in activities {
        match &activity.kind {
            ActivityKind::Observe { target, .. } => {
                observed.insert(*target);
            }
            ActivityKind::Downlink { targets } => {
                delivered.extend(targets.iter().copied().filter(|t| observed.contains(t)));
            }
        }
    }
    delivered.len() as f64
}

/// Slew and power outcomes for the final schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduleChecks {
    pub slew: Check,
    pub power: Check,
}

impl ScheduleChecks {
    pub fn all_feasible(&self) -> bool {
        self.slew.accepts() && self.power.accepts()
    }
}

/// A time-ordered week (or other horizon) of activities with its score.
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub activities: Vec<Activity>,
    pub mission_value: f64,
    pub orbit_period_s: f64,
    pub schedule_days: u32,
    /// Opportunities generated before scheduling.
    pub opportunities: usize,
    pub steps: usize,
    pub stop_reason: StopReason,
    pub complete: bool,
    pub checks: ScheduleChecks,
}

impl Schedule {
    pub fn observations(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter().filter(|a| !a.is_downlink())
    }

    pub fn downlinks(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter().filter(|a| a.is_downlink())
    }

    /// Total active time over the horizon (s).
    pub fn active_time_s(&self) -> f64 {
        self.activities.iter().map(Activity::duration_s).sum()
    }
}

//! Slew-gap and power duty-cycle rules over activity sequences.

use std::collections::BTreeMap;

use mission_kernel::{Check, Constraint};

use crate::activity::Activity;
use crate::planner::SpacecraftPlan;

/// Every consecutive pair of activities must be separated by at least `min_slew_s`.
///
/// Unlike the vehicle maneuver rule, all gaps are inspected and their shortfalls summed.
/// Overlapping activities (negative gaps) count with their full shortfall.
#[derive(Debug, Clone, Copy)]
pub struct SlewConstraint {
    pub min_slew_s: f64,
}

impl SlewConstraint {
    pub fn new(min_slew_s: f64) -> Self {
        Self { min_slew_s }
    }

    pub fn check_activities(&self, activities: &[Activity]) -> Check {
        let shortfall: f64 = activities
            .windows(2)
            .map(|pair| pair[1].start_s - pair[0].end_s)
            .filter(|gap| *gap < self.min_slew_s)
            .map(|gap| self.min_slew_s - gap)
            .sum();
        Check::from_violation(shortfall)
    }
}

impl Constraint<SpacecraftPlan> for SlewConstraint {
    fn check(&self, plan: &SpacecraftPlan) -> Check {
        self.check_activities(plan.activities())
    }

    fn name(&self) -> &'static str {
        "slew"
    }
}

/// Active time accumulated per orbit must stay under `max_active_per_orbit_s`.
///
/// An activity is charged in full to the orbit its start time falls in.
#[derive(Debug, Clone, Copy)]
pub struct PowerConstraint {
    pub orbit_period_s: f64,
    pub max_active_per_orbit_s: f64,
}

impl PowerConstraint {
    pub fn new(orbit_period_s: f64, max_active_per_orbit_s: f64) -> Self {
        Self {
            orbit_period_s,
            max_active_per_orbit_s,
        }
    }

    /// Active seconds per orbit index, for activities in `activities`.
    pub fn active_per_orbit(&self, activities: &[Activity]) -> BTreeMap<i64, f64> {
        let mut buckets = BTreeMap::new();
        for activity in activities {
            let orbit = (activity.start_s / self.orbit_period_s).floor() as i64;
            *buckets.entry(orbit).or_insert(0.0) += activity.duration_s();
        }
        buckets
    }

    pub fn check_activities(&self, activities: &[Activity]) -> Check {
        let overage: f64 = self
            .active_per_orbit(activities)
            .values()
            .filter(|active| **active > self.max_active_per_orbit_s)
            .map(|active| active - self.max_active_per_orbit_s)
            .sum();
        Check::from_violation(overage)
    }
}

impl Constraint<SpacecraftPlan> for PowerConstraint {
    fn check(&self, plan: &SpacecraftPlan) -> Check {
        self.check_activities(plan.activities())
    }

    fn name(&self) -> &'static str {
        "power"
    }
}

//! Route constraints. Each one closes over the limits it enforces and inspects the simulated
//! states carried by the plan.

use mission_core::angles::turn_angle_deg;
use mission_kernel::{Check, Constraint};
use serde::Serialize;

use crate::geo::{Polygon, point_in_polygon};
use crate::model::VehicleModel;
use crate::planner::RoutePlan;

/// Total energy must stay within the budget. Violation is the overage.
#[derive(Debug, Clone)]
pub struct EnduranceConstraint {
    energy_budget: f64,
}

impl EnduranceConstraint {
    pub fn new(model: &VehicleModel) -> Self {
        Self {
            energy_budget: model.energy_budget,
        }
    }
}

impl Constraint<RoutePlan> for EnduranceConstraint {
    fn check(&self, plan: &RoutePlan) -> Check {
        if plan.len() < 2 {
            return Check::satisfied();
        }
        let energy = plan.total_energy();
        if energy <= self.energy_budget {
            Check::satisfied()
        } else {
            Check::violated(energy - self.energy_budget)
        }
    }
}

/// Average turn rate over each segment must not exceed the vehicle limit.
///
/// Stops at the first offending segment and reports its overage.
#[derive(Debug, Clone)]
pub struct ManeuverConstraint {
    max_turn_rate_deg_s: f64,
}

impl ManeuverConstraint {
    pub fn new(model: &VehicleModel) -> Self {
        Self {
            max_turn_rate_deg_s: model.max_turn_rate_deg_s,
        }
    }
}

impl Constraint<RoutePlan> for ManeuverConstraint {
    fn check(&self, plan: &RoutePlan) -> Check {
        for pair in plan.states().windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let dt = next.time_s - prev.time_s;
            if dt < 1e-9 {
                continue;
            }
            let rate = turn_angle_deg(prev.heading_deg, next.heading_deg).abs() / dt;
            if rate > self.max_turn_rate_deg_s {
                return Check::violated(rate - self.max_turn_rate_deg_s);
            }
        }
        Check::satisfied()
    }
}

/// Waypoints must lie outside every no-fly polygon.
/// Violation counts (waypoint, polygon) containments.
#[derive(Debug, Clone)]
pub struct GeofenceConstraint {
    no_fly: Vec<Polygon>,
}

impl GeofenceConstraint {
    pub fn new(no_fly: &[Polygon]) -> Self {
        Self {
            no_fly: no_fly.to_vec(),
        }
    }
}

impl Constraint<RoutePlan> for GeofenceConstraint {
    fn check(&self, plan: &RoutePlan) -> Check {
        let containments = plan
            .waypoints()
            .iter()
            .map(|wp| {
                self.no_fly
                    .iter()
                    .filter(|polygon| point_in_polygon(wp.lat_deg, wp.lon_deg, polygon))
                    .count()
            })
            .sum::<usize>();
        Check::from_violation(containments as f64)
    }
}

/// Waypoint altitudes must lie inside the envelope. Violation is the worst excursion.
///
/// A waypoint without altitude is read at the default altitude.
#[derive(Debug, Clone)]
pub struct AltitudeConstraint {
    min_altitude_m: f64,
    max_altitude_m: f64,
    default_altitude_m: f64,
}

impl AltitudeConstraint {
    pub fn new(model: &VehicleModel) -> Self {
        Self {
            min_altitude_m: model.min_altitude_m,
            max_altitude_m: model.max_altitude_m,
            default_altitude_m: model.default_altitude_m,
        }
    }
}

impl Constraint<RoutePlan> for AltitudeConstraint {
    fn check(&self, plan: &RoutePlan) -> Check {
        let worst = plan
            .waypoints()
            .iter()
            .map(|wp| {
                let alt = wp.alt_m.unwrap_or(self.default_altitude_m);
                if alt < self.min_altitude_m {
                    self.min_altitude_m - alt
                } else if alt > self.max_altitude_m {
                    alt - self.max_altitude_m
                } else {
                    0.0
                }
            })
            .fold(0.0_f64, f64::max);
        Check::from_violation(worst)
    }
}

/// Constraint outcomes for a finished route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteChecks {
    pub endurance: Check,
    pub maneuver: Check,
    pub geofence: Check,
    pub altitude: Check,
}

impl RouteChecks {
    /// Evaluate every route constraint against `plan`.
    pub fn evaluate(model: &VehicleModel, no_fly: &[Polygon], plan: &RoutePlan) -> Self {
        Self {
            endurance: EnduranceConstraint::new(model).check(plan),
            maneuver: ManeuverConstraint::new(model).check(plan),
            geofence: GeofenceConstraint::new(no_fly).check(plan),
            altitude: AltitudeConstraint::new(model).check(plan),
        }
    }

    pub fn all_feasible(&self) -> bool {
        [self.endurance, self.maneuver, self.geofence, self.altitude]
            .iter()
            .all(Check::accepts)
    }
}

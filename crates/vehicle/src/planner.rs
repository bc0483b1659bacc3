//! Greedy waypoint-ordering planner built on the shared kernel.

use mission_kernel::{
    Constraint, DEFAULT_MAX_STEPS, DecisionVariables, Objective, StopReason, solve,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::constraints::{
    AltitudeConstraint, EnduranceConstraint, GeofenceConstraint, ManeuverConstraint, RouteChecks,
};
use crate::geo::Polygon;
use crate::model::{VehicleModel, VehicleState, Waypoint};

/// Waypoints visited so far and the states reached at each of them under the nominal wind.
///
/// Extending a plan flies one more segment from the last state, so the totals are exactly what
/// re-simulating the whole sequence would give.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutePlan {
    waypoints: Vec<Waypoint>,
    states: Vec<VehicleState>,
}

impl RoutePlan {
    /// Simulate `waypoints` in the given order under the model's nominal wind.
    pub fn simulate(model: &VehicleModel, waypoints: &[Waypoint]) -> Self {
        match waypoints.first() {
            None => Self::default(),
            Some(first) => {
                let path =
                    model.simulate_path(waypoints, VehicleState::at(first), &model.nominal_wind);
                Self {
                    waypoints: waypoints.to_vec(),
                    states: path.states,
                }
            }
        }
    }

    /// A new plan with `waypoint` appended.
    pub fn extended(&self, model: &VehicleModel, waypoint: Waypoint) -> Self {
        let next_state = match self.states.last() {
            Some(last) => {
                model.fly_segment(last, waypoint.lat_deg, waypoint.lon_deg, &model.nominal_wind)
            }
            None => VehicleState::at(&waypoint),
        };
        let mut waypoints = self.waypoints.clone();
        waypoints.push(waypoint);
        let mut states = self.states.clone();
        states.push(next_state);
        Self { waypoints, states }
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn states(&self) -> &[VehicleState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn contains(&self, waypoint: &Waypoint) -> bool {
        self.waypoints.contains(waypoint)
    }

    pub fn total_time_s(&self) -> f64 {
        match (self.states.first(), self.states.last()) {
            (Some(first), Some(last)) => last.time_s - first.time_s,
            _ => 0.0,
        }
    }

    pub fn total_energy(&self) -> f64 {
        match (self.states.first(), self.states.last()) {
            (Some(first), Some(last)) => last.energy_used - first.energy_used,
            _ => 0.0,
        }
    }
}

/// Choice = index of the next waypoint to visit. The route always starts at the first waypoint.
///
/// Visited waypoints are recognised by value, so a waypoint repeated in the input is never
/// offered again and such a route cannot complete.
pub struct RouteVariables<'a> {
    waypoints: &'a [Waypoint],
    model: &'a VehicleModel,
}

impl<'a> RouteVariables<'a> {
    pub fn new(waypoints: &'a [Waypoint], model: &'a VehicleModel) -> Self {
        Self { waypoints, model }
    }
}

impl DecisionVariables for RouteVariables<'_> {
    type Plan = RoutePlan;
    type Choice = usize;

    fn initial_plan(&self) -> RoutePlan {
        match self.waypoints.first() {
            Some(first) => RoutePlan::default().extended(self.model, *first),
            None => RoutePlan::default(),
        }
    }

    fn candidates(&self, plan: &RoutePlan) -> Vec<usize> {
        if plan.len() >= self.waypoints.len() {
            return Vec::new();
        }
        (0..self.waypoints.len())
            .filter(|&i| !plan.contains(&self.waypoints[i]))
            .collect()
    }

    fn add(&self, plan: &RoutePlan, choice: &usize) -> RoutePlan {
        plan.extended(self.model, self.waypoints[*choice])
    }

    fn is_complete(&self, plan: &RoutePlan) -> bool {
        plan.len() >= self.waypoints.len()
    }
}

/// Minimize total flight time under the nominal wind.
pub struct MinTimeObjective;

impl Objective<RoutePlan> for MinTimeObjective {
    fn evaluate(&self, plan: &RoutePlan) -> f64 {
        if plan.len() < 2 {
            return 0.0;
        }
        -plan.total_time_s()
    }
}

/// A waypoint of the planned route with its arrival time and cumulative energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoutePoint {
    pub waypoint: Waypoint,
    pub time_s: f64,
    pub energy_used: f64,
}

/// Result of [`plan_mission`].
#[derive(Debug, Clone, Serialize)]
pub struct FlightPlan {
    /// Visiting order with altitudes already corrected into the envelope.
    pub waypoints: Vec<Waypoint>,
    pub states: Vec<VehicleState>,
    pub total_time_s: f64,
    pub total_energy: f64,
    /// Whether every input waypoint was placed.
    pub complete: bool,
    pub stop_reason: StopReason,
    pub steps: usize,
    pub checks: RouteChecks,
}

impl FlightPlan {
    pub fn timestamps(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.time_s).collect()
    }

    pub fn route(&self) -> Vec<RoutePoint> {
        self.waypoints
            .iter()
            .zip(&self.states)
            .map(|(waypoint, state)| RoutePoint {
                waypoint: *waypoint,
                time_s: state.time_s,
                energy_used: state.energy_used,
            })
            .collect()
    }

    /// Energy left in the budget on arrival at each waypoint.
    pub fn energy_remaining(&self, model: &VehicleModel) -> Vec<f64> {
        self.states
            .iter()
            .map(|s| model.energy_budget - s.energy_used)
            .collect()
    }
}

/// Order `waypoints` to minimize flight time subject to endurance, manoeuvre, geofence and
/// altitude constraints.
///
/// Altitudes are normalized first. Fewer than two waypoints yield a zero-time, zero-energy plan.
/// An infeasible route is returned truncated with `complete == false`.
pub fn plan_mission(
    waypoints: &[Waypoint],
    model: &VehicleModel,
    no_fly: &[Polygon],
) -> FlightPlan {
    let corrected = model.correct_altitudes(waypoints);

    let (plan, steps, stop_reason) = if corrected.len() < 2 {
        warn!(waypoints = corrected.len(), "route needs at least two waypoints to fly");
        (
            RoutePlan::simulate(model, &corrected),
            0,
            StopReason::Complete,
        )
    } else {
        let variables = RouteVariables::new(&corrected, model);
        let mut constraints: Vec<Box<dyn Constraint<RoutePlan>>> = vec![
            Box::new(EnduranceConstraint::new(model)),
            Box::new(ManeuverConstraint::new(model)),
        ];
        if !no_fly.is_empty() {
            constraints.push(Box::new(GeofenceConstraint::new(no_fly)));
        }
        constraints.push(Box::new(AltitudeConstraint::new(model)));

        let solution = solve(&variables, &constraints, &MinTimeObjective, DEFAULT_MAX_STEPS);
        (solution.plan, solution.steps, solution.stop_reason)
    };

    let final_plan = RoutePlan::simulate(model, plan.waypoints());
    let checks = RouteChecks::evaluate(model, no_fly, &final_plan);

    info!(
        visited = final_plan.len(),
        requested = corrected.len(),
        total_time_s = final_plan.total_time_s(),
        total_energy = final_plan.total_energy(),
        ?stop_reason,
        "route planned"
    );

    FlightPlan {
        total_time_s: final_plan.total_time_s(),
        total_energy: final_plan.total_energy(),
        waypoints: final_plan.waypoints,
        states: final_plan.states,
        complete: stop_reason == StopReason::Complete,
        stop_reason,
        steps,
        checks,
    }
}

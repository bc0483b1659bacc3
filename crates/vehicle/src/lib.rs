//! Vehicle domain: flat-earth kinematics and energy model, route constraints, the greedy
//! waypoint-ordering planner and post-hoc robustness simulation.

pub mod constraints;
pub mod geo;
pub mod model;
pub mod planner;
pub mod settings;
pub mod simulate;
pub mod wind;

pub use constraints::RouteChecks;
pub use mission_config::VehicleKind;
pub use model::{
    PathSimulation, VehicleModel, VehicleState, Waypoint, correct_waypoint_altitudes,
};
pub use planner::{FlightPlan, RoutePlan, RoutePoint, plan_mission};
pub use simulate::{MissionSimulation, MonteCarloReport, monte_carlo_mission, simulate_mission};
pub use wind::{WindModel, WindVector};

//! Spacecraft domain: opportunities from orbit geometry, slew and power constraints, the
//! science-value objective and the greedy week-long scheduler.

pub mod activity;
pub mod constraints;
pub mod opportunity;
pub mod planner;
pub mod schedule;
pub mod settings;

pub use activity::{Activity, ActivityKind, Opportunity, OpportunityKind};
pub use constraints::{PowerConstraint, SlewConstraint};
pub use opportunity::generate_opportunities;
pub use planner::{
    GroundStation, ScheduleVariables, ScienceValueObjective, SpacecraftMissionConfig,
    SpacecraftPlan, plan_mission,
};
pub use schedule::{Schedule, ScheduleChecks, science_value};

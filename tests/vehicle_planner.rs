use mission_planner::kernel::{Constraint, DecisionVariables, StopReason};
use mission_planner::vehicle::constraints::{
    AltitudeConstraint, EnduranceConstraint, GeofenceConstraint, ManeuverConstraint,
};
use mission_planner::vehicle::planner::RouteVariables;
use mission_planner::vehicle::simulate::DepletionReason;
use mission_planner::vehicle::{
    RoutePlan, VehicleKind, VehicleModel, Waypoint, WindVector, monte_carlo_mission,
    plan_mission, simulate_mission,
};

fn square() -> Vec<Waypoint> {
    vec![
        Waypoint::new(0.0, 0.0),
        Waypoint::new(0.0, 0.01),
        Waypoint::new(0.01, 0.01),
        Waypoint::new(0.01, 0.0),
    ]
}

fn same_point(a: &Waypoint, b: &Waypoint) -> bool {
    a.lat_deg == b.lat_deg && a.lon_deg == b.lon_deg
}

#[test]
fn completed_plan_is_a_permutation_starting_at_first_waypoint() {
    let model = VehicleModel::default();
    let input = square();
    let plan = plan_mission(&input, &model, &[]);

    assert!(plan.complete);
    assert_eq!(plan.stop_reason, StopReason::Complete);
    assert_eq!(plan.waypoints.len(), input.len());
    assert!(same_point(&plan.waypoints[0], &input[0]));
    for wp in &input {
        assert!(
            plan.waypoints.iter().any(|p| same_point(p, wp)),
            "missing waypoint {wp:?}"
        );
    }
    assert!(plan.total_time_s > 0.0);
    assert!(plan.checks.all_feasible());
    assert_eq!(plan.timestamps().len(), input.len());
    assert!(plan.timestamps().windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn planned_altitudes_are_corrected() {
    let model = VehicleModel::default();
    let mut input = square();
    input[1].alt_m = Some(10_000.0);
    let plan = plan_mission(&input, &model, &[]);
    assert!(plan.waypoints.iter().all(|w| w.alt_m.is_some()));
    assert!(
        plan.waypoints
            .iter()
            .filter_map(|w| w.alt_m)
            .all(|alt| (model.min_altitude_m..=model.max_altitude_m).contains(&alt))
    );
}

#[test]
fn greedy_prefers_straight_ahead_leg() {
    // Starting heading is north, so the waypoint due north costs no turn.
    let model = VehicleModel::default();
    let plan = plan_mission(&square(), &model, &[]);
    assert!(same_point(&plan.waypoints[1], &Waypoint::new(0.01, 0.0)));
}

#[test]
fn fewer_than_two_waypoints_yield_zero_plan() {
    let model = VehicleModel::default();
    let single = plan_mission(&[Waypoint::new(52.0, 4.0)], &model, &[]);
    assert_eq!(single.waypoints.len(), 1);
    assert_eq!(single.total_time_s, 0.0);
    assert_eq!(single.total_energy, 0.0);

    let empty = plan_mission(&[], &model, &[]);
    assert!(empty.waypoints.is_empty());
    assert_eq!(empty.total_time_s, 0.0);
}

#[test]
fn tight_budget_truncates_route() {
    let model = VehicleModel {
        energy_budget: 1.0,
        ..VehicleModel::default()
    };
    let plan = plan_mission(&square(), &model, &[]);
    assert!(!plan.complete);
    assert_eq!(plan.stop_reason, StopReason::NoFeasibleCandidate);
    assert_eq!(plan.waypoints.len(), 1);
}

#[test]
fn duplicate_waypoints_cannot_complete() {
    let model = VehicleModel::default();
    let input = [
        Waypoint::new(0.0, 0.0),
        Waypoint::new(0.0, 0.01),
        Waypoint::new(0.0, 0.01),
    ];
    let plan = plan_mission(&input, &model, &[]);
    assert!(!plan.complete);
    assert_eq!(plan.stop_reason, StopReason::NoCandidates);
    assert_eq!(plan.waypoints.len(), 2);
}

#[test]
fn no_fly_zone_blocks_waypoint() {
    let model = VehicleModel::default();
    let zone = vec![(0.005, 0.005), (0.005, 0.02), (0.02, 0.02), (0.02, 0.005)];
    let plan = plan_mission(&square(), &model, &[zone]);
    assert!(!plan.complete);
    assert!(
        !plan
            .waypoints
            .iter()
            .any(|w| same_point(w, &Waypoint::new(0.01, 0.01)))
    );
    assert!(plan.checks.geofence.accepts());
}

#[test]
fn endurance_is_checked_against_budget() {
    let route = [Waypoint::new(0.0, 0.0), Waypoint::new(0.01, 0.0)];
    let base = VehicleModel::default();
    let energy = RoutePlan::simulate(&base, &route).total_energy();
    assert!(energy > 0.0);

    let above = VehicleModel {
        energy_budget: energy + 1.0,
        ..base.clone()
    };
    let plan = RoutePlan::simulate(&above, &route);
    assert!(EnduranceConstraint::new(&above).check(&plan).accepts());

    let below = VehicleModel {
        energy_budget: energy - 1.0,
        ..base
    };
    let check = EnduranceConstraint::new(&below).check(&plan);
    assert!(!check.feasible);
    assert!((check.violation - 1.0).abs() < 1e-6);
}

#[test]
fn geofence_counts_contained_waypoints() {
    let model = VehicleModel::default();
    let triangle = vec![(0.0, 0.0), (0.0, 10.0), (10.0, 0.0)];
    let fence = GeofenceConstraint::new(&[triangle]);

    let inside = RoutePlan::simulate(
        &model,
        &[Waypoint::new(20.0, 20.0), Waypoint::new(2.0, 2.0)],
    );
    let check = fence.check(&inside);
    assert!(!check.feasible);
    assert_eq!(check.violation, 1.0);

    let outside = RoutePlan::simulate(
        &model,
        &[Waypoint::new(20.0, 20.0), Waypoint::new(8.0, 8.0)],
    );
    assert!(fence.check(&outside).accepts());
}

#[test]
fn altitude_constraint_reports_worst_excursion() {
    let model = VehicleModel::default();
    let plan = RoutePlan::simulate(
        &model,
        &[
            Waypoint::with_altitude(0.0, 0.0, -20.0),
            Waypoint::with_altitude(0.01, 0.0, 4_500.0),
            Waypoint::new(0.02, 0.0),
        ],
    );
    let check = AltitudeConstraint::new(&model).check(&plan);
    assert!(!check.feasible);
    assert_eq!(check.violation, 500.0);
}

#[test]
fn simulated_legs_respect_turn_rate() {
    let model = VehicleModel::default();
    let zigzag = [
        Waypoint::new(0.0, 0.0),
        Waypoint::new(0.01, 0.0),
        Waypoint::new(0.0, 0.0001),
        Waypoint::new(0.01, 0.0002),
    ];
    let plan = RoutePlan::simulate(&model, &zigzag);
    assert!(ManeuverConstraint::new(&model).check(&plan).accepts());
}

#[test]
fn incremental_extension_matches_full_simulation() {
    let model = VehicleModel {
        nominal_wind: WindVector::new(3.0, -2.0),
        ..VehicleModel::default()
    };
    let route = square();
    let incremental = route[1..]
        .iter()
        .fold(RoutePlan::simulate(&model, &route[..1]), |plan, wp| {
            plan.extended(&model, *wp)
        });
    let full = RoutePlan::simulate(&model, &route);
    assert_eq!(incremental, full);
}

#[test]
fn route_candidates_skip_visited_waypoints() {
    let model = VehicleModel::default();
    let route = square();
    let variables = RouteVariables::new(&route, &model);
    let initial = variables.initial_plan();
    assert_eq!(initial.len(), 1);
    assert_eq!(variables.candidates(&initial), vec![1, 2, 3]);
    let next = variables.add(&initial, &2);
    assert_eq!(variables.candidates(&next), vec![1, 3]);
    assert!(!variables.is_complete(&next));
}

#[test]
fn depletion_is_located_on_the_failing_segment() {
    let route = [
        Waypoint::new(0.0, 0.0),
        Waypoint::new(0.01, 0.0),
        Waypoint::new(0.02, 0.0),
    ];
    let generous = VehicleModel::default();
    let plan = plan_mission(&route, &generous, &[]);
    let first_leg = plan.states[1].energy_used;

    let tight = VehicleModel {
        kind: VehicleKind::Uav,
        energy_budget: first_leg * 1.5,
        ..VehicleModel::default()
    };
    let sim = simulate_mission(&plan, &tight, &WindVector::CALM);
    assert!(!sim.energy_ok);
    let depletion = sim.depletion.expect("depletion");
    assert_eq!(depletion.reason, DepletionReason::NoBattery);
    assert_eq!((depletion.segment_from, depletion.segment_to), (1, 2));
    assert!(depletion.lat_deg > 0.01 && depletion.lat_deg < 0.02);
    assert!((depletion.energy_used - tight.energy_budget).abs() < 1e-9);
    assert!(sim.energy_remaining.last().copied().unwrap_or_default() < 0.0);

    let ok = simulate_mission(&plan, &generous, &WindVector::CALM);
    assert!(ok.energy_ok);
    assert!(ok.depletion.is_none());
    assert_eq!(ok.total_time_s, plan.total_time_s);
}

#[test]
fn monte_carlo_is_reproducible_with_seed() {
    let model = VehicleModel::default();
    let plan = plan_mission(&square(), &model, &[]);
    let a = monte_carlo_mission(&plan, &model, 8, 3.0, Some(7));
    let b = monte_carlo_mission(&plan, &model, 8, 3.0, Some(7));
    assert_eq!(a.runs, 8);
    assert_eq!(a.total_times, b.total_times);
    assert_eq!(a.total_energies, b.total_energies);
    assert!((0.0..=1.0).contains(&a.success_rate));

    let stats = a.time_stats.expect("time stats");
    assert!(stats.min <= stats.mean && stats.mean <= stats.max);
}

#[test]
fn monte_carlo_without_runs_reports_full_success() {
    let model = VehicleModel::default();
    let plan = plan_mission(&square(), &model, &[]);
    let report = monte_carlo_mission(&plan, &model, 0, 3.0, Some(1));
    assert_eq!(report.runs, 0);
    assert_eq!(report.success_rate, 1.0);
    assert!(report.time_stats.is_none());
}

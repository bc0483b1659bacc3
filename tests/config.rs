use mission_planner::config::{ConfigError, MissionSettings, VehicleKind, load_settings};
use mission_planner::spacecraft::SpacecraftMissionConfig;
use mission_planner::vehicle::VehicleModel;
use mission_planner::vehicle::settings::{no_fly_zones, waypoints};
use std::fs;

#[test]
fn bundled_settings_describe_reference_mission() {
    let settings = load_settings("configs/mission.yaml").expect("mission settings");
    assert_eq!(settings.aircraft.waypoints.len(), 4);
    assert_eq!(settings.aircraft.vehicle_kind, VehicleKind::Plane);
    assert_eq!(settings.aircraft.no_fly_zones.len(), 1);
    assert_eq!(settings.monte_carlo.seed, Some(42));
    assert_eq!(settings.spacecraft.targets.len(), 3);
    assert_eq!(settings.spacecraft.schedule_days, 7);
    assert_eq!(settings.spacecraft.station.lat_deg, 52.0);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("partial.yaml");
    fs::write(&path, "spacecraft:\n  schedule_days: 2\n").expect("write yaml");

    let settings = load_settings(&path).expect("partial settings");
    assert_eq!(settings.spacecraft.schedule_days, 2);
    assert_eq!(settings.spacecraft.altitude_km, 400.0);
    assert_eq!(settings.aircraft, MissionSettings::default().aircraft);
}

#[test]
fn toml_files_are_parsed_by_extension() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("mission.toml");
    fs::write(
        &path,
        r#"
[aircraft]
vehicle_kind = "uav"
waypoints = [[54.0, 25.0], [54.1, 25.1, 300.0]]
battery_capacity_j = 5.0e5

[monte_carlo]
runs = 3
"#,
    )
    .expect("write toml");

    let settings = load_settings(&path).expect("toml settings");
    assert_eq!(settings.aircraft.vehicle_kind, VehicleKind::Uav);
    assert_eq!(settings.aircraft.waypoints[0].alt_m(), None);
    assert_eq!(settings.aircraft.waypoints[1].alt_m(), Some(300.0));
    assert_eq!(settings.monte_carlo.runs, 3);
    assert_eq!(settings.aircraft.energy_budget(), 5.0e5);
}

#[test]
fn energy_budget_follows_vehicle_kind() {
    let mut settings = MissionSettings::default().aircraft;
    settings.fuel_tank_capacity_j = 3.0e6;
    settings.battery_capacity_j = 1.0e6;
    settings.energy_budget_j = 9.0e6;
    assert_eq!(settings.energy_budget(), 3.0e6);

    settings.vehicle_kind = VehicleKind::Uav;
    assert_eq!(settings.energy_budget(), 1.0e6);

    settings.battery_capacity_j = 0.0;
    assert_eq!(settings.energy_budget(), 9.0e6);
}

#[test]
fn kind_aliases_are_accepted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("drone.yaml");
    fs::write(&path, "aircraft:\n  vehicle_kind: drone\n").expect("write yaml");
    let settings = load_settings(&path).expect("drone settings");
    assert_eq!(settings.aircraft.vehicle_kind, VehicleKind::Uav);
}

#[test]
fn invalid_values_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cases = [
        ("aircraft:\n  cruise_speed_m_s: 0.0\n", "aircraft.cruise_speed_m_s"),
        (
            "aircraft:\n  min_altitude_m: 500.0\n  max_altitude_m: 100.0\n",
            "aircraft.min_altitude_m",
        ),
        (
            "aircraft:\n  no_fly_zones:\n    - [[1.0, 1.0], [2.0, 2.0]]\n",
            "aircraft.no_fly_zones",
        ),
        ("spacecraft:\n  schedule_days: 0\n", "spacecraft.schedule_days"),
        ("spacecraft:\n  sample_step_s: -30.0\n", "spacecraft.sample_step_s"),
    ];
    for (index, (yaml, expected_field)) in cases.iter().enumerate() {
        let path = dir.path().join(format!("bad_{index}.yaml"));
        fs::write(&path, yaml).expect("write yaml");
        match load_settings(&path) {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, *expected_field),
            other => panic!("expected invalid {expected_field}, got {other:?}"),
        }
    }
}

#[test]
fn unreadable_or_malformed_files_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(matches!(
        load_settings(dir.path().join("absent.yaml")),
        Err(ConfigError::Io(_))
    ));

    let path = dir.path().join("broken.yaml");
    fs::write(&path, "aircraft: [not, a, map\n").expect("write yaml");
    assert!(matches!(load_settings(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn settings_convert_into_runtime_models() {
    let settings = load_settings("configs/mission.yaml").expect("mission settings");

    let model = VehicleModel::from(&settings.aircraft);
    assert_eq!(model.energy_budget, settings.aircraft.energy_budget());
    assert_eq!(model.cruise_speed_m_s, settings.aircraft.cruise_speed_m_s);
    assert_eq!(waypoints(&settings.aircraft).len(), 4);
    assert_eq!(no_fly_zones(&settings.aircraft).len(), 1);

    let config = SpacecraftMissionConfig::from(&settings.spacecraft);
    assert_eq!(config.targets.len(), 3);
    assert_eq!(config.orbit.altitude_km, 400.0);
    assert_eq!(config.station.lon_deg, 4.0);
    assert_eq!(config.max_active_per_orbit_s, 600.0);
}

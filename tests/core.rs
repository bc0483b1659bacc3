use mission_planner::core::angles::{normalize_signed_deg, turn_angle_deg, wrap_longitude_deg};
use mission_planner::core::time::{days_to_seconds, split_duration};

#[test]
fn angles_wrap_into_signed_half_turn() {
    assert_eq!(normalize_signed_deg(190.0), -170.0);
    assert_eq!(normalize_signed_deg(-190.0), 170.0);
    assert_eq!(normalize_signed_deg(720.0 + 45.0), 45.0);
    assert_eq!(wrap_longitude_deg(181.0), -179.0);
}

#[test]
fn turn_angle_takes_shortest_direction() {
    assert_eq!(turn_angle_deg(350.0, 10.0), 20.0);
    assert_eq!(turn_angle_deg(10.0, 350.0), -20.0);
    assert_eq!(turn_angle_deg(0.0, 90.0), 90.0);
}

#[test]
fn durations_split_into_days_hours_minutes() {
    assert_eq!(days_to_seconds(7.0), 604_800.0);
    assert_eq!(split_duration(90_061.0), (1, 1, 1));
    assert_eq!(split_duration(-5.0), (0, 0, 0));
}

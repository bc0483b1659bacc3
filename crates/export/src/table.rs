//! CSV tables.

use std::io::Write;
use std::path::Path;

use mission_spacecraft::{Activity, ActivityKind};
use mission_vehicle::FlightPlan;
use serde::Serialize;

use crate::{ExportError, writer_for_path};

#[derive(Serialize)]
struct ScheduleRow {
    #[serde(rename = "type")]
    kind: &'static str,
    start_s: f64,
    end_s: f64,
    duration_s: f64,
    target_index: Option<usize>,
}

#[derive(Serialize)]
struct FlightPathRow {
    index: usize,
    lat_deg: f64,
    lon_deg: f64,
    alt_m: Option<f64>,
    time_s: f64,
    energy_used: f64,
}

const SCHEDULE_HEADER: [&str; 5] = ["type", "start_s", "end_s", "duration_s", "target_index"];
const FLIGHT_PATH_HEADER: [&str; 6] =
    ["index", "lat_deg", "lon_deg", "alt_m", "time_s", "energy_used"];

/// The header goes out even when there are no rows.
fn write_rows<W: Write, T: Serialize>(
    writer: W,
    header: &[&str],
    rows: impl IntoIterator<Item = T>,
) -> Result<(), ExportError> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(header)?;
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// One row per activity: `type,start_s,end_s,duration_s,target_index`.
///
/// Downlinks leave `target_index` empty.
pub fn write_schedule_csv(path: &Path, activities: &[Activity]) -> Result<(), ExportError> {
    let rows = activities.iter().map(|activity| ScheduleRow {
        kind: activity.label(),
        start_s: activity.start_s,
        end_s: activity.end_s,
        duration_s: activity.duration_s(),
        target_index: match activity.kind {
            ActivityKind::Observe { target, .. } => Some(target),
            ActivityKind::Downlink { .. } => None,
        },
    });
    write_rows(writer_for_path(path)?, &SCHEDULE_HEADER, rows)
}

/// One row per planned waypoint with arrival time and cumulative energy.
pub fn write_flight_path_csv(path: &Path, plan: &FlightPlan) -> Result<(), ExportError> {
    let rows = plan
        .route()
        .into_iter()
        .enumerate()
        .map(|(index, point)| FlightPathRow {
            index,
            lat_deg: point.waypoint.lat_deg,
            lon_deg: point.waypoint.lon_deg,
            alt_m: point.waypoint.alt_m,
            time_s: point.time_s,
            energy_used: point.energy_used,
        });
    write_rows(writer_for_path(path)?, &FLIGHT_PATH_HEADER, rows)
}

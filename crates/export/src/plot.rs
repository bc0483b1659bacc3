//! PNG rendering of a planned route in longitude/latitude space.

use std::path::Path;

use mission_vehicle::Waypoint;
use plotters::prelude::*;

use crate::{ExportError, ensure_parent};

/// Degrees of padding around the route's bounding box.
const MARGIN_DEG: f64 = 0.5;

fn plot_error<E: std::fmt::Display>(err: E) -> ExportError {
    ExportError::Plot(err.to_string())
}

/// Draw the route as a polyline through its waypoints, start in green and end in red.
///
/// The image carries no text so it renders without system fonts.
pub fn render_flight_path(
    path: &Path,
    waypoints: &[Waypoint],
    width: u32,
    height: u32,
) -> Result<(), ExportError> {
    let (first, last) = match (waypoints.first(), waypoints.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ExportError::EmptyRoute),
    };
    ensure_parent(path)?;

    let (mut lon_min, mut lon_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut lat_min, mut lat_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for wp in waypoints {
        lon_min = lon_min.min(wp.lon_deg);
        lon_max = lon_max.max(wp.lon_deg);
        lat_min = lat_min.min(wp.lat_deg);
        lat_max = lat_max.max(wp.lat_deg);
    }

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(
            (lon_min - MARGIN_DEG)..(lon_max + MARGIN_DEG),
            (lat_min - MARGIN_DEG)..(lat_max + MARGIN_DEG),
        )
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(
            waypoints.iter().map(|wp| (wp.lon_deg, wp.lat_deg)),
            BLUE.stroke_width(2),
        ))
        .map_err(plot_error)?;
    chart
        .draw_series(
            waypoints
                .iter()
                .map(|wp| Circle::new((wp.lon_deg, wp.lat_deg), 4, BLUE.filled())),
        )
        .map_err(plot_error)?;
    chart
        .draw_series([
            Circle::new((first.lon_deg, first.lat_deg), 7, GREEN.filled()),
            Circle::new((last.lon_deg, last.lat_deg), 7, RED.filled()),
        ])
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

//! Export helpers for JSON reports, CSV tables and PNG plots.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

pub mod plot;
pub mod report;
pub mod table;

pub use plot::render_flight_path;
pub use report::{AircraftReport, SpacecraftReport, write_aircraft_report, write_spacecraft_report};
pub use table::{write_flight_path_csv, write_schedule_csv};

/// Errors raised while writing artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write artifact: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to render plot: {0}")]
    Plot(String),
    #[error("route has no waypoints to plot")]
    EmptyRoute,
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    ensure_parent(path)?;
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub(crate) fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

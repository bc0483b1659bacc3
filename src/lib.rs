//! Greedy mission planning for aircraft routes and spacecraft observation schedules.
//!
//! The planning logic lives in the workspace crates; this façade re-exports them under short
//! names and hosts the [`runner`] shared by the command-line binaries.

pub use mission_config as config;
pub use mission_core as core;
pub use mission_export as export;
pub use mission_kernel as kernel;
pub use mission_orbits as orbits;
pub use mission_spacecraft as spacecraft;
pub use mission_vehicle as vehicle;

pub mod runner;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

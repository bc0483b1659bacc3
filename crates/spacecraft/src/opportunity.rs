//! Opportunity generation from observation and ground-station pass windows.

use mission_orbits::{OrbitConfig, Target, observation_windows, pass_windows};

use crate::activity::{Opportunity, OpportunityKind};

/// Observation windows shorter than this are dropped (s).
pub const MIN_OBSERVATION_S: f64 = 30.0;
/// Downlink windows shorter than this are dropped (s).
pub const MIN_DOWNLINK_S: f64 = 60.0;

/// All observation windows over `targets` and downlink windows over the station, too-short
/// windows removed, sorted by start time.
///
/// The sort is stable: at equal start times observations keep target order and precede
/// downlinks.
pub fn generate_opportunities(
    orbit: &OrbitConfig,
    targets: &[Target],
    station: (f64, f64),
    t_start: f64,
    t_end: f64,
) -> Vec<Opportunity> {
    let mut opportunities: Vec<Opportunity> =
        observation_windows(orbit, targets, t_start, t_end)
            .into_iter()
            .flat_map(|tw| {
                let kind = OpportunityKind::Observe {
                    target: tw.target_index,
                    value: tw.target.value,
                };
                tw.windows.into_iter().map(move |w| Opportunity {
                    start_s: w.start_s,
                    end_s: w.end_s,
                    kind,
                })
            })
            .filter(|o| o.duration_s() >= MIN_OBSERVATION_S)
            .collect();

    let (station_lat, station_lon) = station;
    opportunities.extend(
        pass_windows(orbit, station_lat, station_lon, t_start, t_end)
            .into_iter()
            .filter(|w| w.duration_s() >= MIN_DOWNLINK_S)
            .map(|w| Opportunity {
                start_s: w.start_s,
                end_s: w.end_s,
                kind: OpportunityKind::Downlink,
            }),
    );

    opportunities.sort_by(|a, b| a.start_s.total_cmp(&b.start_s));
    opportunities
}

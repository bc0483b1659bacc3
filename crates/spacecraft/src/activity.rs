//! Scheduled activities and the opportunities they are drawn from.

use serde::Serialize;

/// What a candidate window can be used for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OpportunityKind {
    Observe { target: usize, value: f64 },
    Downlink,
}

/// A feasible activity window derived from orbit geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Opportunity {
    pub start_s: f64,
    pub end_s: f64,
    #[serde(flatten)]
    pub kind: OpportunityKind,
}

impl Opportunity {
    pub fn duration_s(&self) -> f64 {
        self.end_s - self.start_s
    }
}

/// What a scheduled activity does.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityKind {
    Observe {
        target: usize,
        value: f64,
    },
    /// Carries the targets observed earlier in the schedule, which this pass sends down.
    Downlink {
        targets: Vec<usize>,
    },
}

/// An activity placed in the schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub start_s: f64,
    pub end_s: f64,
    #[serde(flatten)]
    pub kind: ActivityKind,
}

impl Activity {
    pub fn duration_s(&self) -> f64 {
        self.end_s - self.start_s
    }

    /// Observed target index, if this is an observation.
    pub fn observed_target(&self) -> Option<usize> {
        match self.kind {
            ActivityKind::Observe { target, .. } => Some(target),
            ActivityKind::Downlink { .. } => None,
        }
    }

    pub fn is_downlink(&self) -> bool {
        matches!(self.kind, ActivityKind::Downlink { .. })
    }

    /// Short label used in tables: `observe` or `downlink`.
    pub fn label(&self) -> &'static str {
        match self.kind {
            ActivityKind::Observe { .. } => "observe",
            ActivityKind::Downlink { .. } => "downlink",
        }
    }
}

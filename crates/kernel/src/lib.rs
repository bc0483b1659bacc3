//! Domain-agnostic planning kernel.
//!
//! A domain plugs in three pieces: [`DecisionVariables`] describing how a plan grows one choice
//! at a time, a set of [`Constraint`]s every accepted plan must satisfy, and an [`Objective`]
//! to maximize. [`solve`] then builds a plan greedily: at each step it tries every candidate,
//! drops the infeasible ones and keeps the best-scoring survivor. There is no backtracking.

use serde::Serialize;
use tracing::debug;

/// Step limit used when a caller has no better bound.
pub const DEFAULT_MAX_STEPS: usize = 1_000;

/// How a plan grows. Implementations own the mapping from choice tokens to plan contents.
pub trait DecisionVariables {
    type Plan;
    type Choice;

    /// The plan the solver starts from.
    fn initial_plan(&self) -> Self::Plan;

    /// Possible next choices, in the order ties are broken.
    fn candidates(&self, plan: &Self::Plan) -> Vec<Self::Choice>;

    /// Return a new plan extended by `choice`. `plan` must stay usable afterwards.
    fn add(&self, plan: &Self::Plan, choice: &Self::Choice) -> Self::Plan;

    fn is_complete(&self, plan: &Self::Plan) -> bool;
}

/// Outcome of a constraint check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Check {
    pub feasible: bool,
    /// Zero when feasible, otherwise a non-negative magnitude for reporting.
    pub violation: f64,
}

impl Check {
    /// A satisfied constraint.
    pub const fn satisfied() -> Self {
        Self {
            feasible: true,
            violation: 0.0,
        }
    }

    /// A violated constraint with the given magnitude.
    pub fn violated(violation: f64) -> Self {
        Self {
            feasible: false,
            violation: violation.max(0.0),
        }
    }

    /// Satisfied when `violation` is zero, violated otherwise.
    pub fn from_violation(violation: f64) -> Self {
        if violation == 0.0 {
            Self::satisfied()
        } else {
            Self::violated(violation)
        }
    }

    /// Whether the solver accepts a plan producing this check.
    pub fn accepts(&self) -> bool {
        self.feasible && self.violation <= 0.0
    }
}

/// A feasibility rule over plans of type `P`.
pub trait Constraint<P> {
    fn check(&self, plan: &P) -> Check;

    /// Human-readable name for logs and reports.
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        let path = full.split('<').next().unwrap_or(full);
        path.rsplit("::").next().unwrap_or(path)
    }
}

/// Score to maximize over plans of type `P`. Minimization problems return the negated cost.
pub trait Objective<P> {
    fn evaluate(&self, plan: &P) -> f64;
}

/// Why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The decision variables report the plan complete.
    Complete,
    /// No candidates were offered for the current plan.
    NoCandidates,
    /// Every candidate violated at least one constraint.
    NoFeasibleCandidate,
    /// The step limit was reached first.
    StepLimit,
}

/// Plan returned by [`solve`] together with how the search ended.
#[derive(Debug, Clone)]
pub struct Solution<P> {
    pub plan: P,
    /// Number of choices adopted.
    pub steps: usize,
    pub stop_reason: StopReason,
}

impl<P> Solution<P> {
    pub fn is_complete(&self) -> bool {
        self.stop_reason == StopReason::Complete
    }
}

/// Greedy single-pass construction.
///
/// Infeasibility and the step limit are not errors: the partial plan reached so far is returned
/// and [`Solution::stop_reason`] records why. Ties between equal scores go to the candidate
/// enumerated first, so the result is deterministic for a deterministic `candidates`.
pub fn solve<V>(
    variables: &V,
    constraints: &[Box<dyn Constraint<V::Plan> + '_>],
    objective: &dyn Objective<V::Plan>,
    max_steps: usize,
) -> Solution<V::Plan>
where
    V: DecisionVariables,
{
    let mut plan = variables.initial_plan();
    let mut steps = 0;

    let stop_reason = loop {
        if variables.is_complete(&plan) {
            break StopReason::Complete;
        }
        if steps >= max_steps {
            break StopReason::StepLimit;
        }

        let candidates = variables.candidates(&plan);
        if candidates.is_empty() {
            break StopReason::NoCandidates;
        }

        let mut best_score = f64::NEG_INFINITY;
        let mut best: Option<V::Plan> = None;
        for choice in &candidates {
            let next = variables.add(&plan, choice);
            let rejected_by = constraints
                .iter()
                .find(|constraint| !constraint.check(&next).accepts());
            if let Some(constraint) = rejected_by {
                debug!(step = steps, constraint = constraint.name(), "candidate rejected");
                continue;
            }
            let score = objective.evaluate(&next);
            if score > best_score {
                best_score = score;
                best = Some(next);
            }
        }

        match best {
            Some(next) => {
                debug!(
                    step = steps,
                    candidates = candidates.len(),
                    score = best_score,
                    "adopted candidate"
                );
                plan = next;
                steps += 1;
            }
            None => break StopReason::NoFeasibleCandidate,
        }
    };

    debug!(steps, ?stop_reason, "solver finished");
    Solution {
        plan,
        steps,
        stop_reason,
    }
}

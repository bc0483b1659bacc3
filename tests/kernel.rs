use mission_planner::kernel::{
    Check, Constraint, DecisionVariables, Objective, StopReason, solve,
};

/// Picks items one at a time; the plan is the list of chosen indices.
struct Picks {
    items: Vec<f64>,
    needed: usize,
}

impl DecisionVariables for Picks {
    type Plan = Vec<usize>;
    type Choice = usize;

    fn initial_plan(&self) -> Vec<usize> {
        Vec::new()
    }

    fn candidates(&self, plan: &Vec<usize>) -> Vec<usize> {
        (0..self.items.len()).filter(|i| !plan.contains(i)).collect()
    }

    fn add(&self, plan: &Vec<usize>, choice: &usize) -> Vec<usize> {
        let mut next = plan.clone();
        next.push(*choice);
        next
    }

    fn is_complete(&self, plan: &Vec<usize>) -> bool {
        plan.len() >= self.needed
    }
}

struct Total<'a>(&'a [f64]);

impl Objective<Vec<usize>> for Total<'_> {
    fn evaluate(&self, plan: &Vec<usize>) -> f64 {
        plan.iter().map(|&i| self.0[i]).sum()
    }
}

struct MaxTotal<'a> {
    items: &'a [f64],
    limit: f64,
}

impl Constraint<Vec<usize>> for MaxTotal<'_> {
    fn check(&self, plan: &Vec<usize>) -> Check {
        let total: f64 = plan.iter().map(|&i| self.items[i]).sum();
        Check::from_violation((total - self.limit).max(0.0))
    }
}

#[test]
fn zero_candidates_returns_initial_plan() {
    let variables = Picks {
        items: Vec::new(),
        needed: 1,
    };
    let solution = solve(&variables, &[], &Total(&[]), 10);
    assert!(solution.plan.is_empty());
    assert_eq!(solution.steps, 0);
    assert_eq!(solution.stop_reason, StopReason::NoCandidates);
    assert!(!solution.is_complete());
}

#[test]
fn greedy_takes_best_scoring_candidate_each_step() {
    let items = [1.0, 5.0, 3.0];
    let variables = Picks {
        items: items.to_vec(),
        needed: 2,
    };
    let solution = solve(&variables, &[], &Total(&items), 10);
    assert_eq!(solution.plan, vec![1, 2]);
    assert_eq!(solution.steps, 2);
    assert!(solution.is_complete());
}

#[test]
fn ties_go_to_first_enumerated_candidate() {
    let items = [2.0, 2.0, 2.0];
    let variables = Picks {
        items: items.to_vec(),
        needed: 1,
    };
    let solution = solve(&variables, &[], &Total(&items), 10);
    assert_eq!(solution.plan, vec![0]);
}

#[test]
fn infeasible_candidates_are_skipped() {
    let items = [1.0, 5.0, 3.0];
    let variables = Picks {
        items: items.to_vec(),
        needed: 2,
    };
    let constraints: Vec<Box<dyn Constraint<Vec<usize>> + '_>> = vec![Box::new(MaxTotal {
        items: &items,
        limit: 4.0,
    })];
    let solution = solve(&variables, &constraints, &Total(&items), 10);
    assert_eq!(solution.plan, vec![2, 0]);
    assert_eq!(solution.stop_reason, StopReason::Complete);
}

#[test]
fn stops_when_no_candidate_is_feasible() {
    let items = [10.0, 20.0];
    let variables = Picks {
        items: items.to_vec(),
        needed: 2,
    };
    let constraints: Vec<Box<dyn Constraint<Vec<usize>> + '_>> = vec![Box::new(MaxTotal {
        items: &items,
        limit: 5.0,
    })];
    let solution = solve(&variables, &constraints, &Total(&items), 10);
    assert!(solution.plan.is_empty());
    assert_eq!(solution.stop_reason, StopReason::NoFeasibleCandidate);
}

#[test]
fn step_limit_truncates_plan() {
    let items = [1.0, 2.0, 3.0, 4.0];
    let variables = Picks {
        items: items.to_vec(),
        needed: 4,
    };
    let solution = solve(&variables, &[], &Total(&items), 2);
    assert_eq!(solution.plan, vec![3, 2]);
    assert_eq!(solution.steps, 2);
    assert_eq!(solution.stop_reason, StopReason::StepLimit);
}

#[test]
fn check_helpers_classify_violations() {
    assert!(Check::satisfied().accepts());
    assert!(Check::from_violation(0.0).accepts());
    let violated = Check::from_violation(2.5);
    assert!(!violated.feasible);
    assert_eq!(violated.violation, 2.5);
    assert!(!violated.accepts());
    assert_eq!(Check::violated(-1.0).violation, 0.0);
    assert!(!Check::violated(-1.0).accepts());
}

#[test]
fn constraint_name_defaults_to_type_name() {
    let items = [1.0];
    let constraint = MaxTotal {
        items: &items,
        limit: 1.0,
    };
    assert_eq!(constraint.name(), "MaxTotal");
}

struct Within<C>(C);

impl<C: Constraint<Vec<usize>>> Constraint<Vec<usize>> for Within<C> {
    fn check(&self, plan: &Vec<usize>) -> Check {
        self.0.check(plan)
    }
}

#[test]
fn generic_constraint_name_drops_type_parameters() {
    let items = [1.0];
    let wrapped = Within(MaxTotal {
        items: &items,
        limit: 1.0,
    });
    assert_eq!(wrapped.name(), "Within");
}

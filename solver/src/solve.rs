//! The solver chain: best-first search, then greedy, then annealing, then the
//! advisory fallback.

use std::time::Instant;

use crate::budget::{Allocation, Money};
use crate::problem::{Params, Problem};
use crate::search::{Annealing, Astar, Attempt, Engine, EngineKind, Greedy, Method, Status};
use crate::validate::repair;

/// Everything one solve reports back. `state` is `None` only when no numeric
/// engine produced an allocation and the caller should fall back to its
/// advisory collaborator (`status == AiRecommendation`).
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub state: Option<Allocation>,
    pub method: Method,
    pub status: Status,
    /// Human-readable repair and diagnostic messages.
    pub notes: Vec<String>,
    /// One entry per engine attempted, in attempt order.
    pub trace: Vec<Attempt>,
}

/// Runs the engines in order, validates every candidate they produce, and
/// always returns a structured result: infeasibility is reported, never raised.
pub struct Router {
    params: Params,
}

impl Router {
    pub fn new(params: Params) -> Router {
        Router { params }
    }

    pub fn solve(&self, pb: &Problem) -> SolveResult {
        let required = pb.floors.total();
        if required > pb.income {
            return self.floors_fallback(pb, required);
        }

        let deadline = self.params.timeout.map(|budget| Instant::now() + budget);
        let mut engines = [
            EngineKind::Astar(Astar::new(self.params.astar_iters).with_deadline(deadline)),
            EngineKind::Greedy(Greedy::new(self.params.greedy_iters).with_deadline(deadline)),
            EngineKind::Annealing(
                Annealing::new(self.params.sa_seed)
                    .with_steps(self.params.sa_steps)
                    .with_schedule(self.params.sa_temp_start, self.params.sa_temp_end)
                    .with_deadline(deadline),
            ),
        ];

        let mut trace = Vec::with_capacity(engines.len() + 1);
        for engine in &mut engines {
            let attempt = engine.run(pb);
            tracing::debug!(method = %attempt.method, status = %attempt.status, "engine attempted");
            trace.push(attempt);
            if attempt.status == Status::Success {
                if let Some(state) = attempt.state {
                    let repaired = repair(&state, &pb.floors, pb.income);
                    return SolveResult {
                        state: Some(repaired.state),
                        method: attempt.method,
                        status: repaired.status,
                        notes: repaired.notes,
                        trace,
                    };
                }
            }
        }

        // No engine reported success. Fall back to the most refined best-effort
        // state if one exists, otherwise hand over to the advisory tier.
        let candidate = trace
            .iter()
            .rev()
            .find_map(|attempt| attempt.state.map(|state| (attempt.method, state)));
        if let Some((method, state)) = candidate {
            let repaired = repair(&state, &pb.floors, pb.income);
            return SolveResult {
                state: Some(repaired.state),
                method,
                status: Status::Partial,
                notes: repaired.notes,
                trace,
            };
        }

        trace.push(Attempt {
            method: Method::AiRecommendation,
            status: Status::AiRecommendation,
            state: None,
            iterations: 0,
        });
        SolveResult {
            state: None,
            method: Method::AiRecommendation,
            status: Status::AiRecommendation,
            notes: vec!["no numeric engine produced an allocation".to_string()],
            trace,
        }
    }

    /// Floors alone exceed income: no engine can help. Return the floors
    /// themselves, validated (which scales them down), as a partial result.
    fn floors_fallback(&self, pb: &Problem, required: Money) -> SolveResult {
        tracing::debug!(required, income = pb.income, "floors exceed income");
        let floors_state = Allocation::from_fn(|cat| pb.floors[cat]);
        let repaired = repair(&floors_state, &pb.floors, pb.income);

        let mut notes = vec![format!(
            "floors alone require {required} but income is {}",
            pb.income
        )];
        notes.extend(repaired.notes);

        let attempt = Attempt {
            method: Method::Greedy,
            status: Status::Partial,
            state: Some(repaired.state),
            iterations: 0,
        };
        SolveResult {
            state: Some(repaired.state),
            method: Method::Greedy,
            status: Status::Partial,
            notes,
            trace: vec![attempt],
        }
    }
}

/// Solves with the default parameters.
pub fn solve(pb: &Problem) -> SolveResult {
    Router::new(Params::default()).solve(pb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{Category, Floors};

    #[test]
    fn first_engine_that_succeeds_wins() {
        let floors = Floors::default();
        let start = Allocation::from_fn(|c| floors[c]);
        let pb = Problem::new(start, 3_000_000, floors, 500_000, 50_000).unwrap();

        let result = solve(&pb);
        assert_eq!(result.method, Method::Astar);
        assert_eq!(result.status, Status::Success);
        assert_eq!(result.trace.len(), 1);
    }

    #[test]
    fn trace_ends_with_the_returned_method() {
        let floors = Floors::default();
        let start = Allocation::from_fn(|c| floors[c]);
        for target in [0, 200_000, 10_000_000] {
            let pb = Problem::new(start, 1_000_000, floors, target, 50_000).unwrap();
            let result = solve(&pb);
            assert_eq!(result.trace.last().unwrap().method, result.method);
        }
    }

    #[test]
    fn infeasible_floors_short_circuit() {
        let floors = Floors::default();
        let start = Allocation::new();
        let pb = Problem::new(start, 10_000, floors, 0, 50_000).unwrap();

        let result = Router::new(Params::default()).solve(&pb);
        assert_eq!(result.status, Status::Partial);
        assert!(result.notes[0].contains("floors alone require 15000"));
        let state = result.state.unwrap();
        assert!(state.total() <= 10_000);
        assert_eq!(result.trace.len(), 1);
        assert_eq!(result.trace[0].method, result.method);
    }

    #[test]
    fn identical_inputs_and_seed_are_deterministic() {
        let start = Allocation::from_fn(|_| 100_000);
        let pb = Problem::new(start, 600_000, Floors::default(), 250_000, 50_000).unwrap();
        let params = Params {
            sa_seed: 42,
            ..Params::default()
        };
        let a = Router::new(params.clone()).solve(&pb);
        let b = Router::new(params).solve(&pb);
        assert_eq!(a.state, b.state);
        assert_eq!(a.method, b.method);
        assert_eq!(a.status, b.status);
    }

    #[test]
    fn unreachable_target_still_returns_a_validated_state() {
        let floors = Floors::default();
        let start = Allocation::from_fn(|c| floors[c]);
        // Target far beyond income: nothing scores zero.
        let pb = Problem::new(start, 100_000, floors, 10_000_000, 50_000).unwrap();

        let result = solve(&pb);
        let state = result.state.expect("numeric engines always produce a state");
        assert!(state.within_income(pb.income));
        assert!(state.meets_floors(&floors));
        assert_ne!(result.status, Status::AiRecommendation);
    }

    #[test]
    fn savings_target_drives_the_final_state() {
        let start = Allocation::new()
            .with(Category::Kos, 800_000)
            .with(Category::Makan, 650_000)
            .with(Category::Transport, 10_000)
            .with(Category::Internet, 5_000)
            .with(Category::Jajan, 200_000)
            .with(Category::Hiburan, 100_000);
        let pb = Problem::new(start, 2_000_000, Floors::default(), 200_000, 50_000).unwrap();

        let result = solve(&pb);
        let state = result.state.unwrap();
        assert_eq!(state.savings(), 200_000);
        assert!(state.within_income(2_000_000));
    }
}

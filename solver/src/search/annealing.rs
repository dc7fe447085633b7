//! Stochastic refinement with geometric cooling.

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::budget::{Category, Money};
use crate::problem::Problem;
use crate::score::{Scorer, Weights};
use crate::search::{out_of_time, Attempt, Engine, Method, Status};

const EPSILON: f64 = 1e-9;

/// Simulated annealing over single-category moves. Worsening moves are accepted
/// with probability `exp(-delta / T)` under a geometric temperature schedule,
/// and the best state ever visited is returned, not the final one.
///
/// The generator is seeded, so a run is a pure function of `(problem, seed)`.
pub struct Annealing {
    steps: u32,
    temp_start: f64,
    temp_end: f64,
    seed: u64,
    deadline: Option<Instant>,
}

impl Annealing {
    pub fn new(seed: u64) -> Annealing {
        Annealing {
            steps: 500,
            temp_start: 1.0,
            temp_end: 0.01,
            seed,
            deadline: None,
        }
    }

    pub fn with_steps(mut self, steps: u32) -> Annealing {
        self.steps = steps;
        self
    }

    pub fn with_schedule(mut self, temp_start: f64, temp_end: f64) -> Annealing {
        self.temp_start = temp_start;
        self.temp_end = temp_end;
        self
    }

    pub fn with_deadline(mut self, deadline: Option<Instant>) -> Annealing {
        self.deadline = deadline;
        self
    }

    fn temperature(&self, step: u32) -> f64 {
        let ratio = self.temp_end / self.temp_start;
        self.temp_start * ratio.powf(f64::from(step) / f64::from(self.steps))
    }
}

impl Engine for Annealing {
    fn method(&self) -> Method {
        Method::SimulatedAnnealing
    }

    fn run(&mut self, pb: &Problem) -> Attempt {
        let scorer = Scorer::new(pb, Weights::ANNEALING);
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut state = pb.start;
        let mut penalty = scorer.penalty(&state);
        let mut best = state;
        let mut best_penalty = penalty;

        let mut iterations = 0;
        let mut interrupted = false;
        for step in 0..self.steps {
            if out_of_time(self.deadline) {
                interrupted = true;
                break;
            }
            iterations += 1;

            let cat = Category::ALL[rng.random_range(0..Category::COUNT)];
            let delta: Money = if rng.random() { pb.step } else { -pb.step };
            let amount = state[cat] + delta;

            // Cheap feasibility filter, applied before scoring.
            if amount < 0 || amount < pb.floors[cat] {
                continue;
            }
            let candidate = state.with(cat, amount);
            if candidate.total() > pb.income + pb.step {
                continue;
            }

            let candidate_penalty = scorer.penalty(&candidate);
            let worsening = candidate_penalty - penalty;
            let accept = worsening <= 0 || {
                let temp = self.temperature(step);
                rng.random::<f64>() < (-(worsening as f64) / (temp + EPSILON)).exp()
            };
            if accept {
                state = candidate;
                penalty = candidate_penalty;
                if penalty < best_penalty {
                    best = state;
                    best_penalty = penalty;
                    tracing::trace!(step, penalty, "annealing found a new best");
                }
            }
        }

        // Last numeric tier: the best-effort state counts as success unless the
        // wall-clock budget cut the run short.
        let status = if interrupted { Status::Partial } else { Status::Success };
        tracing::debug!(iterations, penalty = best_penalty, %status, "annealing finished");
        Attempt {
            method: Method::SimulatedAnnealing,
            status,
            state: Some(best),
            iterations,
        }
    }
}

//! Priority-ordered local adjustment.

use std::time::Instant;

use crate::budget::{Allocation, Category, Floors, Money};
use crate::problem::Problem;
use crate::search::{out_of_time, Attempt, Engine, Method, Status};

/// Deterministic adjuster: each iteration applies the first rule that fires,
/// moving exactly one `step`. Rules, in priority order: repair floors, cut
/// overspend, chase the savings target, absorb leftover slack.
pub struct Greedy {
    max_iter: u64,
    deadline: Option<Instant>,
}

impl Greedy {
    pub fn new(max_iter: u64) -> Greedy {
        Greedy {
            max_iter,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Option<Instant>) -> Greedy {
        self.deadline = deadline;
        self
    }
}

impl Engine for Greedy {
    fn method(&self) -> Method {
        Method::Greedy
    }

    fn run(&mut self, pb: &Problem) -> Attempt {
        let mut state = pb.start;
        let mut iterations = 0;

        while iterations < self.max_iter && !out_of_time(self.deadline) {
            iterations += 1;

            // Basic needs first: lift one violated floor per iteration.
            if let Some(cat) = Category::ALL.into_iter().find(|&c| state[c] < pb.floors[c]) {
                state.set(cat, state[cat] + pb.step);
                continue;
            }

            let spent = state.total();

            // Overspending: take from the biggest bucket that still has room.
            if spent > pb.income {
                match largest_above_floor(&state, &pb.floors, None) {
                    Some(cat) => {
                        state.set(cat, state[cat] - pb.step);
                        continue;
                    }
                    // Every category is at its floor; nothing left to cut.
                    None => break,
                }
            }

            if pb.target > 0 {
                let saved = state.savings();
                if saved < pb.target {
                    if spent + pb.step <= pb.income {
                        state.set(Category::SAVINGS, saved + pb.step);
                        continue;
                    }
                    // Income is exhausted: swap one step from the biggest
                    // spending bucket into savings.
                    if let Some(victim) =
                        largest_above_floor(&state, &pb.floors, Some(Category::SAVINGS))
                    {
                        state.set(victim, state[victim] - pb.step);
                        state.set(Category::SAVINGS, saved + pb.step);
                        continue;
                    }
                } else if saved > pb.target && saved - pb.step >= pb.floors[Category::SAVINGS] {
                    state.set(Category::SAVINGS, saved - pb.step);
                    continue;
                }
            } else if pb.income - spent >= pb.step {
                // No savings objective: spread leftover income, smallest first.
                let cat = smallest(&state);
                state.set(cat, state[cat] + pb.step);
                continue;
            }

            // No rule fired.
            break;
        }

        let status = if state.within_income(pb.income) {
            Status::Success
        } else {
            Status::Partial
        };
        tracing::debug!(iterations, %status, "greedy adjustment settled");
        Attempt {
            method: Method::Greedy,
            status,
            state: Some(state),
            iterations,
        }
    }
}

/// Largest-amount category strictly above its floor, skipping `excluded`.
/// Canonical order wins ties.
fn largest_above_floor(
    state: &Allocation,
    floors: &Floors,
    excluded: Option<Category>,
) -> Option<Category> {
    let mut best: Option<(Category, Money)> = None;
    for cat in Category::ALL {
        if Some(cat) == excluded || state[cat] <= floors[cat] {
            continue;
        }
        if best.is_none_or(|(_, amount)| state[cat] > amount) {
            best = Some((cat, state[cat]));
        }
    }
    best.map(|(cat, _)| cat)
}

/// Smallest-amount category; canonical order wins ties.
fn smallest(state: &Allocation) -> Category {
    let mut best = (Category::Kos, state[Category::Kos]);
    for cat in Category::ALL {
        if state[cat] < best.1 {
            best = (cat, state[cat]);
        }
    }
    best.0
}

//! Problem statement and solver parameters.

use std::time::Duration;

use thiserror::Error;

use crate::budget::{Allocation, Category, Floors, Money};

/// Reasons a problem statement is rejected before any engine runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidProblem {
    #[error("income must be positive, got {0}")]
    NonPositiveIncome(Money),
    #[error("step must be positive, got {0}")]
    NonPositiveStep(Money),
    #[error("savings target must be non-negative, got {0}")]
    NegativeTarget(Money),
    #[error("floor of '{0}' must be non-negative, got {1}")]
    NegativeFloor(Category, Money),
    #[error("starting amount of '{0}' must be non-negative, got {1}")]
    NegativeAmount(Category, Money),
}

/// One solve: a starting allocation plus the constraints to satisfy.
///
/// A target of `0` disables the savings objective.
#[derive(Debug, Clone, Copy)]
pub struct Problem {
    pub start: Allocation,
    pub income: Money,
    pub floors: Floors,
    pub target: Money,
    pub step: Money,
}

impl Problem {
    /// Checks the input contract. This is the only fallible seam of the crate:
    /// a constructed problem can always be solved without errors or panics.
    pub fn new(
        start: Allocation,
        income: Money,
        floors: Floors,
        target: Money,
        step: Money,
    ) -> Result<Problem, InvalidProblem> {
        if income <= 0 {
            return Err(InvalidProblem::NonPositiveIncome(income));
        }
        if step <= 0 {
            return Err(InvalidProblem::NonPositiveStep(step));
        }
        if target < 0 {
            return Err(InvalidProblem::NegativeTarget(target));
        }
        for cat in Category::ALL {
            if floors[cat] < 0 {
                return Err(InvalidProblem::NegativeFloor(cat, floors[cat]));
            }
            if start[cat] < 0 {
                return Err(InvalidProblem::NegativeAmount(cat, start[cat]));
            }
        }
        Ok(Problem {
            start,
            income,
            floors,
            target,
            step,
        })
    }
}

/// Tuning knobs of the solver chain.
///
/// A plain value handed to the router; there is no process-wide configuration.
#[derive(Debug, Clone)]
pub struct Params {
    /// Iteration bound of the best-first search.
    pub astar_iters: u64,
    /// Iteration bound of the greedy adjuster.
    pub greedy_iters: u64,
    /// Number of annealing proposals.
    pub sa_steps: u32,
    pub sa_temp_start: f64,
    pub sa_temp_end: f64,
    /// Seed of the annealing RNG. Identical seed and problem give identical results.
    pub sa_seed: u64,
    /// Optional wall-clock budget shared by the whole chain. When exceeded, the
    /// running engine stops at the top of its loop and reports its best state
    /// as partial. Off by default so that solves stay deterministic.
    pub timeout: Option<Duration>,
}

impl Default for Params {
    fn default() -> Params {
        Params {
            astar_iters: 1_000,
            greedy_iters: 300,
            sa_steps: 500,
            sa_temp_start: 1.0,
            sa_temp_end: 0.01,
            sa_seed: 0,
            timeout: None,
        }
    }
}

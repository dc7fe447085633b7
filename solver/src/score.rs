//! The shared penalty function minimized by every engine.

use crate::budget::{Allocation, Money};
use crate::problem::Problem;

/// Calibration of the penalty terms.
///
/// The overspend and floor weights must dominate the savings weight, so that an
/// infeasible allocation is never preferred to a larger savings miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub overspend: Money,
    pub floor: Money,
    pub savings: Money,
}

impl Weights {
    /// Calibration of the best-first search.
    pub const SEARCH: Weights = Weights {
        overspend: 10,
        floor: 5,
        savings: 1,
    };

    /// Calibration of the annealing refiner. Steeper, so that random walks are
    /// pulled back into the feasible region quickly.
    pub const ANNEALING: Weights = Weights {
        overspend: 100,
        floor: 50,
        savings: 1,
    };
}

/// Scores an allocation against a problem. A penalty of `0` means every hard
/// constraint is met and the savings target is hit exactly.
pub struct Scorer<'a> {
    pb: &'a Problem,
    weights: Weights,
}

impl<'a> Scorer<'a> {
    pub fn new(pb: &'a Problem, weights: Weights) -> Scorer<'a> {
        Scorer { pb, weights }
    }

    pub fn penalty(&self, state: &Allocation) -> Money {
        let mut h = 0;

        let spent = state.total();
        if spent > self.pb.income {
            h += (spent - self.pb.income) * self.weights.overspend;
        }

        for (cat, floor) in self.pb.floors.iter() {
            if state[cat] < floor {
                h += (floor - state[cat]) * self.weights.floor;
            }
        }

        if self.pb.target > 0 {
            h += (self.pb.target - state.savings()).abs() * self.weights.savings;
        }

        h
    }
}

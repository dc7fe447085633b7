//! Draft allocations from coarse preferences.
//!
//! Callers that only know how much the user cares about each bucket can turn
//! that into a concrete starting allocation for the solver: the savings target
//! is pinned first, every other category receives a share of income matching
//! its appetite, and the draft is trimmed in canonical order if it overflows.

use crate::budget::{Allocation, Category, Money};

/// How much of the income a category should claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appetite {
    /// Bare minimum share.
    Minimal,
    #[default]
    Balanced,
    /// Comfortable share.
    Maximal,
}

impl Appetite {
    /// Share of income, in percent.
    fn share(self) -> Money {
        match self {
            Appetite::Minimal => 5,
            Appetite::Balanced => 10,
            Appetite::Maximal => 20,
        }
    }
}

/// Builds a starting allocation from per-category appetites.
#[derive(Debug, Clone)]
pub struct BaselineBuilder {
    income: Money,
    target_saving: Money,
    appetites: [Appetite; Category::COUNT],
}

impl BaselineBuilder {
    pub fn new(income: Money) -> BaselineBuilder {
        BaselineBuilder {
            income,
            target_saving: 0,
            appetites: [Appetite::default(); Category::COUNT],
        }
    }

    /// Pins the savings category to `target`.
    pub fn target_saving(mut self, target: Money) -> BaselineBuilder {
        self.target_saving = target;
        self
    }

    /// Sets the appetite of a non-savings category. The savings bucket is
    /// controlled by [`BaselineBuilder::target_saving`] alone and ignores this.
    pub fn appetite(mut self, cat: Category, appetite: Appetite) -> BaselineBuilder {
        self.appetites[cat as usize] = appetite;
        self
    }

    pub fn build(&self) -> Allocation {
        let mut draft = Allocation::new().with(Category::SAVINGS, self.target_saving);
        for cat in Category::ALL {
            if cat == Category::SAVINGS {
                continue;
            }
            let share = self.appetites[cat as usize].share();
            draft = draft.with(cat, self.income * share / 100);
        }

        // Overflowing drafts give up spending money, never the savings target.
        let mut excess = draft.total() - self.income;
        for cat in Category::ALL {
            if excess <= 0 {
                break;
            }
            if cat == Category::SAVINGS {
                continue;
            }
            let cut = draft[cat].min(excess);
            draft = draft.with(cat, draft[cat] - cut);
            excess -= cut;
        }
        draft
    }
}

//! Single-move neighbor enumeration.

use smallvec::SmallVec;

use crate::budget::{Allocation, Category, Floors, Money};

/// At most two moves per category.
pub type Neighbors = SmallVec<[Allocation; 2 * Category::COUNT]>;

/// Enumerates every `±step` move on a single category, in canonical order, so
/// downstream tie-breaking is reproducible.
///
/// A decrease is suppressed when it would cross the category floor. An increase
/// is suppressed when it would push the category alone above `income`: such a
/// state can never become feasible again by adjusting other categories.
pub fn neighbors(state: &Allocation, step: Money, floors: &Floors, income: Money) -> Neighbors {
    let mut out = Neighbors::new();
    for cat in Category::ALL {
        let amount = state[cat];
        if amount + step <= income {
            out.push(state.with(cat, amount + step));
        }
        if amount - step >= floors[cat] {
            out.push(state.with(cat, amount - step));
        }
    }
    out
}

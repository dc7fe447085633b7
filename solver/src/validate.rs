//! Final-state validation and repair.
//!
//! Every candidate the engines produce goes through [`repair`] before it is
//! returned to the caller: light damage is fixed silently into notes, heavy
//! damage is scaled away and flagged, and an already-valid state passes through
//! untouched.

use crate::budget::{Allocation, Category, Floors, Money};
use crate::search::Status;

/// Cut order when the total exceeds income: soft categories first, essentials
/// last, savings never.
const REDUCTION_ORDER: [Category; 6] = [
    Category::Hiburan,
    Category::Jajan,
    Category::Internet,
    Category::Transport,
    Category::Makan,
    Category::Kos,
];

/// Outcome of a repair pass. `status` is [`Status::Success`] with empty notes
/// when the input was already valid, [`Status::Warning`] otherwise.
#[derive(Debug, Clone)]
pub struct Repair {
    pub state: Allocation,
    pub status: Status,
    pub notes: Vec<String>,
}

/// Repairs `state` until it is non-negative, floor-respecting and affordable.
///
/// The proportional-scaling last resort can push categories back below their
/// floors; that is recorded in the notes and deliberately not re-lifted, since
/// re-lifting would reintroduce the overspend.
pub fn repair(state: &Allocation, floors: &Floors, income: Money) -> Repair {
    let mut state = *state;
    let mut notes = Vec::new();

    for cat in Category::ALL {
        if state[cat] < 0 {
            notes.push(format!("negative amount on '{cat}' ({}), reset to 0", state[cat]));
            state.set(cat, 0);
        }
    }

    for cat in Category::ALL {
        if state[cat] < floors[cat] {
            notes.push(format!(
                "'{cat}' below its floor ({} < {}), lifted",
                state[cat], floors[cat]
            ));
            state.set(cat, floors[cat]);
        }
    }

    let total = state.total();
    if total > income {
        let mut excess = total - income;
        notes.push(format!("total exceeds income by {excess}, cutting discretionary categories"));
        for cat in REDUCTION_ORDER {
            if excess <= 0 {
                break;
            }
            let available = state[cat] - floors[cat];
            if available > 0 {
                let cut = available.min(excess);
                state.set(cat, state[cat] - cut);
                excess -= cut;
            }
        }

        if excess > 0 {
            // Floors alone do not fit: scale everything down proportionally.
            notes.push("total still exceeds income, scaling every category down".to_string());
            tracing::debug!(excess, "proportional scaling engaged");
            let remaining = state.total();
            for cat in Category::ALL {
                state.set(cat, state[cat] * income / remaining);
            }
        }
    }

    for cat in Category::ALL {
        state.set(cat, state[cat].clamp(0, income));
    }

    let status = if notes.is_empty() { Status::Success } else { Status::Warning };
    Repair { state, status, notes }
}

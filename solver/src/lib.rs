//! Cascading allocation solver for a fixed-category monthly budget.
//!
//! Given a starting allocation, an income cap, per-category floors and an
//! optional savings target, the solver runs a chain of three numeric engines
//! (best-first search, a greedy adjuster, a simulated-annealing refiner),
//! validates the first candidate that succeeds, and reports it together with a
//! trace of every attempt. The chain never errors: infeasible inputs come back
//! as best-effort partial results with diagnostic notes.
//!
//! ```
//! use anggaran::budget::{Allocation, Category, Floors};
//! use anggaran::problem::Problem;
//! use anggaran::search::Status;
//! use anggaran::solve::solve;
//!
//! let start = Allocation::new()
//!     .with(Category::Kos, 800_000)
//!     .with(Category::Makan, 650_000)
//!     .with(Category::Transport, 10_000)
//!     .with(Category::Internet, 5_000);
//! let pb = Problem::new(start, 2_000_000, Floors::default(), 300_000, 50_000).unwrap();
//!
//! let result = solve(&pb);
//! let state = result.state.unwrap();
//! assert_eq!(result.status, Status::Success);
//! assert_eq!(state.savings(), 300_000);
//! assert!(state.within_income(2_000_000));
//! ```

pub mod budget;
pub mod problem;
pub mod score;
pub mod search;
pub mod solve;
pub mod validate;

//! End-to-end scenarios for the solver chain.
//!
//! Each test drives the public `solve` entry point on a realistic monthly
//! budget and checks the result invariants: non-negative amounts, floors
//! respected, total within income, and a trace that ends with the method
//! actually returned.

use anggaran::budget::{Allocation, Category, Floors, Money};
use anggaran::problem::{Params, Problem};
use anggaran::search::Status;
use anggaran::solve::{solve, Router, SolveResult};
use anggaran::validate::repair;

const STEP: Money = 50_000;

/* =============================== Helpers ============================== */

fn at_floors(floors: &Floors) -> Allocation {
    Allocation::from_fn(|c| floors[c])
}

/// The invariants every returned state must satisfy, unless the last-resort
/// scaling path fired (which must then have left a note).
fn check_invariants(result: &SolveResult, pb: &Problem) {
    let state = result.state.expect("scenario produces a state");
    for cat in Category::ALL {
        assert!(state[cat] >= 0, "{cat} went negative: {}", state[cat]);
    }
    assert!(
        state.total() <= pb.income,
        "total {} exceeds income {}",
        state.total(),
        pb.income
    );
    let scaled = result.notes.iter().any(|n| n.contains("scaling"));
    if !scaled {
        assert!(state.meets_floors(&pb.floors), "floors violated: {state}");
    }
    assert_eq!(result.trace.last().unwrap().method, result.method);
}

/* =============================== Scenarios ============================ */

#[test]
fn feasible_start_without_savings_target() {
    let floors = Floors::default();
    let start = Allocation::new()
        .with(Category::Kos, 800_000)
        .with(Category::Makan, 650_000)
        .with(Category::Transport, 10_000)
        .with(Category::Internet, 5_000)
        .with(Category::Tabungan, 30_000);
    let pb = Problem::new(start, 2_000_000, floors, 0, STEP).unwrap();

    let result = solve(&pb);
    assert_eq!(result.status, Status::Success);
    check_invariants(&result, &pb);
}

#[test]
fn infeasible_floors_come_back_scaled() {
    let floors = Floors::default();
    let pb = Problem::new(Allocation::new(), 10_000, floors, 0, STEP).unwrap();

    let result = solve(&pb);
    assert_eq!(result.status, Status::Partial);
    assert!(result.notes.iter().any(|n| n.contains("income")));

    // The floors themselves, scaled down by 10_000 / 15_000.
    let state = result.state.unwrap();
    assert_eq!(state[Category::Transport], 6_666);
    assert_eq!(state[Category::Internet], 3_333);
    assert!(state.total() <= 10_000);
    assert_eq!(result.trace.last().unwrap().method, result.method);
}

#[test]
fn reachable_savings_target_is_hit_exactly() {
    let floors = Floors::default();
    let pb = Problem::new(at_floors(&floors), 3_000_000, floors, 500_000, STEP).unwrap();

    let result = solve(&pb);
    assert_eq!(result.status, Status::Success);
    assert_eq!(result.state.unwrap().savings(), 500_000);
    check_invariants(&result, &pb);
}

#[test]
fn savings_target_funded_by_cutting_spending() {
    // Income is fully committed: every rupiah saved has to come out of a
    // spending bucket.
    let start = Allocation::new()
        .with(Category::Kos, 900_000)
        .with(Category::Makan, 635_000)
        .with(Category::Transport, 10_000)
        .with(Category::Internet, 5_000)
        .with(Category::Jajan, 250_000)
        .with(Category::Hiburan, 200_000);
    assert_eq!(start.total(), 2_000_000);
    let pb = Problem::new(start, 2_000_000, Floors::default(), 300_000, STEP).unwrap();

    let result = solve(&pb);
    let state = result.state.unwrap();
    // Within one step of the target.
    assert!(state.savings() >= 300_000 - STEP, "savings stuck at {}", state.savings());
    check_invariants(&result, &pb);
}

#[test]
fn overspent_start_is_brought_under_income() {
    let floors = Floors::default();
    let start = Allocation::new()
        .with(Category::Kos, 900_000)
        .with(Category::Makan, 700_000)
        .with(Category::Transport, 60_000)
        .with(Category::Internet, 55_000)
        .with(Category::Jajan, 385_000)
        .with(Category::Hiburan, 400_000);
    assert_eq!(start.total(), 2_500_000);
    let pb = Problem::new(start, 2_000_000, floors, 0, STEP).unwrap();

    let result = solve(&pb);
    assert!(result.state.unwrap().total() <= 2_000_000);
    check_invariants(&result, &pb);

    // The repair path itself cuts in the fixed discretionary order.
    let repaired = repair(&start, &floors, 2_000_000);
    let s = repaired.state;
    assert_eq!(s[Category::Hiburan], 0);
    assert_eq!(s[Category::Jajan], 285_000);
    assert_eq!(s[Category::Kos], 900_000);
    assert_eq!(s.total(), 2_000_000);
}

#[test]
fn income_exactly_at_floors_returns_the_floors() {
    let floors = Floors::default();
    let pb = Problem::new(at_floors(&floors), floors.total(), floors, 0, STEP).unwrap();

    let result = solve(&pb);
    assert_eq!(result.status, Status::Success);
    assert_eq!(result.state.unwrap(), at_floors(&floors));
    check_invariants(&result, &pb);
}

/* ================================= Laws =============================== */

#[test]
fn validating_a_valid_state_changes_nothing() {
    let floors = Floors::default();
    let state = at_floors(&floors).with(Category::Tabungan, 200_000);
    let repaired = repair(&state, &floors, 1_000_000);
    assert_eq!(repaired.state, state);
    assert!(repaired.notes.is_empty());
    assert_eq!(repaired.status, Status::Success);
}

#[test]
fn solves_are_deterministic_for_a_fixed_seed() {
    let start = Allocation::new()
        .with(Category::Kos, 500_000)
        .with(Category::Makan, 300_000)
        .with(Category::Transport, 50_000)
        .with(Category::Internet, 50_000)
        .with(Category::Jajan, 100_000);
    let pb = Problem::new(start, 1_200_000, Floors::default(), 400_000, STEP).unwrap();
    let params = Params {
        sa_seed: 99,
        ..Params::default()
    };

    let a = Router::new(params.clone()).solve(&pb);
    let b = Router::new(params).solve(&pb);
    assert_eq!(a.state, b.state);
    assert_eq!(a.method, b.method);
    assert_eq!(a.status, b.status);
    assert_eq!(a.notes, b.notes);
}

#[test]
fn results_survive_revalidation() {
    // Whatever the chain returns is a fixed point of the validator.
    let floors = Floors::default();
    let cases = [
        Problem::new(at_floors(&floors), 2_000_000, floors, 0, STEP).unwrap(),
        Problem::new(at_floors(&floors), 3_000_000, floors, 500_000, STEP).unwrap(),
        Problem::new(
            Allocation::from_fn(|_| 400_000),
            2_000_000,
            floors,
            300_000,
            STEP,
        )
        .unwrap(),
    ];
    for pb in cases {
        let result = solve(&pb);
        let state = result.state.unwrap();
        let again = repair(&state, &pb.floors, pb.income);
        assert_eq!(again.state, state);
        assert!(again.notes.is_empty());
    }
}

//! Stable plain-text rendering of a solve result.

use std::fmt::Write;

use anggaran::problem::Problem;
use anggaran::solve::SolveResult;

/// Renders the result as the CLI prints it. The format is stable and fully
/// deterministic so instance tests can compare it verbatim.
pub fn render(pb: &Problem, result: &SolveResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "method: {}", result.method);
    let _ = writeln!(out, "status: {}", result.status);
    for attempt in &result.trace {
        let _ = writeln!(out, "trace: {} {}", attempt.method, attempt.status);
    }
    for note in &result.notes {
        let _ = writeln!(out, "note: {note}");
    }
    match result.state {
        Some(state) => {
            for (cat, amount) in state.iter() {
                let _ = writeln!(out, "{cat} {amount}");
            }
            let _ = writeln!(out, "total {} of {}", state.total(), pb.income);
        }
        None => {
            let _ = writeln!(out, "no allocation; ask the advisor");
        }
    }
    out
}

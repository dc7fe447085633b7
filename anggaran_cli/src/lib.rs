//! Command-line frontend for the anggaran budget solver.
//!
//! Reads a line-oriented problem file, runs the solver chain and prints the
//! final allocation together with the attempt trace.

pub mod cli;
pub mod output;
pub mod parser;

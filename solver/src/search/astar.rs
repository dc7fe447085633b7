//! Best-first exploration of the move neighborhood.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use hashbrown::HashSet;

use crate::budget::{Allocation, Money};
use crate::problem::Problem;
use crate::score::{Scorer, Weights};
use crate::search::neighborhood::neighbors;
use crate::search::{out_of_time, Attempt, Engine, Method, Status};

/// A* over the integer allocation lattice, with the penalty as both heuristic
/// and score: each move has unit cost, so the engine returns the best node seen
/// rather than a proven shortest path.
pub struct Astar {
    max_iter: u64,
    deadline: Option<Instant>,
}

impl Astar {
    pub fn new(max_iter: u64) -> Astar {
        Astar {
            max_iter,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Option<Instant>) -> Astar {
        self.deadline = deadline;
        self
    }
}

/// Frontier node. Ordered so the lowest penalty pops first; the insertion
/// counter breaks ties deterministically and keeps the state itself out of the
/// comparison.
struct Node {
    penalty: Money,
    counter: u64,
    state: Allocation,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.penalty == other.penalty && self.counter == other.counter
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and we pop the smallest key.
        other
            .penalty
            .cmp(&self.penalty)
            .then_with(|| other.counter.cmp(&self.counter))
    }
}

impl Engine for Astar {
    fn method(&self) -> Method {
        Method::Astar
    }

    fn run(&mut self, pb: &Problem) -> Attempt {
        let scorer = Scorer::new(pb, Weights::SEARCH);

        let mut counter = 0;
        let mut open = BinaryHeap::new();
        let mut closed: HashSet<Allocation> = HashSet::new();

        let mut best = pb.start;
        let mut best_penalty = scorer.penalty(&best);
        open.push(Node {
            penalty: best_penalty,
            counter,
            state: pb.start,
        });

        let mut iterations = 0;
        while iterations < self.max_iter && !out_of_time(self.deadline) {
            let Some(node) = open.pop() else { break };
            iterations += 1;

            if node.penalty < best_penalty {
                best = node.state;
                best_penalty = node.penalty;
            }
            if node.penalty == 0 {
                tracing::debug!(iterations, "search reached a zero-penalty state");
                return Attempt {
                    method: Method::Astar,
                    status: Status::Success,
                    state: Some(node.state),
                    iterations,
                };
            }

            if !closed.insert(node.state) {
                continue;
            }
            for nb in neighbors(&node.state, pb.step, &pb.floors, pb.income) {
                counter += 1;
                open.push(Node {
                    penalty: scorer.penalty(&nb),
                    counter,
                    state: nb,
                });
            }
        }

        let status = if best_penalty == 0 { Status::Success } else { Status::Partial };
        tracing::debug!(iterations, penalty = best_penalty, "search exhausted");
        Attempt {
            method: Method::Astar,
            status,
            state: Some(best),
            iterations,
        }
    }
}

//! Conflict counting for queen placements.
//!
//! A board is scored by looking at every pair of columns once. Two queens
//! attack each other when they share a row or sit on a common diagonal.
//! Columns are distinct by construction, so column attacks never occur.

use crate::board::{Fitness, Gene};
use serde::Serialize;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
pub enum ConflictKind {
    Row,
    Diagonal,
}

/// One attacking pair, columns ordered `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub first: usize,
    pub second: usize,
    pub kind: ConflictKind,
}

#[inline(always)]
fn attack(c1: usize, r1: Gene, c2: usize, r2: Gene) -> Option<ConflictKind> {
    if r1 == r2 {
        Some(ConflictKind::Row)
    } else if r1.abs_diff(r2) == c1.abs_diff(c2) {
        Some(ConflictKind::Diagonal)
    } else {
        None
    }
}

/// Total number of attacking pairs on the board.
pub fn evaluate(genes: &[Gene]) -> Fitness {
    let mut total: Fitness = 0;
    for (c1, &r1) in genes.iter().enumerate() {
        for (offset, &r2) in genes[c1 + 1..].iter().enumerate() {
            if attack(c1, r1, c1 + 1 + offset, r2).is_some() {
                total += 1;
            }
        }
    }
    total
}

/// Upper bound of [`evaluate`] for an `n`-queen board.
pub fn max_conflicts(n: usize) -> Fitness {
    (n * n.saturating_sub(1) / 2) as Fitness
}

/// Lists every attacking pair. Always agrees with [`evaluate`] in length.
pub fn conflicts(genes: &[Gene]) -> Vec<Conflict> {
    let mut out = Vec::new();
    for (c1, &r1) in genes.iter().enumerate() {
        for (offset, &r2) in genes[c1 + 1..].iter().enumerate() {
            let c2 = c1 + 1 + offset;
            if let Some(kind) = attack(c1, r1, c2, r2) {
                out.push(Conflict {
                    first: c1,
                    second: c2,
                    kind,
                });
            }
        }
    }
    out
}

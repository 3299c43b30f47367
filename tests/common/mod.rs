#![allow(dead_code)]

use queenforge::board::ScoredChromosome;
use queenforge::optimizer::Population;
use std::process::{Command, Output};

pub fn pool(boards: &[&[usize]]) -> Population {
    Population::from_members(
        boards
            .iter()
            .map(|b| ScoredChromosome::new(b.to_vec()))
            .collect(),
    )
}

/// Brute-force attack check used as an oracle for the fitness function.
pub fn attacks(genes: &[usize]) -> bool {
    for a in 0..genes.len() {
        for b in 0..genes.len() {
            if a == b {
                continue;
            }
            let same_row = genes[a] == genes[b];
            let dr = genes[a] as i64 - genes[b] as i64;
            let dc = a as i64 - b as i64;
            if same_row || dr == dc || dr == -dc {
                return true;
            }
        }
    }
    false
}

pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_queenforge"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

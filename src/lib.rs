pub mod board;
pub mod config;
pub mod error;
pub mod fitness;
pub mod optimizer;
pub mod rng;
// cmd and reports belong to the binary (see main.rs).

//! Tournament Runner for Pente
//!
//! This crate provides infrastructure for:
//! - Running matches between difficulty tiers
//! - Tracking Elo ratings across tiers and settings
//! - Storing every game as a replayable record with its move log
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the tactical and minimax tiers
//! cargo run -p tournament -- match tactical minimax --games 20
//!
//! # Run a gauntlet (one tier vs the others)
//! cargo run -p tournament -- gauntlet minimax --config arena.toml
//! ```

mod config;
mod elo;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use elo::*;
pub use error::*;
pub use match_runner::*;
pub use results::*;

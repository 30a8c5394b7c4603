//! Shared utilities for integration tests

#![allow(dead_code)]

use batting_stats::{Club, Player};

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-10;

/// Install a test subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The two-player club used throughout the tests: 1000/2000 and 3000/5000
pub fn reference_club() -> Club {
    Club::new("Mariners").with_players([
        Player::new("Leadoff").with_batting(1000, 2000),
        Player::new("Cleanup").with_batting(3000, 5000),
    ])
}

/// Build a club from raw `(hits, at_bats)` lines
pub fn club_from_lines(lines: &[(u64, u64)]) -> Club {
    Club::new("Generated").with_players(
        lines
            .iter()
            .enumerate()
            .map(|(i, &(h, ab))| Player::new(format!("player-{i}")).with_batting(h, ab)),
    )
}

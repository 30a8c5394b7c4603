//! Baseball batting statistics
//!
//! Re-exports the workspace crates behind one dependency:
//!
//! - [`batting_core`]: error type, count pairs and the average calculator
//! - [`batting_roster`]: players, clubs and the shared [`AggregateStatistic`] capability
//!
//! # Example
//!
//! ```rust
//! use batting_stats::prelude::*;
//!
//! let club = Club::new("Mariners")
//!     .with_player(Player::new("A").with_batting(1000, 2000))
//!     .with_player(Player::new("B").with_batting(3000, 5000));
//!
//! let avg = club.batting_average().unwrap();
//! assert_eq!(AverageFormat::default().format(avg), ".571");
//! ```

pub use batting_core;
pub use batting_roster;

pub use batting_core::{compute_average, AverageFormat, BattingLine, Error, Result};
pub use batting_roster::{aggregate_statistic, AggregateStatistic, Club, Player, Role};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        aggregate_statistic, compute_average, AggregateStatistic, AverageFormat, BattingLine,
        Club, Error, Player, Result, Role,
    };
}

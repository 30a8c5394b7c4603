//! Players, clubs and their batting averages
//!
//! Two entity kinds share one capability, [`AggregateStatistic`]:
//!
//! - [`Player`]: holds its own hits and at-bats
//! - [`Club`]: holds an ordered roster and sums its players' counts
//!
//! Both delegate the division to [`batting_core::compute_average`].
//!
//! # Example
//!
//! ```rust
//! use batting_roster::{aggregate_statistic, Club, Player};
//!
//! let a = Player::new("A").with_batting(1000, 2000);
//! let b = Player::new("B").with_batting(3000, 5000);
//! assert_eq!(aggregate_statistic(&a).unwrap(), 0.5);
//!
//! let club = Club::new("Mariners").with_players([a, b]);
//! let avg = aggregate_statistic(&club).unwrap();
//! assert!((avg - 4000.0 / 7000.0).abs() < 1e-12);
//! ```

mod club;
mod player;
mod traits;

// Re-exports
pub use club::Club;
pub use player::{Player, Role};
pub use traits::AggregateStatistic;

use batting_core::Result;

/// Batting average of a player or a club
pub fn aggregate_statistic<S>(subject: &S) -> Result<f64>
where
    S: AggregateStatistic + ?Sized,
{
    subject.batting_average()
}

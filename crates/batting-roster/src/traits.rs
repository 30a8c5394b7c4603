//! The aggregate statistic capability

use batting_core::{BattingLine, Result};

mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::Player {}
    impl Sealed for crate::Club {}
}

/// Anything that has a batting average
///
/// Implemented by exactly two entity kinds. A [`Player`](crate::Player)
/// reports its own line; a [`Club`](crate::Club) sums its players' lines
/// first. Both end up in [`batting_core::compute_average`], so a club
/// without any recorded at-bats fails the same way a player without any
/// does.
pub trait AggregateStatistic: sealed::Sealed {
    /// The raw counts the statistic is derived from
    fn counts(&self) -> Result<BattingLine>;

    /// Batting average of this entity
    fn batting_average(&self) -> Result<f64>;
}

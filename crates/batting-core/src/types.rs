//! Types for batting counts

use crate::{compute_average, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pair of batting counts: hits over at-bats
///
/// This is the raw material of every batting average. It carries no identity
/// beyond its two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BattingLine {
    /// Number of hits
    pub hits: u64,
    /// Number of official at-bats
    pub at_bats: u64,
}

impl BattingLine {
    /// Create a new batting line
    pub fn new(hits: u64, at_bats: u64) -> Self {
        Self { hits, at_bats }
    }

    /// Batting average of this line
    ///
    /// Fails with [`Error::InvalidArgument`] when there are no at-bats.
    pub fn average(&self) -> Result<f64> {
        compute_average(self.hits, self.at_bats)
    }

    /// Combine two lines, failing instead of wrapping on overflow
    pub fn checked_add(self, other: Self) -> Result<Self> {
        let hits = self
            .hits
            .checked_add(other.hits)
            .ok_or_else(|| Error::count_overflow("total hits"))?;
        let at_bats = self
            .at_bats
            .checked_add(other.at_bats)
            .ok_or_else(|| Error::count_overflow("total at-bats"))?;

        Ok(Self { hits, at_bats })
    }

    /// Sum any number of lines
    ///
    /// An empty iterator yields `0/0`.
    pub fn total<I>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        lines
            .into_iter()
            .try_fold(Self::default(), |acc, line| acc.checked_add(line))
    }
}

impl From<(u64, u64)> for BattingLine {
    fn from((hits, at_bats): (u64, u64)) -> Self {
        Self::new(hits, at_bats)
    }
}

impl fmt::Display for BattingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-for-{}", self.hits, self.at_bats)
    }
}

//! Batting average calculator
//!
//! The batting average is the ratio of hits to at-bats. It is the only
//! arithmetic in the workspace; every entity-level statistic delegates here.

use crate::{Error, Result};
use num_traits::PrimInt;
use tracing::debug;

/// Compute the batting average `hits / at_bats`
///
/// Works for any primitive integer type. The result is plain floating-point
/// division with no rounding or clamping, so `compute_average(10, 50)` is
/// exactly `0.2`. `hits` is not checked against `at_bats`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `at_bats < 1`, including zero and
/// any negative value.
///
/// # Example
///
/// ```rust
/// use batting_core::compute_average;
///
/// assert_eq!(compute_average(10, 50).unwrap(), 0.2);
/// assert!(compute_average(3, 0).is_err());
/// ```
pub fn compute_average<T: PrimInt>(hits: T, at_bats: T) -> Result<f64> {
    if at_bats < T::one() {
        debug!("rejecting batting average with fewer than one at-bat");
        return Err(Error::no_at_bats());
    }

    let hits = hits
        .to_f64()
        .ok_or_else(|| Error::Computation("hits not representable as f64".to_string()))?;
    let at_bats = at_bats
        .to_f64()
        .ok_or_else(|| Error::Computation("at-bats not representable as f64".to_string()))?;

    Ok(hits / at_bats)
}

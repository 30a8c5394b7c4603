//! Core types for batting statistics
//!
//! This crate provides the pieces every other batting-stats crate builds on:
//! the unified [`Error`] type, the [`BattingLine`] count pair and the
//! [`compute_average`] calculator.
//!
//! # Example
//!
//! ```rust
//! use batting_core::{compute_average, AverageFormat, BattingLine};
//!
//! let line = BattingLine::new(4000, 7000);
//! let avg = line.average().unwrap();
//! assert_eq!(avg, compute_average(4000, 7000).unwrap());
//! assert_eq!(AverageFormat::default().format(avg), ".571");
//! ```

pub mod average;
pub mod error;
pub mod format;
pub mod types;

// Re-export core types
pub use average::compute_average;
pub use error::{Error, Result};
pub use format::AverageFormat;
pub use types::BattingLine;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

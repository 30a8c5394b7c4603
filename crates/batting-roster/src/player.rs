//! A single player

use crate::AggregateStatistic;
use batting_core::{compute_average, BattingLine, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a player appears in the lineup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Position player
    #[default]
    Batter,
    /// Pitcher
    Pitcher,
}

impl Role {
    /// Get the name of the role
    pub fn name(&self) -> &'static str {
        match self {
            Self::Batter => "batter",
            Self::Pitcher => "pitcher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A player with an optional batting line
///
/// An absent line means nothing has been recorded yet, which is not the same
/// as an `0-for-0` line: clubs skip absent lines when summing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    #[serde(default)]
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    batting: Option<BattingLine>,
    /// Earned run average
    #[serde(default, skip_serializing_if = "Option::is_none")]
    era: Option<f64>,
}

impl Player {
    /// Create a batter with no recorded line
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::Batter,
            batting: None,
            era: None,
        }
    }

    /// Create a pitcher with no recorded line
    pub fn pitcher(name: impl Into<String>) -> Self {
        Self::new(name).with_role(Role::Pitcher)
    }

    /// Set the role
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Record the batting line
    pub fn with_batting(mut self, hits: u64, at_bats: u64) -> Self {
        self.batting = Some(BattingLine::new(hits, at_bats));
        self
    }

    /// Record the earned run average
    pub fn with_era(mut self, era: f64) -> Self {
        self.era = Some(era);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_pitcher(&self) -> bool {
        self.role == Role::Pitcher
    }

    /// The recorded batting line, if any
    pub fn batting(&self) -> Option<BattingLine> {
        self.batting
    }

    pub fn era(&self) -> Option<f64> {
        self.era
    }
}

impl AggregateStatistic for Player {
    /// The player's own line, `0/0` when none is recorded
    fn counts(&self) -> Result<BattingLine> {
        Ok(self.batting.unwrap_or_default())
    }

    fn batting_average(&self) -> Result<f64> {
        let line = self.counts()?;
        compute_average(line.hits, line.at_bats)
    }
}

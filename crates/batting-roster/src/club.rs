//! A club of players
//!
//! A club holds no counts of its own. Its batting average is computed from
//! the summed hits and at-bats of every player with a recorded line, which
//! weights each player by their at-bats rather than averaging the averages.

use crate::{AggregateStatistic, Player};
use batting_core::{compute_average, BattingLine, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// An ordered roster of players
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Club {
    name: String,
    #[serde(default)]
    players: Vec<Player>,
}

impl Club {
    /// Create a club with an empty roster
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }

    /// Add a player to the end of the roster
    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    /// Add several players in order
    pub fn with_players<I>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = Player>,
    {
        self.players.extend(players);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Load a club from its JSON roster
    ///
    /// ```rust
    /// use batting_roster::{AggregateStatistic, Club};
    ///
    /// let club = Club::from_json(r#"{
    ///     "name": "Mariners",
    ///     "players": [
    ///         { "name": "A", "batting": { "hits": 1000, "at_bats": 2000 } },
    ///         { "name": "B", "role": "pitcher", "era": 3.1 }
    ///     ]
    /// }"#).unwrap();
    /// assert_eq!(club.batting_average().unwrap(), 0.5);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidInput(format!("malformed roster: {e}")))
    }

    /// Serialize the roster as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Other(e.into()))
    }
}

impl AggregateStatistic for Club {
    /// Sum of every recorded player line
    ///
    /// Players without a line are skipped. An empty roster sums to `0/0`.
    #[instrument(level = "debug", skip(self), fields(club = %self.name, players = self.players.len()))]
    fn counts(&self) -> Result<BattingLine> {
        let recorded = self.players.iter().filter_map(|player| {
            if player.batting().is_none() {
                trace!(player = player.name(), "no batting line recorded, excluded");
            }
            player.batting()
        });

        let totals = BattingLine::total(recorded)?;
        debug!(hits = totals.hits, at_bats = totals.at_bats, "aggregated club counts");
        Ok(totals)
    }

    fn batting_average(&self) -> Result<f64> {
        let totals = self.counts()?;
        compute_average(totals.hits, totals.at_bats)
    }
}

// This file is part of pool-league.
//
// pool-league is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// pool-league is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

use crate::side::Side;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ScoringRule {
    #[default]
    Racks,
    /// Whoever won more sets wins, racks only break a tie on sets.
    SetsThenRacks,
}

/// The raw counters of a match as they are entered.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Score {
    #[serde(default)]
    pub home_racks: u32,
    #[serde(default)]
    pub away_racks: u32,
    #[serde(default)]
    pub set_home_wins: u32,
    #[serde(default)]
    pub set_away_wins: u32,
    #[serde(default)]
    pub home_forfeits: u32,
    #[serde(default)]
    pub away_forfeits: u32,
}

impl Score {
    #[must_use]
    pub fn new(home_racks: u32, away_racks: u32) -> Self {
        Self {
            home_racks,
            away_racks,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sets(mut self, set_home_wins: u32, set_away_wins: u32) -> Self {
        self.set_home_wins = set_home_wins;
        self.set_away_wins = set_away_wins;
        self
    }

    #[must_use]
    pub fn racks(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_racks,
            Side::Away => self.away_racks,
        }
    }

    #[must_use]
    pub fn set_wins(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.set_home_wins,
            Side::Away => self.set_away_wins,
        }
    }

    #[must_use]
    pub fn forfeits(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_forfeits,
            Side::Away => self.away_forfeits,
        }
    }

    /// A side whose every rack came from forfeits still counts as a result.
    #[must_use]
    pub fn has_results(&self) -> bool {
        let forfeited = |side: Side| {
            let racks = self.racks(side);
            racks > 0 && racks == self.forfeits(side)
        };

        forfeited(Side::Home)
            || forfeited(Side::Away)
            || self.home_racks > 0
            || self.away_racks > 0
    }

    #[must_use]
    pub fn is_forfeit(&self) -> bool {
        (self.home_racks == 0 && self.away_racks > 0)
            || (self.away_racks == 0 && self.home_racks > 0)
    }

    /// `None` while the match is level under the rule.
    #[must_use]
    pub fn winner(&self, rule: ScoringRule) -> Option<Side> {
        let sets = self.set_home_wins.cmp(&self.set_away_wins);
        let racks = self.home_racks.cmp(&self.away_racks);

        let ordering = match rule {
            ScoringRule::SetsThenRacks if sets != Ordering::Equal => sets,
            ScoringRule::SetsThenRacks | ScoringRule::Racks => racks,
        };

        match ordering {
            Ordering::Greater => Some(Side::Home),
            Ordering::Less => Some(Side::Away),
            Ordering::Equal => None,
        }
    }

    #[must_use]
    pub fn is_winner(&self, side: Side, rule: ScoringRule) -> bool {
        self.winner(rule) == Some(side)
    }

    /// The side reported first in a result: the one with more racks, the
    /// away side when racks are level. Sets don't count here, even on
    /// Tuesdays.
    fn rack_leader(&self) -> Option<Side> {
        if !self.has_results() {
            return None;
        }

        if self.home_racks > self.away_racks {
            Some(Side::Home)
        } else {
            Some(Side::Away)
        }
    }

    #[must_use]
    pub fn winner_racks(&self) -> Option<u32> {
        self.rack_leader().map(|side| self.racks(side))
    }

    #[must_use]
    pub fn loser_racks(&self) -> Option<u32> {
        self.rack_leader().map(|side| self.racks(side.opposite()))
    }

    #[must_use]
    pub fn winner_set_wins(&self) -> Option<u32> {
        self.rack_leader().map(|side| self.set_wins(side))
    }

    #[must_use]
    pub fn winner_set_loses(&self) -> Option<u32> {
        self.rack_leader().map(|side| self.set_wins(side.opposite()))
    }

    #[must_use]
    pub fn loser_set_wins(&self) -> Option<u32> {
        self.winner_set_loses()
    }

    #[must_use]
    pub fn loser_set_loses(&self) -> Option<u32> {
        self.winner_set_wins()
    }
}

/// Home racks first: `7-5`.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home_racks, self.away_racks)
    }
}

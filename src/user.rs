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

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use crate::{handicap::Handicap, season::Season};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub handicaps: Vec<HandicapSeason>,
}

impl User {
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            handicaps: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_handicap(mut self, season: &Season, handicap: Handicap) -> Self {
        self.set_handicap(season, handicap);
        self
    }

    #[must_use]
    pub fn handicap(&self, season: &Season) -> Option<Handicap> {
        self.handicaps
            .iter()
            .find(|handicap_season| handicap_season.season_id == season.id)
            .map(|handicap_season| handicap_season.handicap)
    }

    /// A user has at most one handicap per season.
    pub fn set_handicap(&mut self, season: &Season, handicap: Handicap) {
        if let Some(handicap_season) = self
            .handicaps
            .iter_mut()
            .find(|handicap_season| handicap_season.season_id == season.id)
        {
            handicap_season.handicap = handicap;
        } else {
            self.handicaps.push(HandicapSeason {
                season_id: season.id.clone(),
                handicap,
            });
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct HandicapSeason {
    pub season_id: String,
    pub handicap: Handicap,
}

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

use std::{fs, io::ErrorKind, path::Path};

use log::{debug, info};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};

use crate::team_match::TeamMatch;

pub const LEAGUE_FILE: &str = "league.ron";

/// The matches of a league as the persistence layer hands them over, with
/// teams, seasons and users already resolved.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct League {
    #[serde(default)]
    pub matches: Vec<TeamMatch>,
}

impl League {
    /// # Errors
    ///
    /// If the string isn't a RON league.
    pub fn from_ron(string: &str) -> anyhow::Result<Self> {
        ron::from_str(string).map_err(|err| anyhow::Error::msg(format!("RON: {err}")))
    }

    /// A missing file is an empty league.
    ///
    /// # Errors
    ///
    /// If the file can't be read or isn't a RON league.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        match fs::read_to_string(path) {
            Ok(string) => {
                let league = Self::from_ron(&string)
                    .map_err(|err| anyhow::Error::msg(format!("{}: {err}", path.display())))?;

                debug!("loaded {} matches from {}", league.matches.len(), path.display());
                Ok(league)
            }
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    info!("{} not found, starting with an empty league", path.display());
                    Ok(Self::default())
                }
                _ => Err(anyhow::Error::msg(format!("{}: {err}", path.display()))),
            },
        }
    }

    /// # Errors
    ///
    /// If the league can't be serialized or the file can't be written.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let string = ron::ser::to_string_pretty(self, PrettyConfig::default())?;
        fs::write(path, string)?;
        Ok(())
    }

    /// Earliest first, matches without a date last.
    #[must_use]
    pub fn schedule(&self) -> Vec<&TeamMatch> {
        let mut matches: Vec<_> = self.matches.iter().collect();
        matches.sort_by(|match_1, match_2| TeamMatch::cmp_by_date(match_1, match_2));
        matches
    }

    pub fn team_matches<'a>(&'a self, team_id: &'a str) -> impl Iterator<Item = &'a TeamMatch> {
        self.matches
            .iter()
            .filter(move |team_match| team_match.home.id == team_id || team_match.away.id == team_id)
    }

    /// The matches of one team, earliest first.
    #[must_use]
    pub fn team_schedule<'a>(&'a self, team_id: &'a str) -> Vec<&'a TeamMatch> {
        let mut matches: Vec<_> = self.team_matches(team_id).collect();
        matches.sort_by(|match_1, match_2| TeamMatch::cmp_by_date(match_1, match_2));
        matches
    }

    /// The second and later copies of a match that was entered twice.
    #[must_use]
    pub fn duplicates(&self) -> Vec<&TeamMatch> {
        self.matches
            .iter()
            .enumerate()
            .filter(|(i, team_match)| {
                self.matches[..*i]
                    .iter()
                    .any(|earlier| TeamMatch::is_same_match(earlier, team_match))
            })
            .map(|(_, team_match)| team_match)
            .collect()
    }
}

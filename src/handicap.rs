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

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A player's skill level, weakest first.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum Handicap {
    DMinus,
    #[default]
    D,
    DPlus,
    C,
    CPlus,
    B,
    BPlus,
    A,
    APlus,
    Open,
    OpenPlus,
    Pro,
}

impl Handicap {
    #[must_use]
    pub fn rank(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn gap(self, other: Self) -> u8 {
        self.rank().abs_diff(other.rank())
    }
}

impl fmt::Display for Handicap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DMinus => write!(f, "D-"),
            Self::D => write!(f, "D"),
            Self::DPlus => write!(f, "D+"),
            Self::C => write!(f, "C"),
            Self::CPlus => write!(f, "C+"),
            Self::B => write!(f, "B"),
            Self::BPlus => write!(f, "B+"),
            Self::A => write!(f, "A"),
            Self::APlus => write!(f, "A+"),
            Self::Open => write!(f, "OPEN"),
            Self::OpenPlus => write!(f, "OPEN+"),
            Self::Pro => write!(f, "PRO"),
        }
    }
}

impl FromStr for Handicap {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        match string.trim().to_uppercase().as_str() {
            "D-" | "DMINUS" => Ok(Self::DMinus),
            "D" => Ok(Self::D),
            "D+" | "DPLUS" => Ok(Self::DPlus),
            "C" => Ok(Self::C),
            "C+" | "CPLUS" => Ok(Self::CPlus),
            "B" => Ok(Self::B),
            "B+" | "BPLUS" => Ok(Self::BPlus),
            "A" => Ok(Self::A),
            "A+" | "APLUS" => Ok(Self::APlus),
            "OPEN" => Ok(Self::Open),
            "OPEN+" | "OPENPLUS" => Ok(Self::OpenPlus),
            "PRO" => Ok(Self::Pro),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to a Handicap!"
            ))),
        }
    }
}

/// Turns two handicaps into the race a challenge match is played to.
pub trait RaceTable {
    fn race(&self, home: Handicap, away: Handicap) -> String;
}

/// The better player races to [`StandardRaces::RACE_TO`], the other one
/// gets a rack off per handicap level between them, down to
/// [`StandardRaces::MINIMUM_RACE`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRaces;

impl StandardRaces {
    pub const RACE_TO: u8 = 7;
    pub const MINIMUM_RACE: u8 = 3;

    #[must_use]
    pub fn races(home: Handicap, away: Handicap) -> (u8, u8) {
        let shorter = Self::RACE_TO
            .saturating_sub(home.gap(away))
            .max(Self::MINIMUM_RACE);

        if home >= away {
            (Self::RACE_TO, shorter)
        } else {
            (shorter, Self::RACE_TO)
        }
    }
}

impl RaceTable for StandardRaces {
    fn race(&self, home: Handicap, away: Handicap) -> String {
        let (home, away) = Self::races(home, away);
        format!("{home}/{away}")
    }
}

impl<F> RaceTable for F
where
    F: Fn(Handicap, Handicap) -> String,
{
    fn race(&self, home: Handicap, away: Handicap) -> String {
        self(home, away)
    }
}

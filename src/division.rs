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

use crate::score::ScoringRule;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Division {
    NineBallChallenge,
    NineBallTuesdays,
    MixedNine,
    MixedEight,
    MixedMondaysMixed,
    EightBallThursdays,
    EightBallWednesdays,
}

impl Division {
    #[must_use]
    pub fn game_type(self) -> GameType {
        match self {
            Self::NineBallChallenge | Self::NineBallTuesdays | Self::MixedNine => GameType::Nine,
            Self::MixedEight
            | Self::MixedMondaysMixed
            | Self::EightBallThursdays
            | Self::EightBallWednesdays => GameType::Eight,
        }
    }

    /// Tuesday nine-ball is decided on sets first.
    #[must_use]
    pub fn scoring_rule(self) -> ScoringRule {
        if self == Self::NineBallTuesdays {
            ScoringRule::SetsThenRacks
        } else {
            ScoringRule::Racks
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NineBallChallenge => write!(f, "nine_ball_challenge"),
            Self::NineBallTuesdays => write!(f, "nine_ball_tuesdays"),
            Self::MixedNine => write!(f, "mixed_nine"),
            Self::MixedEight => write!(f, "mixed_eight"),
            Self::MixedMondaysMixed => write!(f, "mixed_mondays_mixed"),
            Self::EightBallThursdays => write!(f, "eight_ball_thursdays"),
            Self::EightBallWednesdays => write!(f, "eight_ball_wednesdays"),
        }
    }
}

impl FromStr for Division {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> anyhow::Result<Self> {
        match string.to_lowercase().as_str() {
            "nine_ball_challenge" => Ok(Self::NineBallChallenge),
            "nine_ball_tuesdays" => Ok(Self::NineBallTuesdays),
            "mixed_nine" => Ok(Self::MixedNine),
            "mixed_eight" => Ok(Self::MixedEight),
            "mixed_mondays_mixed" => Ok(Self::MixedMondaysMixed),
            "eight_ball_thursdays" => Ok(Self::EightBallThursdays),
            "eight_ball_wednesdays" => Ok(Self::EightBallWednesdays),
            _ => Err(anyhow::Error::msg(format!(
                "Error trying to convert '{string}' to a Division!"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum GameType {
    Eight,
    Nine,
    #[default]
    Unknown,
}

impl From<Option<Division>> for GameType {
    fn from(division: Option<Division>) -> Self {
        division.map_or(Self::Unknown, Division::game_type)
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eight => write!(f, "8"),
            Self::Nine => write!(f, "9"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

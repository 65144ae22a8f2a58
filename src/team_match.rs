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

use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    availability::{Availability, NotAvailable},
    division::{Division, GameType},
    handicap::RaceTable,
    schedule,
    score::{Score, ScoringRule},
    season::Season,
    side::Side,
    status::Status,
    team::Team,
    user::User,
};

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("match: team {0} isn't playing in this match")]
    NotAParticipant(String),
    #[error("match: '{input}' isn't a date and time: {source}")]
    InvalidDate {
        input: String,
        source: chrono::ParseError,
    },
    #[error("match: '{0}' isn't a date and time: it has whitespace in it")]
    DateWithWhitespace(String),
    #[error("match: the match has no date")]
    NoDate,
}

/// What the rules of a match depend on, resolved from the home team's season.
#[derive(Clone, Copy, Debug)]
pub struct MatchContext<'a> {
    pub season: &'a Season,
    pub division: Option<Division>,
}

impl MatchContext<'_> {
    #[must_use]
    pub fn scoring_rule(&self) -> ScoringRule {
        self.division
            .map_or(ScoringRule::Racks, Division::scoring_rule)
    }

    #[must_use]
    pub fn game_type(&self) -> GameType {
        GameType::from(self.division)
    }

    #[must_use]
    pub fn is_challenge(&self) -> bool {
        self.season.challenge
    }
}

/// One scheduled match between two teams.
///
/// Every derived value is computed from the raw fields on each call. The
/// engine never synchronizes: a caller sharing a match between requests
/// has to serialize its writes.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TeamMatch {
    #[serde(default)]
    pub id: String,
    pub home: Team,
    pub away: Team,
    #[serde(default)]
    pub match_date: Option<NaiveDateTime>,
    /// Overrides the division of the season.
    #[serde(default)]
    pub division: Option<Division>,
    #[serde(default)]
    pub score: Score,
    #[serde(default)]
    pub forfeits: u32,
    #[serde(default)]
    pub handicap_racks: u32,
    #[serde(default)]
    pub match_number: u32,
    #[serde(default)]
    pub has_player_results: bool,
    #[serde(default)]
    pub status: Option<Status>,
    /// Only used outside of challenge seasons.
    #[serde(default)]
    pub race: String,
    /// Whose point of view [`TeamMatch::opponent_team`] takes.
    #[serde(default)]
    pub reference_user: Option<User>,
    #[serde(default)]
    pub home_not_available: NotAvailable,
    #[serde(default)]
    pub away_not_available: NotAvailable,
    /// Form input, see [`schedule::resolve_match_date`].
    #[serde(skip)]
    pub date: Option<String>,
    #[serde(skip)]
    pub time: Option<String>,
}

impl TeamMatch {
    #[must_use]
    pub fn new(home: Team, away: Team, match_date: Option<NaiveDateTime>) -> Self {
        Self {
            home,
            away,
            match_date,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn season(&self) -> &Season {
        &self.home.season
    }

    #[must_use]
    pub fn division(&self) -> Option<Division> {
        self.division.or(self.season().division)
    }

    #[must_use]
    pub fn context(&self) -> MatchContext<'_> {
        MatchContext {
            season: self.season(),
            division: self.division(),
        }
    }

    #[must_use]
    pub fn game_type(&self) -> GameType {
        self.context().game_type()
    }

    /// Looks at the season's division only, never at the match override.
    #[must_use]
    pub fn is_nine(&self) -> bool {
        self.season().is_nine()
    }

    #[must_use]
    pub fn is_challenge(&self) -> bool {
        self.context().is_challenge()
    }

    #[must_use]
    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    #[must_use]
    pub fn side(&self, team: &Team) -> Option<Side> {
        if *team == self.home {
            Some(Side::Home)
        } else if *team == self.away {
            Some(Side::Away)
        } else {
            None
        }
    }

    fn participant(&self, team: &Team) -> Result<Side, MatchError> {
        self.side(team).ok_or_else(|| {
            debug!("{self}: {team} isn't playing in this match");
            MatchError::NotAParticipant(team.id.clone())
        })
    }

    #[must_use]
    pub fn has_team(&self, team: &Team) -> bool {
        self.side(team).is_some()
    }

    #[must_use]
    pub fn has_both_teams(&self, team_1: &Team, team_2: &Team) -> bool {
        self.has_team(team_1) && self.has_team(team_2)
    }

    #[must_use]
    pub fn has_user(&self, user: &User) -> bool {
        self.home.has_member(user) || self.away.has_member(user)
    }

    #[must_use]
    pub fn has_results(&self) -> bool {
        self.score.has_results()
    }

    #[must_use]
    pub fn is_forfeit(&self) -> bool {
        self.score.is_forfeit()
    }

    /// `None` until there are results, and on a tie.
    #[must_use]
    pub fn winner_side(&self) -> Option<Side> {
        if self.has_results() {
            self.score.winner(self.context().scoring_rule())
        } else {
            None
        }
    }

    /// # Errors
    ///
    /// If the team isn't the home or the away team.
    pub fn is_winner(&self, team: &Team) -> Result<bool, MatchError> {
        let side = self.participant(team)?;
        Ok(self.winner_side() == Some(side))
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Team> {
        self.winner_side().map(|side| self.team(side))
    }

    #[must_use]
    pub fn loser(&self) -> Option<&Team> {
        self.winner_side().map(|side| self.team(side.opposite()))
    }

    /// # Errors
    ///
    /// If the team isn't the home or the away team.
    pub fn racks(&self, team: &Team) -> Result<u32, MatchError> {
        Ok(self.score.racks(self.participant(team)?))
    }

    /// # Errors
    ///
    /// If the team isn't the home or the away team.
    pub fn opponent_racks(&self, team: &Team) -> Result<u32, MatchError> {
        Ok(self.score.racks(self.participant(team)?.opposite()))
    }

    /// # Errors
    ///
    /// If the team isn't the home or the away team.
    pub fn set_wins(&self, team: &Team) -> Result<u32, MatchError> {
        Ok(self.score.set_wins(self.participant(team)?))
    }

    /// # Errors
    ///
    /// If the team isn't the home or the away team.
    pub fn set_loses(&self, team: &Team) -> Result<u32, MatchError> {
        Ok(self.score.set_wins(self.participant(team)?.opposite()))
    }

    #[must_use]
    pub fn set_home_lost(&self) -> u32 {
        self.score.set_away_wins
    }

    #[must_use]
    pub fn set_away_lost(&self) -> u32 {
        self.score.set_home_wins
    }

    #[must_use]
    pub fn winner_racks(&self) -> Option<u32> {
        self.score.winner_racks()
    }

    #[must_use]
    pub fn loser_racks(&self) -> Option<u32> {
        self.score.loser_racks()
    }

    #[must_use]
    pub fn winner_set_wins(&self) -> Option<u32> {
        self.score.winner_set_wins()
    }

    #[must_use]
    pub fn winner_set_loses(&self) -> Option<u32> {
        self.score.winner_set_loses()
    }

    #[must_use]
    pub fn loser_set_wins(&self) -> Option<u32> {
        self.score.loser_set_wins()
    }

    #[must_use]
    pub fn loser_set_loses(&self) -> Option<u32> {
        self.score.loser_set_loses()
    }

    /// Home racks first, results or not.
    #[must_use]
    pub fn score(&self) -> String {
        self.score.to_string()
    }

    /// Winner first, only for challenge matches that have results.
    #[must_use]
    pub fn display_score(&self) -> Option<String> {
        if !self.is_challenge() {
            return None;
        }

        Some(format!("{}-{}", self.winner_racks()?, self.loser_racks()?))
    }

    #[must_use]
    pub fn challenger(&self) -> Option<&User> {
        if self.is_challenge() {
            self.home.challenge_user.as_ref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn opponent(&self) -> Option<&User> {
        if self.is_challenge() {
            self.away.challenge_user.as_ref()
        } else {
            None
        }
    }

    /// Challenge seasons race by handicap, everything else uses the race that
    /// was set by hand. Missing handicaps give an empty race.
    #[must_use]
    pub fn race<T: RaceTable + ?Sized>(&self, races: &T) -> String {
        if self.is_challenge() {
            let season = self.season();
            let handicaps = self
                .challenger()
                .and_then(|user| user.handicap(season))
                .zip(self.opponent().and_then(|user| user.handicap(season)));

            return match handicaps {
                Some((home, away)) => races.race(home, away),
                None => String::new(),
            };
        }

        self.race.clone()
    }

    #[must_use]
    pub fn not_available(&self, side: Side) -> &NotAvailable {
        match side {
            Side::Home => &self.home_not_available,
            Side::Away => &self.away_not_available,
        }
    }

    #[must_use]
    pub fn availability(&self, side: Side) -> Availability<'_> {
        Availability::partition(&self.team(side).members, self.not_available(side))
    }

    #[must_use]
    pub fn home_available(&self) -> Vec<&User> {
        self.availability(Side::Home).available
    }

    #[must_use]
    pub fn away_available(&self) -> Vec<&User> {
        self.availability(Side::Away).available
    }

    #[must_use]
    pub fn home_unavailable(&self) -> Vec<&User> {
        self.availability(Side::Home).unavailable
    }

    #[must_use]
    pub fn away_unavailable(&self) -> Vec<&User> {
        self.availability(Side::Away).unavailable
    }

    pub fn add_home_not_available(&mut self, id: &str) {
        self.home_not_available.add(id);
    }

    pub fn remove_home_not_available(&mut self, id: &str) {
        self.home_not_available.remove(id);
    }

    pub fn add_away_not_available(&mut self, id: &str) {
        self.away_not_available.add(id);
    }

    pub fn remove_away_not_available(&mut self, id: &str) {
        self.away_not_available.remove(id);
    }

    pub fn set_home_not_available(&mut self, not_available: NotAvailable) {
        self.home_not_available = not_available;
    }

    pub fn set_away_not_available(&mut self, not_available: NotAvailable) {
        self.away_not_available = not_available;
    }

    /// The team the reference user is not on.
    #[must_use]
    pub fn opponent_team(&self) -> Option<&Team> {
        let user = self.reference_user.as_ref()?;

        if self.home.has_member(user) {
            Some(&self.away)
        } else {
            Some(&self.home)
        }
    }

    /// # Errors
    ///
    /// If there is no structured date and the form date and time don't parse.
    pub fn match_date(&self) -> Result<Option<NaiveDateTime>, MatchError> {
        schedule::resolve_match_date(self.match_date, self.date.as_deref(), self.time.as_deref())
    }

    /// # Errors
    ///
    /// If there is no structured date and the form date and time don't parse.
    pub fn default_match_date(&self, now: NaiveDateTime) -> Result<NaiveDateTime, MatchError> {
        Ok(schedule::default_match_date(self.match_date()?, now))
    }

    /// # Errors
    ///
    /// If there is no structured date and the form date and time don't parse.
    pub fn status_at(&self, now: NaiveDateTime) -> Result<Option<Status>, MatchError> {
        Ok(schedule::derive_status(
            self.status,
            self.match_date()?,
            self.has_results(),
            now,
        ))
    }

    /// # Errors
    ///
    /// If the match has no date or the form date and time don't parse.
    pub fn time(&self) -> Result<String, MatchError> {
        let date = self.match_date()?.ok_or(MatchError::NoDate)?;
        Ok(schedule::display_time(&date))
    }

    /// # Errors
    ///
    /// If the match has no date or the form date and time don't parse.
    pub fn date_string(&self) -> Result<String, MatchError> {
        let date = self.match_date()?.ok_or(MatchError::NoDate)?;
        Ok(schedule::display_date(&date))
    }

    /// Same date and time, same two teams on either side.
    #[must_use]
    pub fn is_same_match(match_1: &TeamMatch, match_2: &TeamMatch) -> bool {
        let (Ok(Some(date_1)), Ok(Some(date_2))) = (match_1.match_date(), match_2.match_date())
        else {
            return false;
        };

        if date_1 != date_2 {
            return false;
        }

        (match_1.home == match_2.home && match_1.away == match_2.away)
            || (match_1.home == match_2.away && match_1.away == match_2.home)
    }

    /// Earliest first, matches without a date last.
    #[must_use]
    pub fn cmp_by_date(match_1: &TeamMatch, match_2: &TeamMatch) -> Ordering {
        let date_1 = match_1.match_date().ok().flatten();
        let date_2 = match_2.match_date().ok().flatten();

        match (date_1, date_2) {
            (Some(date_1), Some(date_2)) => date_1.cmp(&date_2),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for TeamMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{id={}}}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::handicap::{Handicap, StandardRaces};

    use super::*;

    fn date_time(day: u32, hour: u32) -> anyhow::Result<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .ok_or_else(|| anyhow::Error::msg("invalid test date"))
    }

    fn teams(season: &Season) -> (Team, Team) {
        let home = Team::new("t1", "Rack Attack", season.clone()).with_members(vec![
            User::new("u1", "Earl"),
            User::new("u2", "Efren"),
            User::new("u3", "Allison"),
        ]);
        let away = Team::new("t2", "Scratch", season.clone()).with_members(vec![
            User::new("u4", "Shane"),
            User::new("u5", "Jayson"),
        ]);

        (home, away)
    }

    fn ids(users: Vec<&User>) -> Vec<String> {
        users.into_iter().map(|user| user.id.clone()).collect()
    }

    fn new_match(division: Option<Division>) -> anyhow::Result<TeamMatch> {
        let (home, away) = teams(&Season::new("s1", division));
        Ok(TeamMatch::new(home, away, Some(date_time(4, 19)?)))
    }

    #[test]
    fn has_team_is_symmetric() -> anyhow::Result<()> {
        let team_match = new_match(Some(Division::MixedEight))?;
        let third = Team::new("t3", "Bankers", Season::new("s1", None));

        assert!(team_match.has_team(&team_match.home));
        assert!(team_match.has_team(&team_match.away));
        assert!(!team_match.has_team(&third));
        assert!(team_match.has_both_teams(&team_match.away, &team_match.home));
        assert!(!team_match.has_both_teams(&team_match.home, &third));

        Ok(())
    }

    #[test]
    fn fresh_match_has_no_results() -> anyhow::Result<()> {
        let team_match = new_match(Some(Division::MixedEight))?;

        assert!(!team_match.has_results());
        assert_eq!(team_match.winner(), None);
        assert_eq!(team_match.loser(), None);
        assert_eq!(team_match.winner_racks(), None);
        assert_eq!(team_match.loser_set_wins(), None);
        assert!(!team_match.is_winner(&team_match.home)?);
        assert!(!team_match.is_winner(&team_match.away)?);
        assert_eq!(team_match.score(), "0-0");

        Ok(())
    }

    #[test]
    fn racks_decide_outside_tuesdays() -> anyhow::Result<()> {
        let mut team_match = new_match(Some(Division::EightBallThursdays))?;
        team_match.score = Score::new(7, 5).with_sets(0, 3);

        assert!(team_match.is_winner(&team_match.home)?);
        assert!(!team_match.is_winner(&team_match.away)?);
        assert_eq!(team_match.winner(), Some(&team_match.home));
        assert_eq!(team_match.loser(), Some(&team_match.away));
        assert_eq!(team_match.winner_racks(), Some(7));
        assert_eq!(team_match.loser_racks(), Some(5));

        Ok(())
    }

    #[test]
    fn sets_decide_on_tuesdays() -> anyhow::Result<()> {
        let mut team_match = new_match(Some(Division::NineBallTuesdays))?;
        team_match.score = Score::new(5, 7).with_sets(3, 1);

        assert!(team_match.is_winner(&team_match.home)?);
        assert!(!team_match.is_winner(&team_match.away)?);
        assert_eq!(team_match.winner(), Some(&team_match.home));
        assert_eq!(team_match.winner_racks(), Some(7));
        assert_eq!(team_match.loser_racks(), Some(5));
        assert_eq!(team_match.winner_set_wins(), Some(1));
        assert_eq!(team_match.winner_set_loses(), Some(3));

        team_match.score = team_match.score.with_sets(2, 2);
        assert!(team_match.is_winner(&team_match.away)?);

        Ok(())
    }

    #[test]
    fn division_override_changes_the_rule() -> anyhow::Result<()> {
        let mut team_match = new_match(Some(Division::MixedNine))?;
        team_match.score = Score::new(5, 7).with_sets(3, 1);
        assert_eq!(team_match.winner_side(), Some(Side::Away));

        team_match.division = Some(Division::NineBallTuesdays);
        assert_eq!(team_match.winner_side(), Some(Side::Home));
        assert_eq!(team_match.game_type(), GameType::Nine);

        Ok(())
    }

    #[test]
    fn is_nine_ignores_the_override() -> anyhow::Result<()> {
        let mut team_match = new_match(Some(Division::MixedEight))?;
        team_match.division = Some(Division::NineBallTuesdays);

        assert_eq!(team_match.game_type(), GameType::Nine);
        assert!(!team_match.is_nine());

        Ok(())
    }

    #[test]
    fn game_type_needs_a_division() -> anyhow::Result<()> {
        let mut team_match = new_match(None)?;
        assert_eq!(team_match.game_type(), GameType::Unknown);
        assert!(!team_match.is_nine());

        team_match.division = Some(Division::MixedMondaysMixed);
        assert_eq!(team_match.game_type(), GameType::Eight);

        Ok(())
    }

    #[test]
    fn strangers_are_an_error() -> anyhow::Result<()> {
        let mut team_match = new_match(Some(Division::MixedEight))?;
        team_match.score = Score::new(7, 5);
        let third = Team::new("t3", "Bankers", Season::new("s1", None));

        assert!(matches!(
            team_match.is_winner(&third),
            Err(MatchError::NotAParticipant(id)) if id == "t3"
        ));
        assert!(team_match.racks(&third).is_err());
        assert!(team_match.set_loses(&third).is_err());

        Ok(())
    }

    #[test]
    fn per_team_counters() -> anyhow::Result<()> {
        let mut team_match = new_match(Some(Division::MixedEight))?;
        team_match.score = Score::new(7, 5).with_sets(2, 1);
        let home = team_match.home.clone();
        let away = team_match.away.clone();

        assert_eq!(team_match.racks(&home)?, 7);
        assert_eq!(team_match.opponent_racks(&home)?, 5);
        assert_eq!(team_match.racks(&away)?, 5);
        assert_eq!(team_match.set_wins(&away)?, 1);
        assert_eq!(team_match.set_loses(&away)?, 2);
        assert_eq!(team_match.set_home_lost(), 1);
        assert_eq!(team_match.set_away_lost(), 2);

        Ok(())
    }

    #[test]
    fn forfeits_count_as_results() -> anyhow::Result<()> {
        let mut team_match = new_match(Some(Division::MixedEight))?;
        team_match.score.away_racks = 4;
        team_match.score.away_forfeits = 4;

        assert!(team_match.has_results());
        assert!(team_match.is_forfeit());
        assert_eq!(team_match.winner(), Some(&team_match.away));

        Ok(())
    }

    #[test]
    fn availability_round_trip() -> anyhow::Result<()> {
        let mut team_match = new_match(Some(Division::MixedEight))?;

        team_match.add_home_not_available("u1");
        team_match.add_home_not_available("u1");
        assert_eq!(ids(team_match.home_available()), ["u2", "u3"]);
        assert_eq!(ids(team_match.home_unavailable()), ["u1"]);
        assert_eq!(ids(team_match.away_available()), ["u4", "u5"]);

        team_match.remove_home_not_available("u1");
        team_match.remove_home_not_available("u1");
        assert_eq!(ids(team_match.home_available()), ["u1", "u2", "u3"]);
        assert!(team_match.home_unavailable().is_empty());

        team_match.set_away_not_available(["u4", "u5"].into_iter().collect());
        assert!(team_match.away_available().is_empty());
        assert_eq!(ids(team_match.away_unavailable()), ["u4", "u5"]);

        Ok(())
    }

    #[test]
    fn challenge_races_by_handicap() -> anyhow::Result<()> {
        let season = Season::new_challenge("s2", Some(Division::NineBallChallenge));
        let challenger = User::new("u1", "Earl").with_handicap(&season, Handicap::A);
        let opponent = User::new("u4", "Shane").with_handicap(&season, Handicap::C);
        let (home, away) = teams(&season);

        let mut team_match = TeamMatch::new(
            home.with_challenge_user(challenger.clone()),
            away.with_challenge_user(opponent.clone()),
            Some(date_time(4, 19)?),
        );
        team_match.race = "9".to_string();

        assert_eq!(team_match.race(&StandardRaces), "7/3");
        assert_eq!(
            team_match.race(&|home: Handicap, away: Handicap| format!("{home}:{away}")),
            "A:C"
        );
        assert_eq!(team_match.challenger(), Some(&challenger));
        assert_eq!(team_match.opponent(), Some(&opponent));

        team_match.away.challenge_user = None;
        assert_eq!(team_match.race(&StandardRaces), "");

        Ok(())
    }

    #[test]
    fn challenge_race_needs_season_handicaps() {
        let season = Season::new_challenge("s2", None);
        let other_season = Season::new("s1", None);
        let (home, away) = teams(&season);

        let team_match = TeamMatch::new(
            home.with_challenge_user(User::new("u1", "").with_handicap(&season, Handicap::B)),
            away.with_challenge_user(User::new("u4", "").with_handicap(&other_season, Handicap::B)),
            None,
        );

        assert_eq!(team_match.race(&StandardRaces), "");
    }

    #[test]
    fn race_override_outside_challenge() -> anyhow::Result<()> {
        let mut team_match = new_match(Some(Division::MixedNine))?;
        assert_eq!(team_match.race(&StandardRaces), "");
        assert_eq!(team_match.challenger(), None);

        team_match.race = "7".to_string();
        assert_eq!(team_match.race(&StandardRaces), "7");

        Ok(())
    }

    #[test]
    fn challenge_score_is_winner_first() -> anyhow::Result<()> {
        let season = Season::new_challenge("s2", Some(Division::NineBallChallenge));
        let (home, away) = teams(&season);
        let mut team_match = TeamMatch::new(home, away, None);

        assert_eq!(team_match.display_score(), None);
        team_match.score = Score::new(3, 7);
        assert_eq!(team_match.display_score().as_deref(), Some("7-3"));
        assert_eq!(team_match.score(), "3-7");

        let mut league_match = new_match(Some(Division::MixedEight))?;
        league_match.score = Score::new(3, 7);
        assert_eq!(league_match.display_score(), None);

        Ok(())
    }

    #[test]
    fn opponent_team_of_the_reference_user() -> anyhow::Result<()> {
        let mut team_match = new_match(Some(Division::MixedEight))?;
        assert_eq!(team_match.opponent_team(), None);

        team_match.reference_user = Some(User::new("u2", ""));
        assert_eq!(team_match.opponent_team(), Some(&team_match.away));
        assert!(team_match.has_user(&User::new("u5", "")));
        assert!(!team_match.has_user(&User::new("u9", "")));

        team_match.reference_user = Some(User::new("u5", ""));
        assert_eq!(team_match.opponent_team(), Some(&team_match.home));

        Ok(())
    }

    #[test]
    fn past_match_without_results_is_pending() -> anyhow::Result<()> {
        let mut team_match = new_match(Some(Division::MixedEight))?;
        team_match.status = Some(Status::Active);

        assert_eq!(team_match.status_at(date_time(10, 12)?)?, Some(Status::Pending));
        assert_eq!(team_match.status_at(date_time(1, 12)?)?, Some(Status::Active));

        team_match.score = Score::new(7, 2);
        assert_eq!(team_match.status_at(date_time(10, 12)?)?, Some(Status::Active));

        Ok(())
    }

    #[test]
    fn form_dates_are_a_fallback() -> anyhow::Result<()> {
        let mut team_match = new_match(Some(Division::MixedEight))?;
        team_match.match_date = None;
        assert_eq!(team_match.match_date()?, None);
        assert!(matches!(team_match.time(), Err(MatchError::NoDate)));
        assert_eq!(team_match.default_match_date(date_time(9, 15)?)?, date_time(9, 7)?);

        team_match.date = Some("2026-03-04".to_string());
        team_match.time = Some("00:00".to_string());
        assert_eq!(team_match.match_date()?, Some(date_time(4, 0)?));
        assert_eq!(team_match.time()?, "19:00");
        assert_eq!(team_match.date_string()?, "2026-03-04");
        assert_eq!(team_match.default_match_date(date_time(9, 15)?)?, date_time(4, 7)?);

        team_match.time = Some("late".to_string());
        assert!(matches!(
            team_match.match_date(),
            Err(MatchError::InvalidDate { .. })
        ));

        Ok(())
    }

    #[test]
    fn same_match_ignores_home_and_away() -> anyhow::Result<()> {
        let match_1 = new_match(Some(Division::MixedEight))?;
        let mut match_2 = match_1.clone();
        std::mem::swap(&mut match_2.home, &mut match_2.away);

        assert!(TeamMatch::is_same_match(&match_1, &match_2));

        match_2.match_date = Some(date_time(5, 19)?);
        assert!(!TeamMatch::is_same_match(&match_1, &match_2));

        let mut match_3 = match_1.clone();
        match_3.away = Team::new("t3", "Bankers", Season::new("s1", None));
        assert!(!TeamMatch::is_same_match(&match_1, &match_3));

        Ok(())
    }

    #[test]
    fn sort_by_date() -> anyhow::Result<()> {
        let mut match_1 = new_match(None)?;
        match_1.id = "m1".to_string();
        let mut match_2 = match_1.clone();
        match_2.id = "m2".to_string();
        match_2.match_date = Some(date_time(2, 19)?);
        let mut match_3 = match_1.clone();
        match_3.id = "m3".to_string();
        match_3.match_date = None;

        let mut matches = [match_3, match_1, match_2];
        matches.sort_by(TeamMatch::cmp_by_date);

        let ids: Vec<_> = matches.iter().map(ToString::to_string).collect();
        assert_eq!(ids, ["{id=m2}", "{id=m1}", "{id=m3}"]);

        Ok(())
    }
}

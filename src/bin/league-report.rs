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

use std::{io::Write as _, path::PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::{CommandFactory, Parser};
use log::{debug, warn};

use pool_league::{
    COPYRIGHT, LONG_VERSION,
    handicap::StandardRaces,
    league::{LEAGUE_FILE, League},
    schedule,
    team_match::TeamMatch,
    utils::{self, data_file},
};

/// Pool League Report
///
/// Prints the matches of a league data file with their results, races and
/// statuses.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Pool League Report")]
struct Args {
    /// The league RON file [default: the league file in the data folder]
    #[arg(index = 1, value_name = "file")]
    file: Option<PathBuf>,

    /// Only show the matches of the team with this id
    #[arg(long)]
    team: Option<String>,

    /// Show the available and unavailable players
    #[arg(long)]
    rosters: bool,

    /// Report as of this local date and time, e.g. 2026-03-04T19:00:00
    #[arg(long)]
    now: Option<NaiveDateTime>,

    /// Whether to log on the debug level
    #[arg(long)]
    debug: bool,

    /// Build the manpage
    #[arg(long)]
    man: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.debug);

    if args.man {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Args::command().name("league-report").long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-10-18");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write("league-report.1", buffer)?;
        return Ok(());
    }

    let file = if let Some(file) = args.file {
        file
    } else {
        utils::create_data_folder()?;
        data_file(LEAGUE_FILE)
    };
    debug!("league file: {}", file.display());

    let league = League::load(&file).with_context(|| format!("loading {}", file.display()))?;
    let now = args.now.unwrap_or_else(schedule::now);

    for duplicate in league.duplicates() {
        warn!("{duplicate} was entered more than once");
    }

    let matches = match &args.team {
        Some(team) => league.team_schedule(team),
        None => league.schedule(),
    };

    let mut stdout = std::io::stdout().lock();
    for team_match in matches {
        match report(team_match, now) {
            Ok(line) => writeln!(stdout, "{line}")?,
            Err(err) => {
                warn!("{team_match}: {err}");
                continue;
            }
        }

        if args.rosters {
            writeln!(stdout, "{}", rosters(team_match))?;
        }
    }

    Ok(())
}

fn report(team_match: &TeamMatch, now: NaiveDateTime) -> anyhow::Result<String> {
    let date = match team_match.match_date()? {
        Some(_) => format!("{} {}", team_match.date_string()?, team_match.time()?),
        None => "unscheduled".to_string(),
    };

    let winner = team_match
        .winner()
        .map_or_else(|| "-".to_string(), ToString::to_string);

    let status = team_match
        .status_at(now)?
        .map_or_else(|| "-".to_string(), |status| status.to_string());

    let mut race = team_match.race(&StandardRaces);
    if race.is_empty() {
        race.push('-');
    }

    let score = team_match
        .display_score()
        .unwrap_or_else(|| team_match.score());

    Ok(format!(
        "{date} | {} vs {} | {} | score {score} | winner {winner} | race {race} | {status}",
        team_match.home,
        team_match.away,
        team_match.game_type(),
    ))
}

fn rosters(team_match: &TeamMatch) -> String {
    let names = |users: Vec<&pool_league::user::User>| {
        users
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "    {}: {} (out: {})\n    {}: {} (out: {})",
        team_match.home,
        names(team_match.home_available()),
        names(team_match.home_unavailable()),
        team_match.away,
        names(team_match.away_available()),
        names(team_match.away_unavailable()),
    )
}

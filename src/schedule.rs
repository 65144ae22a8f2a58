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

//! Match dates and the status shown for them.
//!
//! Stored match dates use midnight to mean "no time picked yet". Such a
//! match is shown at [`DISPLAY_TIME`] and edited starting from
//! [`DEFAULT_HOUR`].

use chrono::{Local, NaiveDateTime, Timelike};
use log::trace;

use crate::{status::Status, team_match::MatchError};

pub const DEFAULT_HOUR: u32 = 7;
pub const DISPLAY_TIME: &str = "19:00";

const DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

#[must_use]
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[must_use]
pub fn time_unset(date: &NaiveDateTime) -> bool {
    date.hour() == 0
}

/// Parses the separate date and time a match form sends, for example
/// `2026-03-04` and `19:30`.
///
/// # Errors
///
/// If the two don't join into an ISO local date-time. Whitespace anywhere is
/// malformed.
pub fn parse_date_time(date: &str, time: &str) -> Result<NaiveDateTime, MatchError> {
    let input = format!("{date}T{time}");
    trace!("parse_date_time: {input}");

    if input.contains(char::is_whitespace) {
        return Err(MatchError::DateWithWhitespace(input));
    }

    let mut last_error = None;
    for format in DATE_TIME_FORMATS {
        match NaiveDateTime::parse_from_str(&input, format) {
            Ok(date_time) => return Ok(date_time),
            Err(error) => last_error = Some(error),
        }
    }

    match last_error {
        Some(source) => Err(MatchError::InvalidDate { input, source }),
        None => Err(MatchError::NoDate),
    }
}

/// The structured date wins, the form fields are only a fallback.
///
/// # Errors
///
/// If the fallback date and time don't parse.
pub fn resolve_match_date(
    match_date: Option<NaiveDateTime>,
    date: Option<&str>,
    time: Option<&str>,
) -> Result<Option<NaiveDateTime>, MatchError> {
    if match_date.is_some() {
        return Ok(match_date);
    }

    match (date, time) {
        (Some(date), Some(time)) => parse_date_time(date, time).map(Some),
        _ => Ok(None),
    }
}

#[must_use]
pub fn default_match_date(match_date: Option<NaiveDateTime>, now: NaiveDateTime) -> NaiveDateTime {
    match match_date {
        None => now.with_hour(DEFAULT_HOUR).unwrap_or(now),
        Some(date) if time_unset(&date) => date.with_hour(DEFAULT_HOUR).unwrap_or(date),
        Some(date) => date,
    }
}

/// `HH:MM`, or `HH:MM:SS` when there are seconds.
#[must_use]
pub fn display_time(date: &NaiveDateTime) -> String {
    if time_unset(date) {
        DISPLAY_TIME.to_string()
    } else if date.second() == 0 && date.nanosecond() == 0 {
        date.format("%H:%M").to_string()
    } else {
        date.format("%H:%M:%S").to_string()
    }
}

#[must_use]
pub fn display_date(date: &NaiveDateTime) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// A match whose date went by without results is pending, whatever was
/// stored.
#[must_use]
pub fn derive_status(
    stored: Option<Status>,
    match_date: Option<NaiveDateTime>,
    has_results: bool,
    now: NaiveDateTime,
) -> Option<Status> {
    match match_date {
        Some(date) if date < now && !has_results => Some(Status::Pending),
        _ => stored,
    }
}

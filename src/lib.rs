//! Match results, handicap races and roster availability for a pool league.
//!
//! A [`TeamMatch`](team_match::TeamMatch) carries the raw counters of one
//! match between two teams. Everything shown about it, who won, the score,
//! the race, who can play and the status, is worked out from those counters
//! every time it is asked for.
//!
//! ## Binaries
//!
//! * `league-report` - print the matches of a league data file

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

#![deny(clippy::panic)]

pub mod availability;
pub mod division;
pub mod handicap;
pub mod league;
pub mod schedule;
pub mod score;
pub mod season;
pub mod side;
pub mod status;
pub mod team;
pub mod team_match;
pub mod user;
pub mod utils;

pub const HOME: &str = "pool-league";

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2025-2026 Developers of the pool-league project

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2025-2026 Developers of the pool-league project
Licensed under the AGPLv3"
);

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The stored status of a match.
///
/// Nothing moves a match between these values: [`Status::Pending`] in
/// particular is also inferred at read time, see
/// [`derive_status`](crate::schedule::derive_status).
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Status {
    #[default]
    Active,
    Cancelled,
    Complete,
    Inactive,
    Pending,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Complete => write!(f, "complete"),
            Self::Inactive => write!(f, "inactive"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

impl FromStr for Status {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        match value.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            "complete" | "completed" => Ok(Self::Complete),
            "inactive" => Ok(Self::Inactive),
            "pending" => Ok(Self::Pending),
            _ => Err(anyhow::Error::msg(format!("invalid status: {value}"))),
        }
    }
}

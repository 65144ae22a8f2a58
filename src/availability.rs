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

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::user::User;

/// Ids of the members who can't play a given match for their team.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NotAvailable(pub FxHashSet<String>);

impl NotAvailable {
    /// Returns `false` if the id was already there.
    pub fn add(&mut self, id: &str) -> bool {
        self.0.insert(id.to_string())
    }

    /// Returns `false` if the id wasn't there.
    pub fn remove(&mut self, id: &str) -> bool {
        self.0.remove(id)
    }

    #[must_use]
    pub fn contains(&self, user: &User) -> bool {
        self.0.contains(user.id.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<S: Into<String>> FromIterator<S> for NotAvailable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A roster split by who can play. Both halves keep the roster order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Availability<'a> {
    pub available: Vec<&'a User>,
    pub unavailable: Vec<&'a User>,
}

impl<'a> Availability<'a> {
    #[must_use]
    pub fn partition(members: &'a [User], not_available: &NotAvailable) -> Self {
        let (unavailable, available) = members
            .iter()
            .partition(|member| not_available.contains(member));

        Self {
            available,
            unavailable,
        }
    }
}

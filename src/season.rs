use std::fmt;

use serde::{Deserialize, Serialize};

use crate::division::{Division, GameType};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Season {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub division: Option<Division>,
    /// Challenge seasons are played one on one, with races set by handicap.
    #[serde(default)]
    pub challenge: bool,
}

impl Season {
    #[must_use]
    pub fn new(id: &str, division: Option<Division>) -> Self {
        Self {
            id: id.to_string(),
            division,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn new_challenge(id: &str, division: Option<Division>) -> Self {
        Self {
            challenge: true,
            ..Self::new(id, division)
        }
    }

    #[must_use]
    pub fn is_nine(&self) -> bool {
        GameType::from(self.division) == GameType::Nine
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl PartialEq for Season {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Season {}

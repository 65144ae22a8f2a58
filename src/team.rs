use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{season::Season, user::User};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Team {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub season: Season,
    #[serde(default)]
    pub members: Vec<User>,
    /// The member who plays for the team in a challenge season.
    #[serde(default)]
    pub challenge_user: Option<User>,
}

impl Team {
    #[must_use]
    pub fn new(id: &str, name: &str, season: Season) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            season,
            members: Vec::new(),
            challenge_user: None,
        }
    }

    #[must_use]
    pub fn with_members(mut self, members: Vec<User>) -> Self {
        self.members = members;
        self
    }

    #[must_use]
    pub fn with_challenge_user(mut self, user: User) -> Self {
        self.challenge_user = Some(user);
        self
    }

    #[must_use]
    pub fn has_member(&self, user: &User) -> bool {
        self.members.contains(user)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Team {}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A team override parameter does not hold an integer identifier.
    InvalidTeamId {
        /// The configuration key that was read.
        key: String,
        /// The raw value found under that key.
        value: String,
    },
    /// Team name is empty or invalid.
    InvalidTeamName(String),
    /// Two team records share the same identifier.
    DuplicateTeam(i64),
    /// A named reference (default team, template) is empty or invalid.
    InvalidReferenceName(String),
    /// A leader's email address is present but unusable.
    InvalidLeaderEmail {
        /// The team the leader belongs to.
        team_id: i64,
        /// The rejected address.
        email: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTeamId { key, value } => {
                write!(f, "Invalid team id '{value}' for parameter '{key}'")
            }
            Self::InvalidTeamName(msg) => write!(f, "Invalid team name: {msg}"),
            Self::DuplicateTeam(id) => write!(f, "Team {id} already exists"),
            Self::InvalidReferenceName(msg) => write!(f, "Invalid reference name: {msg}"),
            Self::InvalidLeaderEmail { team_id, email } => {
                write!(f, "Invalid leader email '{email}' for team {team_id}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

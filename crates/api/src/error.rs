// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use helpdesk_routing_domain::DomainError;
use helpdesk_routing_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and store errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidTeamId { key, value } => ApiError::InvalidInput {
            field: key,
            message: format!("'{value}' is not a team id"),
        },
        DomainError::InvalidTeamName(msg) => ApiError::InvalidInput {
            field: String::from("team.name"),
            message: msg,
        },
        DomainError::DuplicateTeam(id) => ApiError::InvalidInput {
            field: String::from("team.id"),
            message: format!("Team {id} already exists"),
        },
        DomainError::InvalidReferenceName(msg) => ApiError::InvalidInput {
            field: String::from("reference"),
            message: msg,
        },
        DomainError::InvalidLeaderEmail { team_id, email } => ApiError::InvalidInput {
            field: String::from("team.leader.email"),
            message: format!("'{email}' is not a valid address for the leader of team {team_id}"),
        },
    }
}

/// Translates a store error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::TicketNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Ticket"),
            message: format!("Ticket {id} does not exist"),
        },
        PersistenceError::InvalidSeed(domain_err) => translate_domain_error(domain_err),
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}

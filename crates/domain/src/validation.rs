// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Team;
use std::collections::HashSet;

/// Validates that a team record is usable as a routing target.
///
/// # Arguments
///
/// * `team` - The team to validate
///
/// # Errors
///
/// Returns an error if:
/// - The team name is empty
/// - The leader has an email address without an `@`
pub fn validate_team(team: &Team) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if team.name.trim().is_empty() {
        return Err(DomainError::InvalidTeamName(String::from(
            "Team name cannot be empty",
        )));
    }

    // Rule: a leader email, when present, must at least carry a domain
    if let Some(email) = team.leader.as_ref().and_then(|l| l.email.as_deref())
        && !email.contains('@')
    {
        return Err(DomainError::InvalidLeaderEmail {
            team_id: team.id.value(),
            email: email.to_string(),
        });
    }

    Ok(())
}

/// Validates that no two teams share an identifier.
///
/// # Errors
///
/// Returns `DomainError::DuplicateTeam` with the first repeated id.
pub fn validate_unique_team_ids(teams: &[Team]) -> Result<(), DomainError> {
    let mut seen: HashSet<i64> = HashSet::new();
    for team in teams {
        if !seen.insert(team.id.value()) {
            return Err(DomainError::DuplicateTeam(team.id.value()));
        }
    }
    Ok(())
}

/// Validates a named reference such as a default team or template name.
///
/// # Errors
///
/// Returns `DomainError::InvalidReferenceName` if the name is blank or
/// contains whitespace.
pub fn validate_reference_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidReferenceName(String::from(
            "Reference name cannot be empty",
        )));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidReferenceName(format!(
            "Reference name '{name}' must not contain whitespace"
        )));
    }
    Ok(())
}

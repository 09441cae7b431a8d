// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seed documents.
//!
//! A seed is the JSON description of everything the store needs before the
//! first ticket arrives:
//!
//! ```json
//! {
//!   "params": { "helpdesk_routing.internal_domains": "wavext.io" },
//!   "teams": [
//!     { "id": 1, "name": "Internal Support",
//!       "leader": { "id": 101, "name": "Ann", "email": "ann@wavext.io", "partner_id": 201 } }
//!   ],
//!   "named_teams": { "helpdesk_routing.internal_helpdesk_team": 1 },
//!   "templates": {
//!     "helpdesk_routing.ticket_assignment_email_template": {
//!       "to": ["{{leader.email}}"],
//!       "subject": "Ticket {{ticket.id}} assigned to {{team.name}}",
//!       "body_html": "<p>{{ticket.name}}</p>"
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use helpdesk_routing_domain::{
    Team, TeamId, validate_reference_name, validate_team, validate_unique_team_ids,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PersistenceError;

/// A stored mail template.
///
/// Every text field may carry `{{...}}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailTemplate {
    /// Sender address.
    pub from: Option<String>,
    /// Recipient addresses; entries that render empty are dropped.
    pub to: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub body_html: String,
}

/// The initial contents of a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    /// System parameters.
    pub params: BTreeMap<String, String>,
    /// Team records.
    pub teams: Vec<Team>,
    /// Named references to teams.
    pub named_teams: BTreeMap<String, TeamId>,
    /// Mail templates by reference name.
    pub templates: BTreeMap<String, MailTemplate>,
}

impl Seed {
    /// Parses and validates a seed document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON of the expected
    /// shape, or if it describes invalid teams or reference names.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        let seed: Self = serde_json::from_str(json)?;
        seed.validate()?;
        debug!(
            teams = seed.teams.len(),
            params = seed.params.len(),
            templates = seed.templates.len(),
            "Parsed seed document"
        );
        Ok(seed)
    }

    /// Reads, parses and validates a seed file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path: &Path = path.as_ref();
        let read_failed = |source: std::io::Error| PersistenceError::SeedRead {
            path: path.display().to_string(),
            source,
        };
        let json: String = std::fs::read_to_string(path).map_err(read_failed)?;
        Self::from_json(&json)
    }

    /// Checks team records and reference names.
    ///
    /// A named reference may point at a team id that is not in `teams`; the
    /// lookup then simply fails at routing time.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    pub fn validate(&self) -> Result<(), PersistenceError> {
        for team in &self.teams {
            validate_team(team)?;
        }
        validate_unique_team_ids(&self.teams)?;
        for name in self.named_teams.keys().chain(self.templates.keys()) {
            validate_reference_name(name)?;
        }
        Ok(())
    }
}

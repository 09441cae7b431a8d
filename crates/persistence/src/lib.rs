// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory store for helpdesk ticket routing.
//!
//! `Persistence` keeps tickets, teams, system parameters, mail templates,
//! the outbox, the message log and audit events in memory. It implements
//! every collaborator trait the routing core needs, so a single store can
//! lend all of them to one routing run via [`Persistence::collaborators`].
//!
//! ## Seeding
//!
//! A store is usually built from a JSON [`Seed`] document. See the `seed`
//! module for the document shape.
//!
//! ## Write Model
//!
//! The routing core never writes to the store directly. Callers run a hook
//! against [`Persistence::collaborators`], then hand each returned
//! `RoutingResult` to [`Persistence::persist_routing_result`]. The outbox and
//! message log are the exception: the transports append to them during the
//! run, behind their own locks.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod outbox;
mod render;
mod seed;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use helpdesk_routing::{Collaborators, ConfigStore, RoutingResult, TeamRepository};
use helpdesk_routing_audit::AuditEvent;
use helpdesk_routing_domain::{Team, TeamId, Ticket, TicketId};
use tracing::{debug, info};

pub use error::PersistenceError;
pub use outbox::{BLOCKED_RECIPIENTS_KEY, MessageEntry, OutboxEntry, OutboxState};
pub use render::{render_template, render_text};
pub use seed::{MailTemplate, Seed};

/// An audit event as recorded by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAuditEvent {
    /// The event, with its assigned id.
    pub event: AuditEvent,
    /// ISO 8601 time the event was recorded.
    pub recorded_at: String,
}

/// In-memory store and reference collaborators.
#[derive(Debug, Default)]
pub struct Persistence {
    pub(crate) params: HashMap<String, String>,
    pub(crate) teams: BTreeMap<TeamId, Team>,
    pub(crate) named_teams: HashMap<String, TeamId>,
    pub(crate) templates: HashMap<String, MailTemplate>,
    pub(crate) outbox: Mutex<Vec<OutboxEntry>>,
    pub(crate) messages: Mutex<Vec<MessageEntry>>,
    tickets: BTreeMap<TicketId, Ticket>,
    audit_events: Vec<StoredAuditEvent>,
    next_ticket_id: i64,
}

impl Persistence {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from a validated seed.
    #[must_use]
    pub fn from_seed(seed: Seed) -> Self {
        info!(
            teams = seed.teams.len(),
            named_teams = seed.named_teams.len(),
            templates = seed.templates.len(),
            "Initializing store from seed"
        );
        Self {
            params: seed.params.into_iter().collect(),
            teams: seed.teams.into_iter().map(|team| (team.id, team)).collect(),
            named_teams: seed.named_teams.into_iter().collect(),
            templates: seed.templates.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Lends the store as every collaborator of one routing run.
    #[must_use]
    pub fn collaborators(&self) -> Collaborators<'_> {
        Collaborators {
            config: self,
            teams: self,
            templates: self,
            mail: self,
            messages: self,
        }
    }

    // ========================================================================
    // Directory
    // ========================================================================

    /// Sets a system parameter, replacing any previous value.
    pub fn set_param(&mut self, key: &str, value: &str) {
        debug!(key, value, "Setting system parameter");
        self.params.insert(key.to_string(), value.to_string());
    }

    /// Adds or replaces a team record.
    pub fn upsert_team(&mut self, team: Team) {
        self.teams.insert(team.id, team);
    }

    /// Points a named reference at a team id.
    pub fn set_named_team(&mut self, name: &str, team_id: TeamId) {
        self.named_teams.insert(name.to_string(), team_id);
    }

    /// Removes a named reference.
    pub fn remove_named_team(&mut self, name: &str) {
        self.named_teams.remove(name);
    }

    /// Adds or replaces a mail template.
    pub fn set_template(&mut self, name: &str, template: MailTemplate) {
        self.templates.insert(name.to_string(), template);
    }

    // ========================================================================
    // Tickets
    // ========================================================================

    /// Reserves ids for `count` new tickets.
    pub fn allocate_ticket_ids(&mut self, count: usize) -> Vec<TicketId> {
        (0..count)
            .map(|_| {
                self.next_ticket_id += 1;
                TicketId::new(self.next_ticket_id)
            })
            .collect()
    }

    /// Stores the ticket from a routing result and records its audit event.
    ///
    /// # Returns
    ///
    /// The id assigned to the audit event, if the result carried one.
    pub fn persist_routing_result(&mut self, result: &RoutingResult) -> Option<i64> {
        let ticket_id: TicketId = result.ticket.id();
        self.tickets.insert(ticket_id, result.ticket.clone());

        let event: &AuditEvent = result.audit_event.as_ref()?;
        let event_id: i64 = i64::try_from(self.audit_events.len()).unwrap_or(i64::MAX) + 1;
        self.audit_events.push(StoredAuditEvent {
            event: event.clone().with_id(event_id),
            recorded_at: outbox::now_timestamp(),
        });
        debug!(ticket_id = %ticket_id, event_id, "Recorded audit event");
        Some(event_id)
    }

    /// Retrieves a ticket by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticket does not exist.
    pub fn get_ticket(&self, ticket_id: TicketId) -> Result<Ticket, PersistenceError> {
        self.tickets
            .get(&ticket_id)
            .cloned()
            .ok_or(PersistenceError::TicketNotFound(ticket_id))
    }

    /// Lists all tickets in id order.
    #[must_use]
    pub fn list_tickets(&self) -> Vec<Ticket> {
        self.tickets.values().cloned().collect()
    }

    // ========================================================================
    // Logs
    // ========================================================================

    /// Returns a copy of the outbox.
    ///
    /// # Errors
    ///
    /// Returns an error if a writer panicked while holding the outbox lock.
    pub fn outbox_entries(&self) -> Result<Vec<OutboxEntry>, PersistenceError> {
        self.outbox
            .lock()
            .map(|outbox| outbox.clone())
            .map_err(|e| PersistenceError::LockPoisoned(e.to_string()))
    }

    /// Returns a copy of the message log.
    ///
    /// # Errors
    ///
    /// Returns an error if a writer panicked while holding the log lock.
    pub fn message_entries(&self) -> Result<Vec<MessageEntry>, PersistenceError> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .map_err(|e| PersistenceError::LockPoisoned(e.to_string()))
    }

    /// Returns the audit events recorded for one ticket, oldest first.
    #[must_use]
    pub fn audit_events_for(&self, ticket_id: TicketId) -> Vec<StoredAuditEvent> {
        self.audit_events
            .iter()
            .filter(|stored| stored.event.ticket_id == ticket_id)
            .cloned()
            .collect()
    }
}

impl ConfigStore for Persistence {
    fn get_param(&self, key: &str) -> Option<String> {
        self.params.get(key).cloned()
    }
}

impl TeamRepository for Persistence {
    fn resolve_by_id(&self, id: TeamId) -> Option<Team> {
        self.teams.get(&id).cloned()
    }

    fn resolve_by_name(&self, name: &str) -> Option<Team> {
        let team_id: TeamId = *self.named_teams.get(name)?;
        self.resolve_by_id(team_id)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

#[cfg(test)]
mod tests;

use helpdesk_routing_domain::{Ticket, TicketId};

/// Identifier recorded for changes made by the router itself.
pub const SYSTEM_ACTOR_ID: &str = "helpdesk_routing";

/// Represents the entity performing an action.
///
/// Routing runs as the system, but the cause records which caller's
/// create or update set it off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "user", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// The actor used for automatic routing.
    #[must_use]
    pub fn system() -> Self {
        Self::new(String::from(SYSTEM_ACTOR_ID), String::from("system"))
    }
}

/// Represents the reason or trigger for an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this action
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`RouteTicket`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A snapshot of a ticket's routing fields at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the routing fields.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    ///
    /// # Arguments
    ///
    /// * `data` - A string representation of the state
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }

    /// Captures the routing-relevant fields of a ticket.
    #[must_use]
    pub fn of_ticket(ticket: &Ticket) -> Self {
        Self::new(format!(
            "email_domain={},is_internal={},team={},routing_processed={}",
            ticket.email_domain().unwrap_or("-"),
            ticket.is_internal(),
            ticket
                .team()
                .map_or_else(|| String::from("-"), |t| t.value().to_string()),
            ticket.routing_processed()
        ))
    }
}

/// An immutable audit event recording one routing run for one ticket.
///
/// Every routing run that fires produces exactly one audit event capturing:
/// - Who performed the action (actor)
/// - Why it was performed (cause)
/// - What was decided (action)
/// - The routing fields before and after the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The identifier assigned when the event is stored.
    /// `None` until persisted.
    pub event_id: Option<i64>,
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
    /// The ticket this event belongs to.
    pub ticket_id: TicketId,
}

impl AuditEvent {
    /// Creates a new, not yet persisted `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `before` - The state before the transition
    /// * `after` - The state after the transition
    /// * `ticket_id` - The ticket the change applies to
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        ticket_id: TicketId,
    ) -> Self {
        Self {
            event_id: None,
            actor,
            cause,
            action,
            before,
            after,
            ticket_id,
        }
    }

    /// Returns a copy of this event carrying the stored identifier.
    #[must_use]
    pub fn with_id(self, event_id: i64) -> Self {
        Self {
            event_id: Some(event_id),
            ..self
        }
    }
}

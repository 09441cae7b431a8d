// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use helpdesk_routing_persistence::{MessageEntry, OutboxEntry};
use serde::{Deserialize, Deserializer, Serialize};

/// Distinguishes an absent field from an explicit `null`.
///
/// Used with `#[serde(default)]`: a missing field stays `None`, `null`
/// becomes `Some(None)`, and a value becomes `Some(Some(value))`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// The identity record a ticket is linked to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerRequest {
    /// The partner identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address, if any.
    #[serde(default)]
    pub email: Option<String>,
}

/// API request to create one ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTicketRequest {
    /// Ticket subject.
    pub name: Option<String>,
    /// Email the ticket was submitted with.
    pub email: Option<String>,
    /// Linked identity record.
    pub partner: Option<PartnerRequest>,
    /// Team to assign up front.
    pub team_id: Option<i64>,
    /// Create the ticket already marked as routed.
    pub routing_processed: bool,
}

/// API request to create a batch of tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTicketsRequest {
    /// The tickets to create, in order.
    pub tickets: Vec<CreateTicketRequest>,
}

/// API request to write fields of an existing ticket.
///
/// Omitted fields are left alone; `null` clears a nullable field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTicketRequest {
    /// New subject.
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    /// New ticket email.
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    /// New identity record link.
    #[serde(default, deserialize_with = "double_option")]
    pub partner: Option<Option<PartnerRequest>>,
    /// New team.
    #[serde(default, deserialize_with = "double_option")]
    pub team_id: Option<Option<i64>>,
    /// Explicit value for the processed flag.
    #[serde(default)]
    pub routing_processed: Option<bool>,
}

/// A ticket as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketInfo {
    /// The ticket identifier.
    pub id: i64,
    /// Ticket subject.
    pub name: Option<String>,
    /// Email the ticket was submitted with.
    pub email: Option<String>,
    /// Linked partner identifier.
    pub partner_id: Option<i64>,
    /// Linked partner name.
    pub partner_name: Option<String>,
    /// Derived email domain.
    pub email_domain: Option<String>,
    /// Derived classification flag.
    pub is_internal: bool,
    /// `internal` or `external`.
    pub classification: String,
    /// Assigned team.
    pub team_id: Option<i64>,
    /// Whether routing has run.
    pub routing_processed: bool,
    /// `unrouted`, `routed` or `unassigned`.
    pub routing_state: String,
}

/// What the router did with a ticket during this request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingInfo {
    /// Whether a routing run happened.
    pub routed: bool,
    /// The skip reason, or a summary of the routing run.
    pub detail: String,
    /// The recorded audit event, if a routing run happened.
    pub audit_event_id: Option<i64>,
}

/// API response for one created or updated ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRoutingResponse {
    /// The stored ticket.
    pub ticket: TicketInfo,
    /// The routing decision.
    pub routing: RoutingInfo,
}

/// API response for a ticket batch creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTicketsResponse {
    /// One entry per requested ticket, in request order.
    pub tickets: Vec<TicketRoutingResponse>,
}

/// API response listing tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTicketsResponse {
    /// All tickets in id order.
    pub tickets: Vec<TicketInfo>,
}

/// API response listing the outbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListOutboxResponse {
    /// Every submitted mail, oldest first.
    pub mails: Vec<OutboxEntry>,
}

/// API response listing the message log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListMessagesResponse {
    /// Every posted message, oldest first.
    pub messages: Vec<MessageEntry>,
}

/// One audit event as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEventInfo {
    /// The event identifier.
    pub event_id: Option<i64>,
    /// The ticket the event is about.
    pub ticket_id: i64,
    /// Who acted.
    pub actor_id: String,
    /// The kind of actor.
    pub actor_type: String,
    /// The request that caused the event.
    pub cause_id: String,
    /// Description of the request.
    pub cause_description: String,
    /// The action name.
    pub action: String,
    /// Action details.
    pub details: Option<String>,
    /// Ticket state before the action.
    pub before: String,
    /// Ticket state after the action.
    pub after: String,
    /// When the event was recorded.
    pub recorded_at: String,
}

/// API response for a ticket's audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrailResponse {
    /// The ticket identifier.
    pub ticket_id: i64,
    /// The events, oldest first.
    pub events: Vec<AuditEventInfo>,
}

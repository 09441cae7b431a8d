// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use helpdesk_routing::{RoutingOutcome, RoutingResult, TeamRepository, on_create, on_update};
use helpdesk_routing_audit::Cause;
use helpdesk_routing_domain::{
    Partner, PartnerId, TeamId, Ticket, TicketDraft, TicketId, TicketUpdate,
};
use helpdesk_routing_persistence::{Persistence, StoredAuditEvent};
use tracing::{debug, info};

use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{
    AuditEventInfo, AuditTrailResponse, CreateTicketRequest, CreateTicketsRequest,
    CreateTicketsResponse, ListMessagesResponse, ListOutboxResponse, ListTicketsResponse,
    PartnerRequest, RoutingInfo, TicketInfo, TicketRoutingResponse, UpdateTicketRequest,
};

fn ticket_info(ticket: &Ticket) -> TicketInfo {
    TicketInfo {
        id: ticket.id().value(),
        name: ticket.name().map(String::from),
        email: ticket.identity_email().map(String::from),
        partner_id: ticket.partner().map(|p| p.id.value()),
        partner_name: ticket.partner().map(|p| p.name.clone()),
        email_domain: ticket.email_domain().map(String::from),
        is_internal: ticket.is_internal(),
        classification: ticket.classification().as_str().to_string(),
        team_id: ticket.team().map(TeamId::value),
        routing_processed: ticket.routing_processed(),
        routing_state: ticket.routing_state().as_str().to_string(),
    }
}

fn routing_info(result: &RoutingResult, audit_event_id: Option<i64>) -> RoutingInfo {
    let detail: String = match &result.outcome {
        RoutingOutcome::Skipped(reason) => reason.as_str().to_string(),
        RoutingOutcome::Routed { .. } => result
            .audit_event
            .as_ref()
            .and_then(|event| event.action.details.clone())
            .unwrap_or_default(),
    };
    RoutingInfo {
        routed: result.outcome.is_routed(),
        detail,
        audit_event_id,
    }
}

fn validate_partner(partner: PartnerRequest) -> Result<Partner, ApiError> {
    if partner.id <= 0 {
        return Err(ApiError::InvalidInput {
            field: String::from("partner.id"),
            message: format!("Partner id must be positive, got {}", partner.id),
        });
    }
    if partner.name.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("partner.name"),
            message: String::from("Partner name cannot be empty"),
        });
    }
    Ok(Partner::new(
        PartnerId::new(partner.id),
        partner.name,
        partner.email,
    ))
}

fn validate_team_id(persistence: &Persistence, team_id: i64) -> Result<TeamId, ApiError> {
    let team_id: TeamId = TeamId::new(team_id);
    if persistence.resolve_by_id(team_id).is_none() {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Team"),
            message: format!("Team {team_id} does not exist"),
        });
    }
    Ok(team_id)
}

fn to_draft(
    persistence: &Persistence,
    request: CreateTicketRequest,
) -> Result<TicketDraft, ApiError> {
    let partner: Option<Partner> = request.partner.map(validate_partner).transpose()?;
    let team: Option<TeamId> = request
        .team_id
        .map(|id| validate_team_id(persistence, id))
        .transpose()?;
    Ok(TicketDraft {
        name: request.name,
        identity_email: request.email,
        partner,
        team,
        routing_processed: request.routing_processed,
    })
}

fn to_update(
    persistence: &Persistence,
    request: UpdateTicketRequest,
) -> Result<TicketUpdate, ApiError> {
    let partner: Option<Option<Partner>> = match request.partner {
        Some(Some(partner)) => Some(Some(validate_partner(partner)?)),
        Some(None) => Some(None),
        None => None,
    };
    let team: Option<Option<TeamId>> = match request.team_id {
        Some(Some(id)) => Some(Some(validate_team_id(persistence, id)?)),
        Some(None) => Some(None),
        None => None,
    };
    Ok(TicketUpdate {
        name: request.name,
        identity_email: request.email,
        partner,
        team,
        routing_processed: request.routing_processed,
    })
}

/// Creates a batch of tickets and routes each one.
///
/// All requests are validated before any ticket is stored, so an invalid
/// entry rejects the whole batch.
///
/// # Arguments
///
/// * `persistence` - The store
/// * `request` - The tickets to create
/// * `cause` - The request that created the tickets
///
/// # Errors
///
/// Returns an error if the batch is empty, a partner is invalid, or a
/// requested team does not exist.
pub fn create_tickets(
    persistence: &mut Persistence,
    request: CreateTicketsRequest,
    cause: &Cause,
) -> Result<CreateTicketsResponse, ApiError> {
    if request.tickets.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("tickets"),
            message: String::from("At least one ticket is required"),
        });
    }

    let drafts: Vec<TicketDraft> = request
        .tickets
        .into_iter()
        .map(|ticket| to_draft(persistence, ticket))
        .collect::<Result<_, _>>()?;

    let ids: Vec<TicketId> = persistence.allocate_ticket_ids(drafts.len());
    let results: Vec<RoutingResult> = on_create(
        ids.into_iter().zip(drafts).collect(),
        &persistence.collaborators(),
        cause,
    );

    let tickets: Vec<TicketRoutingResponse> = results
        .iter()
        .map(|result| {
            let audit_event_id: Option<i64> = persistence.persist_routing_result(result);
            TicketRoutingResponse {
                ticket: ticket_info(&result.ticket),
                routing: routing_info(result, audit_event_id),
            }
        })
        .collect();

    info!(count = tickets.len(), cause_id = %cause.id, "Created tickets");
    Ok(CreateTicketsResponse { tickets })
}

/// Writes fields of an existing ticket, rerouting it when needed.
///
/// # Arguments
///
/// * `persistence` - The store
/// * `ticket_id` - The ticket to update
/// * `request` - The fields to write
/// * `cause` - The request that wrote the fields
///
/// # Errors
///
/// Returns an error if the ticket does not exist, the request writes
/// nothing, a partner is invalid, or a requested team does not exist.
pub fn update_ticket(
    persistence: &mut Persistence,
    ticket_id: i64,
    request: UpdateTicketRequest,
    cause: &Cause,
) -> Result<TicketRoutingResponse, ApiError> {
    let ticket: Ticket = persistence
        .get_ticket(TicketId::new(ticket_id))
        .map_err(translate_persistence_error)?;

    let update: TicketUpdate = to_update(persistence, request)?;
    if update.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("update"),
            message: String::from("No fields to update"),
        });
    }
    debug!(ticket_id, fields = ?update.changed_fields(), "Updating ticket");

    let result: RoutingResult = on_update(&ticket, &update, &persistence.collaborators(), cause);
    let audit_event_id: Option<i64> = persistence.persist_routing_result(&result);

    Ok(TicketRoutingResponse {
        ticket: ticket_info(&result.ticket),
        routing: routing_info(&result, audit_event_id),
    })
}

/// Retrieves one ticket.
///
/// # Errors
///
/// Returns an error if the ticket does not exist.
pub fn get_ticket(persistence: &Persistence, ticket_id: i64) -> Result<TicketInfo, ApiError> {
    persistence
        .get_ticket(TicketId::new(ticket_id))
        .map(|ticket| ticket_info(&ticket))
        .map_err(translate_persistence_error)
}

/// Lists all tickets.
#[must_use]
pub fn list_tickets(persistence: &Persistence) -> ListTicketsResponse {
    ListTicketsResponse {
        tickets: persistence.list_tickets().iter().map(ticket_info).collect(),
    }
}

/// Lists every mail submitted to the outbox.
///
/// # Errors
///
/// Returns an error if the outbox cannot be read.
pub fn list_outbox(persistence: &Persistence) -> Result<ListOutboxResponse, ApiError> {
    persistence
        .outbox_entries()
        .map(|mails| ListOutboxResponse { mails })
        .map_err(translate_persistence_error)
}

/// Lists every in-app message posted.
///
/// # Errors
///
/// Returns an error if the message log cannot be read.
pub fn list_messages(persistence: &Persistence) -> Result<ListMessagesResponse, ApiError> {
    persistence
        .message_entries()
        .map(|messages| ListMessagesResponse { messages })
        .map_err(translate_persistence_error)
}

/// Retrieves the audit trail of one ticket.
///
/// # Errors
///
/// Returns an error if the ticket does not exist.
pub fn get_audit_trail(
    persistence: &Persistence,
    ticket_id: i64,
) -> Result<AuditTrailResponse, ApiError> {
    let ticket_id: TicketId = TicketId::new(ticket_id);
    persistence
        .get_ticket(ticket_id)
        .map_err(translate_persistence_error)?;

    let events: Vec<AuditEventInfo> = persistence
        .audit_events_for(ticket_id)
        .into_iter()
        .map(|StoredAuditEvent { event, recorded_at }| AuditEventInfo {
            event_id: event.event_id,
            ticket_id: event.ticket_id.value(),
            actor_id: event.actor.id,
            actor_type: event.actor.actor_type,
            cause_id: event.cause.id,
            cause_description: event.cause.description,
            action: event.action.name,
            details: event.action.details,
            before: event.before.data,
            after: event.after.data,
            recorded_at,
        })
        .collect();

    Ok(AuditTrailResponse {
        ticket_id: ticket_id.value(),
        events,
    })
}

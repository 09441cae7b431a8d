// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::notify::{NotificationReport, notify_team_leader};
use crate::ports::Collaborators;
use crate::selector::{TeamSelection, assign_team};
use crate::state::{RoutingOutcome, RoutingResult, SkipReason};
use crate::trigger::Trigger;
use helpdesk_routing_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use helpdesk_routing_domain::{
    Classification, RoutingSettings, Ticket, TicketDraft, TicketId, TicketUpdate,
};
use tracing::{debug, info};

/// Lifecycle hook for freshly created tickets.
///
/// Each draft is classified and, unless it arrives already processed, routed.
/// Tickets are handled independently; one ticket's outcome never affects
/// another's.
///
/// # Arguments
///
/// * `drafts` - The new tickets with the identifiers the store assigned
/// * `collaborators` - The collaborators for this run
/// * `cause` - The request that created the tickets, recorded in audit events
#[must_use]
pub fn on_create(
    drafts: Vec<(TicketId, TicketDraft)>,
    collaborators: &Collaborators<'_>,
    cause: &Cause,
) -> Vec<RoutingResult> {
    info!(count = drafts.len(), "Creating tickets");
    let settings: RoutingSettings = collaborators.config.routing_settings();
    debug!(internal_domains = ?settings.internal_domains.as_slice(), "Internal domains configured");

    drafts
        .into_iter()
        .map(|(id, draft)| {
            let ticket: Ticket = Ticket::from_draft(id, draft, &settings.internal_domains);
            route_created(ticket, &settings, collaborators, cause)
        })
        .collect()
}

fn route_created(
    mut ticket: Ticket,
    settings: &RoutingSettings,
    collaborators: &Collaborators<'_>,
    cause: &Cause,
) -> RoutingResult {
    if ticket.routing_processed() {
        debug!(ticket_id = %ticket.id(), "Ticket created as already processed");
        return RoutingResult {
            ticket,
            outcome: RoutingOutcome::Skipped(SkipReason::AlreadyProcessed),
            audit_event: None,
        };
    }

    if let Some(team_id) = ticket.team() {
        debug!(ticket_id = %ticket.id(), team_id = %team_id, "Ticket created with a team");
        ticket.mark_routing_processed();
        return RoutingResult {
            ticket,
            outcome: RoutingOutcome::Skipped(SkipReason::TeamAlreadyAssigned),
            audit_event: None,
        };
    }

    let before: StateSnapshot = StateSnapshot::of_ticket(&ticket);
    let trigger: Trigger = Trigger::Created;
    route(ticket, before, &trigger, settings, collaborators, cause)
}

/// Lifecycle hook for writes to an existing ticket.
///
/// The update is applied and the ticket reclassified if identity fields
/// changed. Routing runs again only when the update touches the email or the
/// partner link, does not itself set the processed flag, and the ticket has
/// no team.
///
/// # Arguments
///
/// * `ticket` - The ticket as currently stored
/// * `update` - The fields being written
/// * `collaborators` - The collaborators for this run
/// * `cause` - The request that wrote the fields, recorded in audit events
#[must_use]
pub fn on_update(
    ticket: &Ticket,
    update: &TicketUpdate,
    collaborators: &Collaborators<'_>,
    cause: &Cause,
) -> RoutingResult {
    let settings: RoutingSettings = collaborators.config.routing_settings();
    let before: StateSnapshot = StateSnapshot::of_ticket(ticket);

    let mut updated: Ticket = ticket.clone();
    updated.apply_update(update, &settings.internal_domains);

    let skip: Option<SkipReason> = if !update.touches_identity() {
        Some(SkipReason::IdentityUnchanged)
    } else if update.sets_routing_processed() {
        Some(SkipReason::ProcessedByCaller)
    } else if updated.team().is_some() {
        Some(SkipReason::TeamAlreadyAssigned)
    } else {
        None
    };

    if let Some(reason) = skip {
        debug!(
            ticket_id = %updated.id(),
            reason = reason.as_str(),
            "Update does not reroute ticket"
        );
        return RoutingResult {
            ticket: updated,
            outcome: RoutingOutcome::Skipped(reason),
            audit_event: None,
        };
    }

    info!(ticket_id = %updated.id(), "Email or partner changed, reprocessing routing");
    let trigger: Trigger = Trigger::Updated {
        fields: update.changed_fields(),
    };
    route(updated, before, &trigger, &settings, collaborators, cause)
}

/// Runs team selection and notification, then marks the ticket processed.
///
/// Assignment happens before notification, and both before the flag.
fn route(
    mut ticket: Ticket,
    before: StateSnapshot,
    trigger: &Trigger,
    settings: &RoutingSettings,
    collaborators: &Collaborators<'_>,
    cause: &Cause,
) -> RoutingResult {
    let classification: Classification = ticket.classification();
    info!(
        ticket_id = %ticket.id(),
        trigger = %trigger.describe(),
        email_domain = ticket.email_domain().unwrap_or("-"),
        classification = %classification,
        "Processing routing for ticket"
    );

    let selection: TeamSelection = assign_team(&mut ticket, settings, collaborators.teams);
    let notification: NotificationReport =
        notify_team_leader(&ticket, selection.team(), settings, collaborators);
    ticket.mark_routing_processed();

    info!(
        ticket_id = %ticket.id(),
        notification = %notification.summary(),
        "Routing processed for ticket"
    );

    let after: StateSnapshot = StateSnapshot::of_ticket(&ticket);
    let details: String = match &selection {
        TeamSelection::Selected { team, source } => format!(
            "{}: {classification} ticket assigned to team {} ({}) via {}; {}",
            trigger.describe(),
            team.id,
            team.name,
            source.as_str(),
            notification.summary()
        ),
        TeamSelection::NotFound => format!(
            "{}: no team found for {classification} ticket; {}",
            trigger.describe(),
            notification.summary()
        ),
    };
    let audit_event: AuditEvent = AuditEvent::new(
        Actor::system(),
        cause.clone(),
        Action::new(String::from("RouteTicket"), Some(details)),
        before,
        after,
        ticket.id(),
    );

    RoutingResult {
        ticket,
        outcome: RoutingOutcome::Routed {
            classification,
            selection,
            notification,
        },
        audit_event: Some(audit_event),
    }
}

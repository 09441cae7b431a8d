// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_stored_ticket, create_test_cause, create_test_persistence, create_ticket_request,
};
use crate::{
    ApiError, CreateTicketRequest, TicketRoutingResponse, UpdateTicketRequest, update_ticket,
};
use helpdesk_routing_domain::{EXTERNAL_TEAM_REF, TicketId};
use helpdesk_routing_persistence::Persistence;

#[test]
fn test_email_change_reroutes_unassigned_ticket() {
    let mut persistence: Persistence = create_test_persistence();
    persistence.remove_named_team(EXTERNAL_TEAM_REF);
    let ticket_id: i64 =
        create_stored_ticket(&mut persistence, create_ticket_request("x@outside.com"));
    assert_eq!(
        persistence.list_tickets()[0].routing_state().as_str(),
        "unassigned"
    );

    let response: TicketRoutingResponse = update_ticket(
        &mut persistence,
        ticket_id,
        UpdateTicketRequest {
            email: Some(Some(String::from("x@wavext.io"))),
            ..UpdateTicketRequest::default()
        },
        &create_test_cause(),
    )
    .unwrap();

    assert!(response.routing.routed);
    assert_eq!(response.ticket.team_id, Some(1));
    assert!(response.ticket.is_internal);
    assert_eq!(persistence.outbox_entries().unwrap().len(), 1);
}

#[test]
fn test_routed_ticket_keeps_team_on_email_change() {
    let mut persistence: Persistence = create_test_persistence();
    let ticket_id: i64 =
        create_stored_ticket(&mut persistence, create_ticket_request("x@wavext.io"));

    let response: TicketRoutingResponse = update_ticket(
        &mut persistence,
        ticket_id,
        UpdateTicketRequest {
            email: Some(Some(String::from("x@outside.com"))),
            ..UpdateTicketRequest::default()
        },
        &create_test_cause(),
    )
    .unwrap();

    assert!(!response.routing.routed);
    assert_eq!(response.routing.detail, "team already assigned");
    assert_eq!(response.ticket.team_id, Some(1));
    assert!(!response.ticket.is_internal);
    assert_eq!(persistence.outbox_entries().unwrap().len(), 1);
    assert_eq!(
        persistence
            .get_ticket(TicketId::new(ticket_id))
            .unwrap()
            .email_domain(),
        Some("outside.com")
    );
}

#[test]
fn test_name_change_is_stored_without_rerouting() {
    let mut persistence: Persistence = create_test_persistence();
    let ticket_id: i64 = create_stored_ticket(
        &mut persistence,
        CreateTicketRequest {
            routing_processed: true,
            ..create_ticket_request("x@wavext.io")
        },
    );

    let response: TicketRoutingResponse = update_ticket(
        &mut persistence,
        ticket_id,
        UpdateTicketRequest {
            name: Some(None),
            ..UpdateTicketRequest::default()
        },
        &create_test_cause(),
    )
    .unwrap();

    assert_eq!(response.routing.detail, "identity unchanged");
    assert_eq!(response.ticket.name, None);
    assert_eq!(response.ticket.team_id, None);
}

#[test]
fn test_unknown_ticket_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result: Result<TicketRoutingResponse, ApiError> = update_ticket(
        &mut persistence,
        42,
        UpdateTicketRequest {
            email: Some(Some(String::from("x@wavext.io"))),
            ..UpdateTicketRequest::default()
        },
        &create_test_cause(),
    );

    assert_eq!(
        result,
        Err(ApiError::ResourceNotFound {
            resource_type: String::from("Ticket"),
            message: String::from("Ticket 42 does not exist"),
        })
    );
}

#[test]
fn test_empty_update_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let ticket_id: i64 =
        create_stored_ticket(&mut persistence, create_ticket_request("x@wavext.io"));

    let result: Result<TicketRoutingResponse, ApiError> = update_ticket(
        &mut persistence,
        ticket_id,
        UpdateTicketRequest::default(),
        &create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "update"
    ));
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_cause, create_test_store};
use crate::{
    BLOCKED_RECIPIENTS_KEY, MessageEntry, OutboxEntry, OutboxState, Persistence, StoredAuditEvent,
};
use helpdesk_routing::{RoutingResult, on_create};
use helpdesk_routing_domain::{ENABLE_NOTIFICATIONS_KEY, PartnerId, TeamId, TicketDraft, TicketId};

fn create_and_persist(store: &mut Persistence, email: &str) -> RoutingResult {
    let ids: Vec<TicketId> = store.allocate_ticket_ids(1);
    let draft: TicketDraft = TicketDraft {
        name: Some(String::from("Email bounced")),
        identity_email: Some(String::from(email)),
        ..TicketDraft::default()
    };
    let mut results: Vec<RoutingResult> = on_create(
        vec![(ids[0], draft)],
        &store.collaborators(),
        &create_test_cause(),
    );
    let result: RoutingResult = results.remove(0);
    store.persist_routing_result(&result);
    result
}

#[test]
fn test_internal_ticket_routed_through_store() {
    let mut store: Persistence = create_test_store();

    let result: RoutingResult = create_and_persist(&mut store, "dev@wavext.dev");

    assert!(result.ticket.is_internal());
    assert_eq!(result.ticket.team(), Some(TeamId::new(1)));

    let outbox: Vec<OutboxEntry> = store.outbox_entries().unwrap();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].to, vec![String::from("ann@wavext.io")]);
    assert_eq!(outbox[0].from, "helpdesk@wavext.io");
    assert_eq!(outbox[0].reply_to, "helpdesk@wavext.io");
    assert_eq!(outbox[0].state, OutboxState::Sent);

    let messages: Vec<MessageEntry> = store.message_entries().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].recipient, PartnerId::new(201));

    let events: Vec<StoredAuditEvent> = store.audit_events_for(result.ticket.id());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.event_id, Some(1));
}

#[test]
fn test_blocked_leader_records_exception_and_still_posts() {
    let mut store: Persistence = create_test_store();
    store.set_param(BLOCKED_RECIPIENTS_KEY, "bo@wavext.io");

    let result: RoutingResult = create_and_persist(&mut store, "client@example.org");

    assert!(result.ticket.routing_processed());
    assert_eq!(result.ticket.team(), Some(TeamId::new(2)));
    let outbox: Vec<OutboxEntry> = store.outbox_entries().unwrap();
    assert!(matches!(outbox[0].state, OutboxState::Exception { .. }));
    assert_eq!(store.message_entries().unwrap().len(), 1);
}

#[test]
fn test_disabled_notifications_leave_logs_empty() {
    let mut store: Persistence = create_test_store();
    store.set_param(ENABLE_NOTIFICATIONS_KEY, "no");

    let result: RoutingResult = create_and_persist(&mut store, "dev@wavext.io");

    assert!(result.ticket.routing_processed());
    assert!(store.outbox_entries().unwrap().is_empty());
    assert!(store.message_entries().unwrap().is_empty());
    assert_eq!(store.list_tickets().len(), 1);
}

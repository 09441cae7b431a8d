// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use helpdesk_routing_audit::Cause;
use helpdesk_routing_persistence::{Persistence, Seed};

use crate::{CreateTicketRequest, CreateTicketsRequest, create_tickets};

const TEST_SEED: &str = r#"{
    "teams": [
        {
            "id": 1,
            "name": "Internal Support",
            "leader": { "id": 101, "name": "Ann Lead", "email": "ann@wavext.io", "partner_id": 201 }
        },
        {
            "id": 2,
            "name": "Customer Care",
            "leader": { "id": 102, "name": "Bo Lead", "email": "bo@wavext.io", "partner_id": 202 }
        },
        { "id": 5, "name": "Escalations" }
    ],
    "named_teams": {
        "helpdesk_routing.internal_helpdesk_team": 1,
        "helpdesk_routing.external_helpdesk_team": 2
    },
    "templates": {
        "helpdesk_routing.ticket_assignment_email_template": {
            "to": ["{{leader.email}}"],
            "subject": "Ticket {{ticket.id}} assigned",
            "body_html": "<p>{{ticket.name}}</p>"
        }
    }
}"#;

pub fn create_test_persistence() -> Persistence {
    Persistence::from_seed(Seed::from_json(TEST_SEED).expect("test seed is valid"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

pub fn create_ticket_request(email: &str) -> CreateTicketRequest {
    CreateTicketRequest {
        name: Some(String::from("Badge not working")),
        email: Some(String::from(email)),
        ..CreateTicketRequest::default()
    }
}

/// Creates one ticket and returns its id.
pub fn create_stored_ticket(persistence: &mut Persistence, request: CreateTicketRequest) -> i64 {
    let response = create_tickets(
        persistence,
        CreateTicketsRequest {
            tickets: vec![request],
        },
        &create_test_cause(),
    )
    .expect("ticket creation succeeds");
    response.tickets[0].ticket.id
}

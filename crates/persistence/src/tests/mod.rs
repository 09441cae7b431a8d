// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod routing_tests;
mod seed_tests;

use helpdesk_routing_audit::Cause;
use helpdesk_routing_domain::{InternalDomains, Ticket, TicketDraft, TicketId};

use crate::{Persistence, Seed};

pub const TEST_SEED: &str = r#"{
    "params": {
        "helpdesk_routing.internal_domains": "wavext.io, wavext.dev"
    },
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
        { "id": 3, "name": "Unstaffed" }
    ],
    "named_teams": {
        "helpdesk_routing.internal_helpdesk_team": 1,
        "helpdesk_routing.external_helpdesk_team": 2
    },
    "templates": {
        "helpdesk_routing.ticket_assignment_email_template": {
            "to": ["{{leader.email}}"],
            "subject": "{{ticket.kind}} ticket {{ticket.id}} for {{team.name}}",
            "body_html": "<p>{{leader.name}}: {{ticket.name}} from {{ticket.email}}</p>"
        }
    }
}"#;

pub fn create_test_seed() -> Seed {
    Seed::from_json(TEST_SEED).expect("test seed is valid")
}

pub fn create_test_store() -> Persistence {
    Persistence::from_seed(create_test_seed())
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("test-cause"), String::from("Test operation"))
}

pub fn create_test_ticket(id: i64, email: &str) -> Ticket {
    let draft: TicketDraft = TicketDraft {
        name: Some(String::from("Printer jammed")),
        identity_email: Some(String::from(email)),
        ..TicketDraft::default()
    };
    Ticket::from_draft(TicketId::new(id), draft, &InternalDomains::default())
}

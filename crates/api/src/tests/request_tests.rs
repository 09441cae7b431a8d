// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CreateTicketRequest, CreateTicketsRequest, PartnerRequest, UpdateTicketRequest};

#[test]
fn test_update_distinguishes_missing_from_null() {
    let request: UpdateTicketRequest =
        serde_json::from_str(r#"{ "email": null, "team_id": 4 }"#).unwrap();

    assert_eq!(request.email, Some(None));
    assert_eq!(request.team_id, Some(Some(4)));
    assert_eq!(request.name, None);
    assert_eq!(request.partner, None);
    assert_eq!(request.routing_processed, None);
}

#[test]
fn test_update_with_partner_value() {
    let request: UpdateTicketRequest = serde_json::from_str(
        r#"{ "partner": { "id": 3, "name": "Eve", "email": "eve@wavext.io" } }"#,
    )
    .unwrap();

    let partner: PartnerRequest = request.partner.flatten().unwrap();
    assert_eq!(partner.id, 3);
    assert_eq!(partner.email.as_deref(), Some("eve@wavext.io"));
}

#[test]
fn test_create_request_defaults() {
    let request: CreateTicketsRequest =
        serde_json::from_str(r#"{ "tickets": [ { "email": "a@wavext.io" } ] }"#).unwrap();

    assert_eq!(
        request.tickets,
        vec![CreateTicketRequest {
            email: Some(String::from("a@wavext.io")),
            ..CreateTicketRequest::default()
        }]
    );
}

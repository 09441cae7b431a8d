// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, translate_domain_error, translate_persistence_error};
use helpdesk_routing_domain::{DomainError, TicketId};
use helpdesk_routing_persistence::PersistenceError;

#[test]
fn test_api_error_display() {
    let err: ApiError = ApiError::InvalidInput {
        field: String::from("tickets"),
        message: String::from("At least one ticket is required"),
    };
    assert_eq!(
        err.to_string(),
        "Invalid input for field 'tickets': At least one ticket is required"
    );

    let err: ApiError = ApiError::ResourceNotFound {
        resource_type: String::from("Ticket"),
        message: String::from("Ticket 4 does not exist"),
    };
    assert_eq!(err.to_string(), "Ticket not found: Ticket 4 does not exist");

    let err: ApiError = ApiError::Internal {
        message: String::from("lock poisoned"),
    };
    assert_eq!(err.to_string(), "Internal error: lock poisoned");
}

#[test]
fn test_missing_ticket_translates_to_not_found() {
    let err: ApiError = translate_persistence_error(PersistenceError::TicketNotFound(
        TicketId::new(4),
    ));

    assert_eq!(
        err,
        ApiError::ResourceNotFound {
            resource_type: String::from("Ticket"),
            message: String::from("Ticket 4 does not exist"),
        }
    );
}

#[test]
fn test_poisoned_lock_translates_to_internal() {
    let err: ApiError =
        translate_persistence_error(PersistenceError::LockPoisoned(String::from("outbox")));

    assert!(matches!(err, ApiError::Internal { .. }));
}

#[test]
fn test_invalid_team_id_translates_to_invalid_input() {
    let err: ApiError = translate_domain_error(DomainError::InvalidTeamId {
        key: String::from("helpdesk_routing.internal_team_id"),
        value: String::from("abc"),
    });

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("helpdesk_routing.internal_team_id"),
            message: String::from("'abc' is not a team id"),
        }
    );
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for helpdesk ticket routing.
//!
//! Requests arrive as DTOs, are validated and translated into domain types,
//! run through the routing hooks against the store, and leave as DTOs.
//! Domain and store errors never cross this boundary untranslated.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    create_tickets, get_audit_trail, get_ticket, list_messages, list_outbox, list_tickets,
    update_ticket,
};
pub use request_response::{
    AuditEventInfo, AuditTrailResponse, CreateTicketRequest, CreateTicketsRequest,
    CreateTicketsResponse, ListMessagesResponse, ListOutboxResponse, ListTicketsResponse,
    PartnerRequest, RoutingInfo, TicketInfo, TicketRoutingResponse, UpdateTicketRequest,
};

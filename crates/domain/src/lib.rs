// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod classify;
mod error;
mod notice;
mod settings;
mod types;
mod update;
mod validation;

#[cfg(test)]
mod tests;

pub use classify::{InternalDomains, compute_email_domain, compute_is_internal, extract_domain};
pub use error::DomainError;
pub use notice::{AssignmentNotice, GUEST_PLACEHOLDER, NO_EMAIL_PLACEHOLDER, NO_SUBJECT_PLACEHOLDER};
pub use settings::{
    ASSIGNMENT_TEMPLATE_REF, DEFAULT_ENABLE_NOTIFICATIONS, DEFAULT_INTERNAL_DOMAINS,
    ENABLE_NOTIFICATIONS_KEY, EXTERNAL_TEAM_ID_KEY, EXTERNAL_TEAM_REF, FALLBACK_SENDER_EMAIL,
    INTERNAL_DOMAINS_KEY, INTERNAL_TEAM_ID_KEY, INTERNAL_TEAM_REF, NOTIFICATION_SENDER_KEY,
    RoutingSettings, TeamOverride, parse_enabled_flag,
};
pub use types::{
    Classification, Partner, PartnerId, RoutingState, Team, TeamId, Ticket, TicketDraft, TicketId,
    User, UserId,
};
pub use update::{TicketField, TicketUpdate};
pub use validation::{validate_reference_name, validate_team, validate_unique_team_ids};

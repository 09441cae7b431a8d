// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Routing core for help-desk tickets.
//!
//! Whenever a ticket is created, or its email or partner link changes, the
//! router:
//!
//! 1. classifies the ticket as internal or external from its email domain,
//! 2. fills an empty team slot from the configured override or the named
//!    default team for that side,
//! 3. notifies the team leader by email and in-app message, each on its own
//!    failure boundary,
//! 4. marks the ticket as routed.
//!
//! Nothing in this crate returns an error to the caller of [`on_create`] or
//! [`on_update`]. Every collaborator failure is logged and reported in the
//! returned [`RoutingOutcome`].

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

mod error;
mod notify;
mod ports;
mod route;
mod selector;
mod state;
mod trigger;

#[cfg(test)]
mod tests;

pub use error::{DeliveryError, RenderError};
pub use notify::{
    ChannelOutcome, NotificationReport, SuppressReason, notify_team_leader, resolve_sender,
};
pub use ports::{
    Collaborators, ConfigStore, InAppMessage, MailTransport, MessageStream, OutgoingMail,
    RenderedMail, TeamRepository, TemplateRenderer,
};
pub use route::{on_create, on_update};
pub use selector::{TeamSelection, TeamSource, assign_team, select_team};
pub use state::{RoutingOutcome, RoutingResult, SkipReason};
pub use trigger::Trigger;

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Interfaces to the collaborators the router depends on.
//!
//! Lookups are total: a missing record is `None`, never an error.

use crate::error::{DeliveryError, RenderError};
use helpdesk_routing_domain::{PartnerId, RoutingSettings, Team, TeamId, Ticket, TicketId};

/// Read-only access to configuration parameters.
pub trait ConfigStore {
    /// Returns the stored value of `key`, or `None` when unset.
    fn get_param(&self, key: &str) -> Option<String>;

    /// Returns the stored value of `key`, or `default` when unset.
    fn get_string(&self, key: &str, default: &str) -> String {
        self.get_param(key).unwrap_or_else(|| default.to_string())
    }

    /// Takes a typed snapshot of every routing parameter.
    fn routing_settings(&self) -> RoutingSettings {
        RoutingSettings::from_lookup(|key| self.get_param(key))
    }
}

/// Lookup of support teams.
pub trait TeamRepository {
    /// Resolves a team by its identifier.
    fn resolve_by_id(&self, id: TeamId) -> Option<Team>;

    /// Resolves a team through a named reference.
    fn resolve_by_name(&self, name: &str) -> Option<Team>;
}

/// Email fields produced by rendering a template for a ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedMail {
    /// The template's sender, if it defines one.
    pub from: Option<String>,
    /// The template's recipients.
    pub to: Vec<String>,
    /// The rendered subject.
    pub subject: String,
    /// The rendered HTML body.
    pub body_html: String,
}

/// Renders email templates.
pub trait TemplateRenderer {
    /// Renders `template_name` for a ticket routed to `team`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::TemplateNotFound` if no such template exists, or
    /// `RenderError::RenderFailed` if it cannot be rendered.
    fn render(
        &self,
        template_name: &str,
        ticket: &Ticket,
        team: &Team,
    ) -> Result<RenderedMail, RenderError>;
}

/// A fully addressed email ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// The ticket the email is about.
    pub ticket_id: TicketId,
    /// The sender address.
    pub from: String,
    /// The recipients.
    pub to: Vec<String>,
    /// Where replies go. Never the customer's address.
    pub reply_to: String,
    /// The subject line.
    pub subject: String,
    /// The HTML body.
    pub body_html: String,
}

/// Submits outgoing emails.
pub trait MailTransport {
    /// Submits one email.
    ///
    /// # Errors
    ///
    /// Returns a `DeliveryError` if the message could not be handed over.
    fn send(&self, mail: &OutgoingMail) -> Result<(), DeliveryError>;
}

/// A notification posted on a ticket's discussion stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InAppMessage {
    /// The ticket whose stream receives the post.
    pub ticket_id: TicketId,
    /// The partner notified by the post.
    pub recipient: PartnerId,
    /// The message subject.
    pub subject: String,
    /// The plain-text body.
    pub body: String,
}

/// Posts in-app notifications.
pub trait MessageStream {
    /// Posts one message.
    ///
    /// # Errors
    ///
    /// Returns a `DeliveryError` if the post could not be recorded.
    fn post(&self, message: &InAppMessage) -> Result<(), DeliveryError>;
}

/// Every collaborator a routing run needs, borrowed for the run.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    /// Configuration parameters.
    pub config: &'a dyn ConfigStore,
    /// Team lookup.
    pub teams: &'a dyn TeamRepository,
    /// Email templates.
    pub templates: &'a dyn TemplateRenderer,
    /// Mail submission.
    pub mail: &'a dyn MailTransport,
    /// In-app messages.
    pub messages: &'a dyn MessageStream,
}

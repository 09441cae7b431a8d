// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::classify::{InternalDomains, compute_email_domain, compute_is_internal};
use crate::update::TicketUpdate;
use serde::{Deserialize, Serialize};

/// Identifier of a ticket record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(i64);

impl TicketId {
    /// Creates a new `TicketId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a support team record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(i64);

impl TeamId {
    /// Creates a new `TeamId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an application user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Creates a new `UserId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

/// Identifier of a partner (contact) record.
///
/// In-app messages are addressed to partners, not users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartnerId(i64);

impl PartnerId {
    /// Creates a new `PartnerId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

/// The identity record a ticket may be linked to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    /// The partner identifier.
    pub id: PartnerId,
    /// The display name of the partner.
    pub name: String,
    /// The partner's email address, if known.
    #[serde(default)]
    pub email: Option<String>,
}

impl Partner {
    /// Creates a new `Partner`.
    #[must_use]
    pub const fn new(id: PartnerId, name: String, email: Option<String>) -> Self {
        Self { id, name, email }
    }
}

/// An application user, used here as a team leader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user identifier.
    pub id: UserId,
    /// The user's display name.
    pub name: String,
    /// The user's email address, if known.
    #[serde(default)]
    pub email: Option<String>,
    /// The partner record that receives the user's in-app messages.
    pub partner_id: PartnerId,
}

impl User {
    /// Creates a new `User`.
    #[must_use]
    pub const fn new(
        id: UserId,
        name: String,
        email: Option<String>,
        partner_id: PartnerId,
    ) -> Self {
        Self {
            id,
            name,
            email,
            partner_id,
        }
    }
}

/// A support team that tickets can be routed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// The team identifier.
    pub id: TeamId,
    /// The team's display name.
    pub name: String,
    /// The team leader, notified when a ticket is routed to the team.
    #[serde(default)]
    pub leader: Option<User>,
}

impl Team {
    /// Creates a new `Team`.
    #[must_use]
    pub const fn new(id: TeamId, name: String, leader: Option<User>) -> Self {
        Self { id, name, leader }
    }
}

/// Whether a ticket originates from inside or outside the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// The submitter's email domain is one of the configured internal domains.
    Internal,
    /// Everything else, including tickets without a usable email.
    External,
}

impl Classification {
    /// Maps the stored boolean flag to a classification.
    #[must_use]
    pub const fn from_is_internal(is_internal: bool) -> Self {
        if is_internal {
            Self::Internal
        } else {
            Self::External
        }
    }

    /// Lower-case name used in logs and message bodies.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
        }
    }

    /// Capitalized name used in message subjects.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Internal => "Internal",
            Self::External => "External",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a ticket stands in its routing lifecycle.
///
/// Derived from the processed flag and the team slot; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoutingState {
    /// Routing has not run yet.
    Unrouted,
    /// Routing ran and the ticket has a team.
    Routed,
    /// Routing ran but the team slot is empty, either because no team could
    /// be selected or because someone cleared it afterwards.
    Unassigned,
}

impl RoutingState {
    /// Lower-case name used in API responses and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unrouted => "unrouted",
            Self::Routed => "routed",
            Self::Unassigned => "unassigned",
        }
    }
}

/// The fields a caller supplies when creating a ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketDraft {
    /// The ticket subject.
    pub name: Option<String>,
    /// The email address typed on the ticket itself.
    pub identity_email: Option<String>,
    /// The linked identity record.
    pub partner: Option<Partner>,
    /// A team chosen by the caller; the router never overrides it.
    pub team: Option<TeamId>,
    /// Set when the caller has already routed the ticket elsewhere.
    pub routing_processed: bool,
}

/// A help-desk ticket with its derived classification.
///
/// `email_domain` and `is_internal` are only ever written by
/// [`Ticket::reclassify`], which runs whenever the identity fields change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    id: TicketId,
    name: Option<String>,
    identity_email: Option<String>,
    partner: Option<Partner>,
    email_domain: Option<String>,
    is_internal: bool,
    team: Option<TeamId>,
    routing_processed: bool,
}

impl Ticket {
    /// Builds a stored ticket from a draft and classifies it.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier assigned by the store
    /// * `draft` - The caller-supplied fields
    /// * `internal_domains` - The configured internal domain set
    #[must_use]
    pub fn from_draft(
        id: TicketId,
        draft: TicketDraft,
        internal_domains: &InternalDomains,
    ) -> Self {
        let mut ticket: Self = Self {
            id,
            name: draft.name,
            identity_email: draft.identity_email,
            partner: draft.partner,
            email_domain: None,
            is_internal: false,
            team: draft.team,
            routing_processed: draft.routing_processed,
        };
        ticket.reclassify(internal_domains);
        ticket
    }

    /// Returns the ticket identifier.
    #[must_use]
    pub const fn id(&self) -> TicketId {
        self.id
    }

    /// Returns the ticket subject, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the subject, or `#<id>` when the ticket has none.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .map_or_else(|| format!("#{}", self.id), String::from)
    }

    /// Returns the email typed on the ticket, if any.
    #[must_use]
    pub fn identity_email(&self) -> Option<&str> {
        self.identity_email.as_deref()
    }

    /// Returns the linked identity record, if any.
    #[must_use]
    pub const fn partner(&self) -> Option<&Partner> {
        self.partner.as_ref()
    }

    /// Returns the linked partner's email, if any.
    #[must_use]
    pub fn partner_email(&self) -> Option<&str> {
        self.partner.as_ref().and_then(|p| p.email.as_deref())
    }

    /// Returns the address the customer is reachable at.
    ///
    /// The ticket's own email wins over the partner's when it is non-empty.
    #[must_use]
    pub fn customer_email(&self) -> Option<&str> {
        let is_present = |email: &&str| !email.trim().is_empty();
        self.identity_email
            .as_deref()
            .filter(is_present)
            .or_else(|| self.partner_email().filter(is_present))
    }

    /// Returns the derived email domain.
    #[must_use]
    pub fn email_domain(&self) -> Option<&str> {
        self.email_domain.as_deref()
    }

    /// Returns whether the ticket is classified as internal.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        self.is_internal
    }

    /// Returns the classification as an enum.
    #[must_use]
    pub const fn classification(&self) -> Classification {
        Classification::from_is_internal(self.is_internal)
    }

    /// Returns the assigned team, if any.
    #[must_use]
    pub const fn team(&self) -> Option<TeamId> {
        self.team
    }

    /// Returns whether routing has been processed.
    #[must_use]
    pub const fn routing_processed(&self) -> bool {
        self.routing_processed
    }

    /// Returns the derived routing lifecycle state.
    #[must_use]
    pub const fn routing_state(&self) -> RoutingState {
        match (self.routing_processed, self.team) {
            (false, _) => RoutingState::Unrouted,
            (true, Some(_)) => RoutingState::Routed,
            (true, None) => RoutingState::Unassigned,
        }
    }

    /// Recomputes `email_domain` and `is_internal` from the identity fields.
    ///
    /// Returns `true` when the classification flag changed.
    pub fn reclassify(&mut self, internal_domains: &InternalDomains) -> bool {
        let domain: Option<String> =
            compute_email_domain(self.identity_email.as_deref(), self.partner_email());
        let is_internal: bool = compute_is_internal(domain.as_deref(), internal_domains);
        let changed: bool = is_internal != self.is_internal;
        self.email_domain = domain;
        self.is_internal = is_internal;
        changed
    }

    /// Fills the team slot if it is empty.
    ///
    /// Returns `false` and leaves the ticket untouched when a team is already set.
    pub const fn assign_team(&mut self, team: TeamId) -> bool {
        if self.team.is_some() {
            return false;
        }
        self.team = Some(team);
        true
    }

    /// Marks routing as processed.
    pub const fn mark_routing_processed(&mut self) {
        self.routing_processed = true;
    }

    /// Writes the fields carried by `update`, reclassifying when identity
    /// fields are among them.
    pub fn apply_update(&mut self, update: &TicketUpdate, internal_domains: &InternalDomains) {
        if let Some(name) = &update.name {
            self.name.clone_from(name);
        }
        if let Some(identity_email) = &update.identity_email {
            self.identity_email.clone_from(identity_email);
        }
        if let Some(partner) = &update.partner {
            self.partner.clone_from(partner);
        }
        if let Some(team) = update.team {
            self.team = team;
        }
        if let Some(processed) = update.routing_processed {
            self.routing_processed = processed;
        }
        if update.touches_identity() {
            self.reclassify(internal_domains);
        }
    }
}

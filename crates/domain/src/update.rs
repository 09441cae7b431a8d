// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Partner, TeamId};

/// A ticket field that an update can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketField {
    /// The ticket subject.
    Name,
    /// The email typed on the ticket.
    IdentityEmail,
    /// The link to the identity record.
    Partner,
    /// The assigned team.
    Team,
    /// The routing processed flag.
    RoutingProcessed,
}

impl TicketField {
    /// Converts this field to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::IdentityEmail => "identity_email",
            Self::Partner => "partner",
            Self::Team => "team",
            Self::RoutingProcessed => "routing_processed",
        }
    }

    /// Returns whether a change to this field can alter the classification.
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        matches!(self, Self::IdentityEmail | Self::Partner)
    }
}

/// A partial write to an existing ticket.
///
/// Each `Some` carries a new value; the nested `Option` on nullable fields
/// distinguishes "clear the field" (`Some(None)`) from "leave it alone" (`None`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketUpdate {
    /// New subject.
    pub name: Option<Option<String>>,
    /// New ticket email.
    pub identity_email: Option<Option<String>>,
    /// New identity record link.
    pub partner: Option<Option<Partner>>,
    /// New team; `Some(None)` clears the slot.
    pub team: Option<Option<TeamId>>,
    /// Explicit value for the processed flag.
    pub routing_processed: Option<bool>,
}

impl TicketUpdate {
    /// Lists the fields this update writes, in declaration order.
    #[must_use]
    pub fn changed_fields(&self) -> Vec<TicketField> {
        let mut fields: Vec<TicketField> = Vec::new();
        if self.name.is_some() {
            fields.push(TicketField::Name);
        }
        if self.identity_email.is_some() {
            fields.push(TicketField::IdentityEmail);
        }
        if self.partner.is_some() {
            fields.push(TicketField::Partner);
        }
        if self.team.is_some() {
            fields.push(TicketField::Team);
        }
        if self.routing_processed.is_some() {
            fields.push(TicketField::RoutingProcessed);
        }
        fields
    }

    /// Returns whether the update writes the ticket email or the partner link.
    #[must_use]
    pub const fn touches_identity(&self) -> bool {
        self.identity_email.is_some() || self.partner.is_some()
    }

    /// Returns whether the caller explicitly marks routing as processed.
    #[must_use]
    pub const fn sets_routing_processed(&self) -> bool {
        matches!(self.routing_processed, Some(true))
    }

    /// Returns whether the update writes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.identity_email.is_none()
            && self.partner.is_none()
            && self.team.is_none()
            && self.routing_processed.is_none()
    }
}

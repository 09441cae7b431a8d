// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::notify::NotificationReport;
use crate::selector::TeamSelection;
use helpdesk_routing_audit::AuditEvent;
use helpdesk_routing_domain::{Classification, Ticket};

/// Why a lifecycle event did not start a routing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The ticket was created already marked as processed.
    AlreadyProcessed,
    /// The ticket already has a team.
    TeamAlreadyAssigned,
    /// The update did not touch the email or the partner link.
    IdentityUnchanged,
    /// The update itself sets the processed flag.
    ProcessedByCaller,
}

impl SkipReason {
    /// Converts this reason to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AlreadyProcessed => "already processed",
            Self::TeamAlreadyAssigned => "team already assigned",
            Self::IdentityUnchanged => "identity unchanged",
            Self::ProcessedByCaller => "processed flag set by caller",
        }
    }
}

/// What a lifecycle hook did with a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingOutcome {
    /// Routing did not run.
    Skipped(SkipReason),
    /// Routing ran.
    Routed {
        /// The classification the ticket was routed under.
        classification: Classification,
        /// The team selection.
        selection: TeamSelection,
        /// The leader notification.
        notification: NotificationReport,
    },
}

impl RoutingOutcome {
    /// Returns whether routing ran.
    #[must_use]
    pub const fn is_routed(&self) -> bool {
        matches!(self, Self::Routed { .. })
    }
}

/// The result of a lifecycle hook for one ticket.
///
/// The caller persists `ticket` and, when present, `audit_event`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingResult {
    /// The ticket after classification and routing.
    pub ticket: Ticket,
    /// What the router did.
    pub outcome: RoutingOutcome,
    /// The audit record of the routing run, when one ran.
    pub audit_event: Option<AuditEvent>,
}

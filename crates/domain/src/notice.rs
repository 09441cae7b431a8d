// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Classification, Ticket};

/// Shown in place of the customer name when the ticket has no partner.
pub const GUEST_PLACEHOLDER: &str = "Guest";
/// Shown in place of the customer email when none is known.
pub const NO_EMAIL_PLACEHOLDER: &str = "No email";
/// Shown in place of the subject when the ticket has none.
pub const NO_SUBJECT_PLACEHOLDER: &str = "No subject";

/// The plain-text in-app message posted to a team leader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentNotice {
    /// The message subject.
    pub subject: String,
    /// The plain-text message body.
    pub body: String,
}

impl AssignmentNotice {
    /// Composes the notice for a freshly routed ticket.
    #[must_use]
    pub fn for_ticket(ticket: &Ticket) -> Self {
        let classification: Classification = ticket.classification();
        let customer: &str = ticket
            .partner()
            .map_or(GUEST_PLACEHOLDER, |p| p.name.as_str());
        let email: &str = ticket.customer_email().unwrap_or(NO_EMAIL_PLACEHOLDER);
        let subject_line: &str = ticket
            .name()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(NO_SUBJECT_PLACEHOLDER);

        let body: String = format!(
            "New {} ticket assigned to your team.\n\n\
             Ticket: {}\n\
             Customer: {customer}\n\
             Email: {email}\n\
             Subject: {subject_line}",
            classification.as_str(),
            ticket.display_name()
        );

        Self {
            subject: format!("New {} Ticket Assigned", classification.label()),
            body,
        }
    }
}

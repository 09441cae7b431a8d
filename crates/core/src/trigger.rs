// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use helpdesk_routing_domain::TicketField;

/// The lifecycle event that started a routing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// The ticket was just created.
    Created,
    /// Fields of an existing ticket were written.
    Updated {
        /// The fields the update wrote.
        fields: Vec<TicketField>,
    },
}

impl Trigger {
    /// Short name used in logs and audit details.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Created => String::from("create"),
            Self::Updated { fields } => {
                let names: Vec<&str> = fields.iter().map(TicketField::as_str).collect();
                format!("update of {}", names.join(", "))
            }
        }
    }
}

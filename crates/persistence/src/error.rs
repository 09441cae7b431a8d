// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use helpdesk_routing_domain::{DomainError, TicketId};
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The seed file could not be read.
    #[error("Failed to read seed file '{path}': {source}")]
    SeedRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The seed document is not valid JSON for the expected shape.
    #[error("Failed to parse seed document: {0}")]
    SeedParse(#[from] serde_json::Error),

    /// The seed document parsed but describes an invalid setup.
    #[error("Invalid seed document: {0}")]
    InvalidSeed(#[from] DomainError),

    /// The requested ticket does not exist.
    #[error("Ticket {0} not found")]
    TicketNotFound(TicketId),

    /// A shared log was poisoned by a panicking writer.
    #[error("Store lock poisoned: {0}")]
    LockPoisoned(String),
}

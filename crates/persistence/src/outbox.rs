// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Outbox and message log.
//!
//! Both logs record every submission, including rejected ones, so the result
//! of a notification can be inspected after the routing run.

use std::sync::{Mutex, MutexGuard};

use helpdesk_routing::{DeliveryError, InAppMessage, MailTransport, MessageStream, OutgoingMail};
use helpdesk_routing_domain::{PartnerId, TicketId};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;
use tracing::{debug, warn};

use crate::Persistence;

/// Comma-separated recipient addresses the outbox refuses to deliver to.
pub const BLOCKED_RECIPIENTS_KEY: &str = "helpdesk_routing.blocked_recipients";

/// Delivery state of an outbox entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OutboxState {
    /// The mail was accepted.
    Sent,
    /// The mail was refused.
    Exception {
        /// Why delivery failed.
        reason: String,
    },
}

/// One mail submitted to the outbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboxEntry {
    /// Outbox sequence number, starting at 1.
    pub id: i64,
    /// Ticket the mail was sent for.
    pub ticket_id: TicketId,
    /// Resolved sender address.
    pub from: String,
    /// Recipient addresses.
    pub to: Vec<String>,
    /// Reply-to address, always the sender.
    pub reply_to: String,
    /// Rendered subject line.
    pub subject: String,
    /// Rendered HTML body.
    pub body_html: String,
    /// Delivery outcome, serialized inline as `state` and `reason`.
    #[serde(flatten)]
    pub state: OutboxState,
    /// ISO 8601 submission time.
    pub created_at: String,
}

/// One in-app message posted to a ticket thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageEntry {
    /// Message sequence number, starting at 1.
    pub id: i64,
    /// Ticket whose thread received the message.
    pub ticket_id: TicketId,
    /// Partner notified by the message.
    pub recipient: PartnerId,
    /// Message subject.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// ISO 8601 posting time.
    pub posted_at: String,
}

/// Current time formatted the way every stored timestamp is.
pub fn now_timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Iso8601::DEFAULT)
        .unwrap_or_else(|_| String::from("unknown"))
}

fn lock<T>(log: &Mutex<T>) -> Result<MutexGuard<'_, T>, DeliveryError> {
    log.lock()
        .map_err(|e| DeliveryError::Unavailable(format!("log lock poisoned: {e}")))
}

impl Persistence {
    fn blocked_recipients(&self) -> Vec<String> {
        self.params
            .get(BLOCKED_RECIPIENTS_KEY)
            .map(|raw| {
                raw.split(',')
                    .map(|entry| entry.trim().to_lowercase())
                    .filter(|entry| !entry.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl MailTransport for Persistence {
    fn send(&self, mail: &OutgoingMail) -> Result<(), DeliveryError> {
        let blocked: Vec<String> = self.blocked_recipients();
        let refused: Option<&String> = mail
            .to
            .iter()
            .find(|recipient| blocked.contains(&recipient.trim().to_lowercase()));
        let result: Result<(), DeliveryError> = refused.map_or(Ok(()), |recipient| {
            Err(DeliveryError::Rejected(format!(
                "recipient {recipient} is blocked"
            )))
        });

        let mut outbox: MutexGuard<'_, Vec<OutboxEntry>> = lock(&self.outbox)?;
        let state: OutboxState = match &result {
            Ok(()) => OutboxState::Sent,
            Err(err) => OutboxState::Exception {
                reason: err.to_string(),
            },
        };
        let id: i64 = i64::try_from(outbox.len()).unwrap_or(i64::MAX) + 1;
        outbox.push(OutboxEntry {
            id,
            ticket_id: mail.ticket_id,
            from: mail.from.clone(),
            to: mail.to.clone(),
            reply_to: mail.reply_to.clone(),
            subject: mail.subject.clone(),
            body_html: mail.body_html.clone(),
            state,
            created_at: now_timestamp(),
        });
        drop(outbox);

        if let Err(err) = &result {
            warn!(outbox_id = id, ticket_id = %mail.ticket_id, error = %err, "Mail refused");
        } else {
            debug!(outbox_id = id, ticket_id = %mail.ticket_id, "Queued mail");
        }
        result
    }
}

impl MessageStream for Persistence {
    fn post(&self, message: &InAppMessage) -> Result<(), DeliveryError> {
        let mut messages: MutexGuard<'_, Vec<MessageEntry>> = lock(&self.messages)?;
        let id: i64 = i64::try_from(messages.len()).unwrap_or(i64::MAX) + 1;
        messages.push(MessageEntry {
            id,
            ticket_id: message.ticket_id,
            recipient: message.recipient,
            subject: message.subject.clone(),
            body: message.body.clone(),
            posted_at: now_timestamp(),
        });
        drop(messages);

        debug!(message_id = id, ticket_id = %message.ticket_id, "Posted message");
        Ok(())
    }
}

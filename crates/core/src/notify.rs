// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RenderError;
use crate::ports::{Collaborators, InAppMessage, OutgoingMail, RenderedMail};
use helpdesk_routing_domain::{
    ASSIGNMENT_TEMPLATE_REF, AssignmentNotice, FALLBACK_SENDER_EMAIL, RoutingSettings, Team,
    Ticket, User,
};
use tracing::{debug, error, info, warn};

/// Why no notification was attempted at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// The kill-switch parameter is off.
    Disabled,
    /// The ticket has no team.
    NoTeam,
    /// The team has no leader.
    NoLeader,
}

impl SuppressReason {
    /// Converts this reason to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "notifications disabled",
            Self::NoTeam => "no team",
            Self::NoLeader => "team has no leader",
        }
    }
}

/// What happened on one notification channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelOutcome {
    /// The message was handed to the collaborator.
    Sent,
    /// The channel was not attempted.
    Skipped(String),
    /// The attempt failed.
    Failed(String),
}

impl ChannelOutcome {
    /// Returns whether the message was handed over.
    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    fn describe(&self) -> String {
        match self {
            Self::Sent => String::from("sent"),
            Self::Skipped(reason) => format!("skipped ({reason})"),
            Self::Failed(reason) => format!("failed ({reason})"),
        }
    }
}

/// The result of one leader notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationReport {
    /// The entry guard stopped the notification before any channel ran.
    Suppressed(SuppressReason),
    /// Both channels ran, each with its own outcome.
    Attempted {
        /// The email channel.
        email: ChannelOutcome,
        /// The in-app channel.
        in_app: ChannelOutcome,
    },
}

impl NotificationReport {
    /// One-line summary used in audit details.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Suppressed(reason) => format!("notification suppressed: {}", reason.as_str()),
            Self::Attempted { email, in_app } => {
                format!("email {}, in-app {}", email.describe(), in_app.describe())
            }
        }
    }
}

/// Picks the sender address for the assignment email.
///
/// The configured sender wins, then the template's own sender, then
/// [`FALLBACK_SENDER_EMAIL`].
#[must_use]
pub fn resolve_sender(configured: Option<&str>, template_from: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| template_from.map(str::trim).filter(|s| !s.is_empty()))
        .unwrap_or(FALLBACK_SENDER_EMAIL)
        .to_string()
}

/// Notifies the leader of `team` that `ticket` was routed to it.
///
/// The email and the in-app post run independently: a failure on one never
/// prevents the other. Nothing is returned as an error; failures are logged
/// and reported per channel.
#[must_use]
pub fn notify_team_leader(
    ticket: &Ticket,
    team: Option<&Team>,
    settings: &RoutingSettings,
    collaborators: &Collaborators<'_>,
) -> NotificationReport {
    if !settings.notifications_enabled {
        info!(ticket_id = %ticket.id(), "Notifications disabled by system parameter");
        return NotificationReport::Suppressed(SuppressReason::Disabled);
    }

    let Some(team) = team else {
        warn!(ticket_id = %ticket.id(), "No team to notify for ticket");
        return NotificationReport::Suppressed(SuppressReason::NoTeam);
    };

    let Some(leader) = team.leader.as_ref() else {
        warn!(ticket_id = %ticket.id(), team_id = %team.id, "No team leader found for ticket");
        return NotificationReport::Suppressed(SuppressReason::NoLeader);
    };

    debug!(
        ticket_id = %ticket.id(),
        leader_id = leader.id.value(),
        leader = %leader.name,
        "Team leader identified"
    );

    let email: ChannelOutcome =
        send_assignment_email(ticket, team, leader, settings, collaborators);
    let in_app: ChannelOutcome = post_in_app_notice(ticket, leader, collaborators);

    NotificationReport::Attempted { email, in_app }
}

fn send_assignment_email(
    ticket: &Ticket,
    team: &Team,
    leader: &User,
    settings: &RoutingSettings,
    collaborators: &Collaborators<'_>,
) -> ChannelOutcome {
    let render_result: Result<RenderedMail, RenderError> = collaborators
        .templates
        .render(ASSIGNMENT_TEMPLATE_REF, ticket, team);
    let rendered: RenderedMail = match render_result {
        Ok(rendered) => rendered,
        Err(err @ RenderError::TemplateNotFound(_)) => {
            error!(
                ticket_id = %ticket.id(),
                error = %err,
                "Email template missing, skipping email"
            );
            return ChannelOutcome::Skipped(err.to_string());
        }
        Err(err) => {
            error!(ticket_id = %ticket.id(), error = %err, "Email rendering failed");
            return ChannelOutcome::Failed(err.to_string());
        }
    };

    let from: String = resolve_sender(settings.sender_email.as_deref(), rendered.from.as_deref());
    let to: Vec<String> = if rendered.to.is_empty() {
        leader.email.iter().cloned().collect()
    } else {
        rendered.to
    };
    if to.is_empty() {
        warn!(
            ticket_id = %ticket.id(),
            leader_id = leader.id.value(),
            "No recipient for assignment email"
        );
        return ChannelOutcome::Skipped(String::from("no recipient address"));
    }

    let mail: OutgoingMail = OutgoingMail {
        ticket_id: ticket.id(),
        reply_to: from.clone(),
        from,
        to,
        subject: rendered.subject,
        body_html: rendered.body_html,
    };

    match collaborators.mail.send(&mail) {
        Ok(()) => {
            info!(
                ticket_id = %ticket.id(),
                from = %mail.from,
                to = %mail.to.join(","),
                "Sent assignment email to team leader"
            );
            ChannelOutcome::Sent
        }
        Err(err) => {
            error!(ticket_id = %ticket.id(), error = %err, "Assignment email failed");
            ChannelOutcome::Failed(err.to_string())
        }
    }
}

fn post_in_app_notice(
    ticket: &Ticket,
    leader: &User,
    collaborators: &Collaborators<'_>,
) -> ChannelOutcome {
    let notice: AssignmentNotice = AssignmentNotice::for_ticket(ticket);
    let message: InAppMessage = InAppMessage {
        ticket_id: ticket.id(),
        recipient: leader.partner_id,
        subject: notice.subject,
        body: notice.body,
    };

    match collaborators.messages.post(&message) {
        Ok(()) => {
            info!(ticket_id = %ticket.id(), leader = %leader.name, "Posted in-app notification");
            ChannelOutcome::Sent
        }
        Err(err) => {
            error!(ticket_id = %ticket.id(), error = %err, "In-app notification failed");
            ChannelOutcome::Failed(err.to_string())
        }
    }
}

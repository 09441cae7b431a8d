// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Configuration keys, defaults, and the typed settings snapshot.

use crate::classify::InternalDomains;
use crate::error::DomainError;
use crate::types::{Classification, TeamId};

/// Comma-separated list of internal email domains.
pub const INTERNAL_DOMAINS_KEY: &str = "helpdesk_routing.internal_domains";
/// Team id override for internal tickets.
pub const INTERNAL_TEAM_ID_KEY: &str = "helpdesk_routing.internal_team_id";
/// Team id override for external tickets.
pub const EXTERNAL_TEAM_ID_KEY: &str = "helpdesk_routing.external_team_id";
/// Global notification kill-switch.
pub const ENABLE_NOTIFICATIONS_KEY: &str = "helpdesk_routing.enable_notifications";
/// Forced sender address for notification emails.
pub const NOTIFICATION_SENDER_KEY: &str = "helpdesk_routing.notification_sender_email";

/// Used when no internal domain list is configured.
pub const DEFAULT_INTERNAL_DOMAINS: &str = "wavext.io";
/// Used when the kill-switch is not configured.
pub const DEFAULT_ENABLE_NOTIFICATIONS: &str = "True";
/// Sender used when neither the configuration nor the template provides one.
pub const FALLBACK_SENDER_EMAIL: &str = "helpdesk@wavext.io";

/// Named reference of the default internal team.
pub const INTERNAL_TEAM_REF: &str = "helpdesk_routing.internal_helpdesk_team";
/// Named reference of the default external team.
pub const EXTERNAL_TEAM_REF: &str = "helpdesk_routing.external_helpdesk_team";
/// Named reference of the assignment email template.
pub const ASSIGNMENT_TEMPLATE_REF: &str = "helpdesk_routing.ticket_assignment_email_template";

/// Parses the kill-switch value.
///
/// Only a case-insensitive `true` enables notifications.
#[must_use]
pub fn parse_enabled_flag(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

/// The configured team override for one side of the classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamOverride {
    /// No override configured.
    Unset,
    /// A team id is configured.
    Configured(TeamId),
    /// A value is configured but is not an integer.
    Invalid(DomainError),
}

impl TeamOverride {
    /// Parses the raw parameter value stored under `key`.
    #[must_use]
    pub fn parse(key: &str, raw: Option<&str>) -> Self {
        match Self::parse_value(key, raw) {
            Ok(Some(team_id)) => Self::Configured(team_id),
            Ok(None) => Self::Unset,
            Err(err) => Self::Invalid(err),
        }
    }

    /// Parses the raw parameter value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTeamId` if a non-blank value is not an integer.
    pub fn parse_value(key: &str, raw: Option<&str>) -> Result<Option<TeamId>, DomainError> {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Ok(None);
        };
        raw.parse::<i64>()
            .map(|id| Some(TeamId::new(id)))
            .map_err(|_| DomainError::InvalidTeamId {
                key: key.to_string(),
                value: raw.to_string(),
            })
    }
}

/// A read-only snapshot of every routing parameter.
///
/// Taken once per routing run so that one ticket is classified, routed and
/// notified against a consistent configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingSettings {
    /// The internal domain allow-list.
    pub internal_domains: InternalDomains,
    /// Team override for internal tickets.
    pub internal_team: TeamOverride,
    /// Team override for external tickets.
    pub external_team: TeamOverride,
    /// Whether leader notifications are sent at all.
    pub notifications_enabled: bool,
    /// Forced sender address, if configured.
    pub sender_email: Option<String>,
}

impl RoutingSettings {
    /// Builds the snapshot from a parameter lookup.
    ///
    /// Missing keys fall back to their documented defaults.
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the stored value of a key, or `None` when unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let internal_domains: InternalDomains = InternalDomains::parse(
            &lookup(INTERNAL_DOMAINS_KEY).unwrap_or_else(|| DEFAULT_INTERNAL_DOMAINS.to_string()),
        );
        let internal_team: TeamOverride = TeamOverride::parse(
            INTERNAL_TEAM_ID_KEY,
            lookup(INTERNAL_TEAM_ID_KEY).as_deref(),
        );
        let external_team: TeamOverride = TeamOverride::parse(
            EXTERNAL_TEAM_ID_KEY,
            lookup(EXTERNAL_TEAM_ID_KEY).as_deref(),
        );
        let notifications_enabled: bool = parse_enabled_flag(
            &lookup(ENABLE_NOTIFICATIONS_KEY)
                .unwrap_or_else(|| DEFAULT_ENABLE_NOTIFICATIONS.to_string()),
        );
        let sender_email: Option<String> = lookup(NOTIFICATION_SENDER_KEY)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            internal_domains,
            internal_team,
            external_team,
            notifications_enabled,
            sender_email,
        }
    }

    /// Returns the team override for the given side.
    #[must_use]
    pub const fn team_override(&self, classification: Classification) -> &TeamOverride {
        match classification {
            Classification::Internal => &self.internal_team,
            Classification::External => &self.external_team,
        }
    }

    /// Returns the named default team reference for the given side.
    #[must_use]
    pub const fn default_team_ref(classification: Classification) -> &'static str {
        match classification {
            Classification::Internal => INTERNAL_TEAM_REF,
            Classification::External => EXTERNAL_TEAM_REF,
        }
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ports::TeamRepository;
use helpdesk_routing_domain::{Classification, RoutingSettings, Team, TeamOverride, Ticket};
use tracing::{debug, info, warn};

/// Which precedence rule produced the selected team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSource {
    /// The team id configured for the ticket's side.
    ConfiguredId,
    /// The named default team for the ticket's side.
    NamedDefault,
}

impl TeamSource {
    /// Converts this source to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConfiguredId => "configured_id",
            Self::NamedDefault => "named_default",
        }
    }
}

/// The result of team selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamSelection {
    /// A team was resolved.
    Selected {
        /// The resolved team.
        team: Team,
        /// The rule that resolved it.
        source: TeamSource,
    },
    /// Neither the override nor the named default resolved.
    NotFound,
}

impl TeamSelection {
    /// Returns the selected team, if any.
    #[must_use]
    pub const fn team(&self) -> Option<&Team> {
        match self {
            Self::Selected { team, .. } => Some(team),
            Self::NotFound => None,
        }
    }
}

/// Selects the team for a classification.
///
/// Precedence:
/// 1. The team id configured for the side, if it is an integer and resolves.
/// 2. The named default team for the side, if it resolves.
///
/// An unresolvable or malformed override falls through to the default
/// instead of failing.
#[must_use]
pub fn select_team(
    classification: Classification,
    settings: &RoutingSettings,
    teams: &dyn TeamRepository,
) -> TeamSelection {
    match settings.team_override(classification) {
        TeamOverride::Configured(team_id) => {
            debug!(
                team_id = %team_id,
                classification = %classification,
                "Configured team override"
            );
            if let Some(team) = teams.resolve_by_id(*team_id) {
                return TeamSelection::Selected {
                    team,
                    source: TeamSource::ConfiguredId,
                };
            }
            warn!(
                team_id = %team_id,
                classification = %classification,
                "Configured team does not exist, falling back to default team"
            );
        }
        TeamOverride::Invalid(err) => {
            warn!(error = %err, "Ignoring team override");
        }
        TeamOverride::Unset => {}
    }

    let reference: &str = RoutingSettings::default_team_ref(classification);
    teams.resolve_by_name(reference).map_or_else(
        || {
            debug!(reference, "Default team reference does not resolve");
            TeamSelection::NotFound
        },
        |team| {
            debug!(reference, team_id = %team.id, "Using default team");
            TeamSelection::Selected {
                team,
                source: TeamSource::NamedDefault,
            }
        },
    )
}

/// Selects a team and writes it into the ticket's empty team slot.
///
/// Must only be called for a ticket without a team; a ticket that already
/// has one is left untouched and reported as `NotFound`.
pub fn assign_team(
    ticket: &mut Ticket,
    settings: &RoutingSettings,
    teams: &dyn TeamRepository,
) -> TeamSelection {
    if let Some(existing) = ticket.team() {
        debug!(ticket_id = %ticket.id(), team_id = %existing, "Ticket already has a team");
        return TeamSelection::NotFound;
    }

    let classification: Classification = ticket.classification();
    let selection: TeamSelection = select_team(classification, settings, teams);

    match &selection {
        TeamSelection::Selected { team, source } => {
            ticket.assign_team(team.id);
            info!(
                ticket_id = %ticket.id(),
                team_id = %team.id,
                team = %team.name,
                classification = %classification,
                source = source.as_str(),
                "Assigned ticket to team"
            );
        }
        TeamSelection::NotFound => {
            warn!(
                ticket_id = %ticket.id(),
                classification = %classification,
                "No valid team found for ticket"
            );
        }
    }

    selection
}

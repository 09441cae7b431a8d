// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;

use crate::{
    Classification, DEFAULT_ENABLE_NOTIFICATIONS, DomainError, ENABLE_NOTIFICATIONS_KEY,
    EXTERNAL_TEAM_ID_KEY, EXTERNAL_TEAM_REF, INTERNAL_DOMAINS_KEY, INTERNAL_TEAM_ID_KEY,
    INTERNAL_TEAM_REF, NOTIFICATION_SENDER_KEY, RoutingSettings, TeamId, TeamOverride,
    parse_enabled_flag,
};

fn settings_from(params: &[(&str, &str)]) -> RoutingSettings {
    let map: HashMap<String, String> = params
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    RoutingSettings::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn test_defaults_when_nothing_is_configured() {
    let settings: RoutingSettings = RoutingSettings::default();

    assert_eq!(
        settings.internal_domains.as_slice(),
        &[String::from("wavext.io")]
    );
    assert_eq!(settings.internal_team, TeamOverride::Unset);
    assert_eq!(settings.external_team, TeamOverride::Unset);
    assert!(settings.notifications_enabled);
    assert_eq!(settings.sender_email, None);
}

#[test]
fn test_configured_values_are_read() {
    let settings: RoutingSettings = settings_from(&[
        (INTERNAL_DOMAINS_KEY, "corp.example, wavext.io"),
        (INTERNAL_TEAM_ID_KEY, "7"),
        (EXTERNAL_TEAM_ID_KEY, " 9 "),
        (ENABLE_NOTIFICATIONS_KEY, "False"),
        (NOTIFICATION_SENDER_KEY, "desk@wavext.io"),
    ]);

    assert_eq!(settings.internal_domains.as_slice().len(), 2);
    assert_eq!(
        settings.internal_team,
        TeamOverride::Configured(TeamId::new(7))
    );
    assert_eq!(
        settings.external_team,
        TeamOverride::Configured(TeamId::new(9))
    );
    assert!(!settings.notifications_enabled);
    assert_eq!(settings.sender_email, Some(String::from("desk@wavext.io")));
}

#[test]
fn test_blank_sender_is_treated_as_unset() {
    let settings: RoutingSettings = settings_from(&[(NOTIFICATION_SENDER_KEY, "   ")]);
    assert_eq!(settings.sender_email, None);
}

#[test]
fn test_non_integer_team_id_is_invalid_not_fatal() {
    let settings: RoutingSettings = settings_from(&[(INTERNAL_TEAM_ID_KEY, "support")]);

    assert!(matches!(
        settings.internal_team,
        TeamOverride::Invalid(DomainError::InvalidTeamId { .. })
    ));
}

#[test]
fn test_blank_team_id_is_unset() {
    let result: Result<Option<TeamId>, DomainError> =
        TeamOverride::parse_value(INTERNAL_TEAM_ID_KEY, Some("  "));
    assert_eq!(result, Ok(None));
}

#[test]
fn test_enabled_flag_only_accepts_true() {
    assert!(parse_enabled_flag("True"));
    assert!(parse_enabled_flag(" true "));
    assert!(parse_enabled_flag("TRUE"));
    assert!(!parse_enabled_flag("1"));
    assert!(!parse_enabled_flag("yes"));
    assert!(!parse_enabled_flag("False"));
    assert!(!parse_enabled_flag(""));
}

#[test]
fn test_absent_enable_flag_defaults_to_enabled() {
    let absent: RoutingSettings = settings_from(&[(NOTIFICATION_SENDER_KEY, "desk@wavext.io")]);
    let empty: RoutingSettings = settings_from(&[(ENABLE_NOTIFICATIONS_KEY, "")]);

    assert_eq!(DEFAULT_ENABLE_NOTIFICATIONS, "True");
    assert!(absent.notifications_enabled);
    assert!(!empty.notifications_enabled);
}

#[test]
fn test_team_override_and_default_ref_follow_classification() {
    let settings: RoutingSettings = settings_from(&[(EXTERNAL_TEAM_ID_KEY, "3")]);

    assert_eq!(
        settings.team_override(Classification::Internal),
        &TeamOverride::Unset
    );
    assert_eq!(
        settings.team_override(Classification::External),
        &TeamOverride::Configured(TeamId::new(3))
    );
    assert_eq!(
        RoutingSettings::default_team_ref(Classification::Internal),
        INTERNAL_TEAM_REF
    );
    assert_eq!(
        RoutingSettings::default_team_ref(Classification::External),
        EXTERNAL_TEAM_REF
    );
}

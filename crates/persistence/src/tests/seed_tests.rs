// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{TEST_SEED, create_test_seed};
use crate::{PersistenceError, Seed};
use helpdesk_routing_domain::{DomainError, INTERNAL_TEAM_REF, TeamId};

#[test]
fn test_seed_parses_all_sections() {
    let seed: Seed = create_test_seed();

    assert_eq!(seed.teams.len(), 3);
    assert_eq!(
        seed.named_teams.get(INTERNAL_TEAM_REF),
        Some(&TeamId::new(1))
    );
    assert_eq!(seed.templates.len(), 1);
    assert_eq!(seed.params.len(), 1);
    assert!(seed.teams[2].leader.is_none());
}

#[test]
fn test_empty_document_is_an_empty_seed() {
    let seed: Seed = Seed::from_json("{}").unwrap();

    assert_eq!(seed, Seed::default());
}

#[test]
fn test_malformed_json_is_rejected() {
    let result: Result<Seed, PersistenceError> = Seed::from_json("{ \"teams\": [ ");

    assert!(matches!(result, Err(PersistenceError::SeedParse(_))));
}

#[test]
fn test_duplicate_team_ids_are_rejected() {
    let json: &str = r#"{ "teams": [ { "id": 1, "name": "A" }, { "id": 1, "name": "B" } ] }"#;

    let result: Result<Seed, PersistenceError> = Seed::from_json(json);

    assert!(matches!(
        result,
        Err(PersistenceError::InvalidSeed(DomainError::DuplicateTeam(1)))
    ));
}

#[test]
fn test_blank_team_name_is_rejected() {
    let json: &str = r#"{ "teams": [ { "id": 1, "name": "  " } ] }"#;

    let result: Result<Seed, PersistenceError> = Seed::from_json(json);

    assert!(matches!(
        result,
        Err(PersistenceError::InvalidSeed(DomainError::InvalidTeamName(_)))
    ));
}

#[test]
fn test_reference_name_with_whitespace_is_rejected() {
    let json: &str = r#"{ "named_teams": { "internal team": 1 } }"#;

    let result: Result<Seed, PersistenceError> = Seed::from_json(json);

    assert!(matches!(
        result,
        Err(PersistenceError::InvalidSeed(DomainError::InvalidReferenceName(_)))
    ));
}

#[test]
fn test_load_reports_missing_file() {
    let result: Result<Seed, PersistenceError> = Seed::load("/nonexistent/helpdesk/seed.json");

    let err: PersistenceError = result.unwrap_err();
    assert!(matches!(err, PersistenceError::SeedRead { .. }));
    assert!(err.to_string().contains("/nonexistent/helpdesk/seed.json"));
}

#[test]
fn test_load_reads_file_from_disk() {
    let path: std::path::PathBuf = std::env::temp_dir().join(format!(
        "helpdesk-routing-seed-{}.json",
        std::process::id()
    ));
    std::fs::write(&path, TEST_SEED).unwrap();

    let seed: Seed = Seed::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(seed, create_test_seed());
}

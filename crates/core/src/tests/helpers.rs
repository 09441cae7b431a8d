// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::{
    Collaborators, ConfigStore, DeliveryError, InAppMessage, MailTransport, MessageStream,
    OutgoingMail, RenderError, RenderedMail, TeamRepository, TemplateRenderer,
};
use helpdesk_routing_audit::Cause;
use helpdesk_routing_domain::{
    EXTERNAL_TEAM_REF, INTERNAL_TEAM_REF, PartnerId, Team, TeamId, Ticket, User, UserId,
};

pub const INTERNAL_TEAM_ID: i64 = 1;
pub const EXTERNAL_TEAM_ID: i64 = 2;
pub const OVERRIDE_TEAM_ID: i64 = 3;
pub const LEADERLESS_TEAM_ID: i64 = 4;

#[derive(Default)]
pub struct FakeConfig {
    pub params: HashMap<String, String>,
}

impl FakeConfig {
    pub fn set(&mut self, key: &str, value: &str) {
        self.params.insert(key.to_string(), value.to_string());
    }
}

impl ConfigStore for FakeConfig {
    fn get_param(&self, key: &str) -> Option<String> {
        self.params.get(key).cloned()
    }
}

#[derive(Default)]
pub struct FakeTeams {
    pub teams: Vec<Team>,
    pub named: HashMap<String, TeamId>,
}

impl TeamRepository for FakeTeams {
    fn resolve_by_id(&self, id: TeamId) -> Option<Team> {
        self.teams.iter().find(|t| t.id == id).cloned()
    }

    fn resolve_by_name(&self, name: &str) -> Option<Team> {
        let id: TeamId = *self.named.get(name)?;
        self.resolve_by_id(id)
    }
}

pub struct FakeTemplates {
    pub result: Result<RenderedMail, RenderError>,
    pub renders: Cell<usize>,
}

impl Default for FakeTemplates {
    fn default() -> Self {
        Self {
            result: Ok(RenderedMail {
                from: Some(String::from("template@wavext.io")),
                to: vec![String::from("leader@wavext.io")],
                subject: String::from("Ticket assigned"),
                body_html: String::from("<p>A ticket was assigned to your team.</p>"),
            }),
            renders: Cell::new(0),
        }
    }
}

impl TemplateRenderer for FakeTemplates {
    fn render(
        &self,
        _template_name: &str,
        _ticket: &Ticket,
        _team: &Team,
    ) -> Result<RenderedMail, RenderError> {
        self.renders.set(self.renders.get() + 1);
        self.result.clone()
    }
}

#[derive(Default)]
pub struct RecordingMail {
    pub attempts: RefCell<Vec<OutgoingMail>>,
    pub fail_with: Option<DeliveryError>,
}

impl MailTransport for RecordingMail {
    fn send(&self, mail: &OutgoingMail) -> Result<(), DeliveryError> {
        self.attempts.borrow_mut().push(mail.clone());
        self.fail_with.clone().map_or(Ok(()), Err)
    }
}

#[derive(Default)]
pub struct RecordingMessages {
    pub attempts: RefCell<Vec<InAppMessage>>,
    pub fail_with: Option<DeliveryError>,
}

impl MessageStream for RecordingMessages {
    fn post(&self, message: &InAppMessage) -> Result<(), DeliveryError> {
        self.attempts.borrow_mut().push(message.clone());
        self.fail_with.clone().map_or(Ok(()), Err)
    }
}

/// All fake collaborators, wired with the default internal and external teams.
pub struct Fixture {
    pub config: FakeConfig,
    pub teams: FakeTeams,
    pub templates: FakeTemplates,
    pub mail: RecordingMail,
    pub messages: RecordingMessages,
}

impl Fixture {
    pub fn new() -> Self {
        let mut teams: FakeTeams = FakeTeams::default();
        teams.teams = vec![
            create_test_team(INTERNAL_TEAM_ID, "Internal Support", true),
            create_test_team(EXTERNAL_TEAM_ID, "Customer Care", true),
            create_test_team(OVERRIDE_TEAM_ID, "Escalations", true),
            create_test_team(LEADERLESS_TEAM_ID, "Unstaffed", false),
        ];
        teams
            .named
            .insert(INTERNAL_TEAM_REF.to_string(), TeamId::new(INTERNAL_TEAM_ID));
        teams
            .named
            .insert(EXTERNAL_TEAM_REF.to_string(), TeamId::new(EXTERNAL_TEAM_ID));

        Self {
            config: FakeConfig::default(),
            teams,
            templates: FakeTemplates::default(),
            mail: RecordingMail::default(),
            messages: RecordingMessages::default(),
        }
    }

    pub fn collaborators(&self) -> Collaborators<'_> {
        Collaborators {
            config: &self.config,
            teams: &self.teams,
            templates: &self.templates,
            mail: &self.mail,
            messages: &self.messages,
        }
    }

    pub fn mail_attempts(&self) -> usize {
        self.mail.attempts.borrow().len()
    }

    pub fn message_attempts(&self) -> usize {
        self.messages.attempts.borrow().len()
    }
}

pub fn create_test_leader(team_id: i64) -> User {
    User::new(
        UserId::new(100 + team_id),
        format!("Leader {team_id}"),
        Some(format!("leader{team_id}@wavext.io")),
        PartnerId::new(200 + team_id),
    )
}

pub fn create_test_team(id: i64, name: &str, with_leader: bool) -> Team {
    Team::new(
        TeamId::new(id),
        String::from(name),
        with_leader.then(|| create_test_leader(id)),
    )
}

pub fn create_test_cause() -> Cause {
    Cause::new(
        String::from("req-456"),
        String::from("Ticket form submission"),
    )
}

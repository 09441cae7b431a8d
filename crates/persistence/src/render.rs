// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use helpdesk_routing::{RenderError, RenderedMail, TemplateRenderer};
use helpdesk_routing_domain::{Team, Ticket, User};
use tracing::debug;

use crate::Persistence;
use crate::seed::MailTemplate;

/// Looks up the value of one placeholder key.
///
/// Missing ticket or leader values render as an empty string; an unknown key
/// returns `None`.
fn placeholder_value(key: &str, ticket: &Ticket, team: &Team) -> Option<String> {
    let leader: Option<&User> = team.leader.as_ref();
    let value: String = match key {
        "ticket.id" => ticket.id().to_string(),
        "ticket.name" => ticket.name().unwrap_or_default().to_string(),
        "ticket.email" => ticket.customer_email().unwrap_or_default().to_string(),
        "ticket.domain" => ticket.email_domain().unwrap_or_default().to_string(),
        "ticket.kind" => ticket.classification().label().to_string(),
        "team.name" => team.name.clone(),
        "leader.name" => leader.map(|l| l.name.clone()).unwrap_or_default(),
        "leader.email" => leader.and_then(|l| l.email.clone()).unwrap_or_default(),
        _ => return None,
    };
    Some(value)
}

/// Substitutes every `{{key}}` placeholder in `text`.
///
/// # Errors
///
/// Returns `RenderError::RenderFailed` for an unknown key or an unclosed
/// placeholder.
pub fn render_text(
    template_name: &str,
    text: &str,
    ticket: &Ticket,
    team: &Team,
) -> Result<String, RenderError> {
    let fail = |reason: String| RenderError::RenderFailed {
        template: template_name.to_string(),
        reason,
    };

    let mut rendered: String = String::with_capacity(text.len());
    let mut rest: &str = text;
    while let Some(start) = rest.find("{{") {
        rendered.push_str(&rest[..start]);
        let after: &str = &rest[start + 2..];
        let end: usize = after
            .find("}}")
            .ok_or_else(|| fail(String::from("unclosed placeholder")))?;
        let key: &str = after[..end].trim();
        let value: String = placeholder_value(key, ticket, team)
            .ok_or_else(|| fail(format!("unknown placeholder '{key}'")))?;
        rendered.push_str(&value);
        rest = &after[end + 2..];
    }
    rendered.push_str(rest);
    Ok(rendered)
}

/// Renders every field of a stored template.
///
/// # Errors
///
/// Returns the first placeholder failure.
pub fn render_template(
    template_name: &str,
    template: &MailTemplate,
    ticket: &Ticket,
    team: &Team,
) -> Result<RenderedMail, RenderError> {
    let from: Option<String> = template
        .from
        .as_deref()
        .map(|from| render_text(template_name, from, ticket, team))
        .transpose()?
        .filter(|from| !from.trim().is_empty());

    let mut to: Vec<String> = Vec::with_capacity(template.to.len());
    for recipient in &template.to {
        let recipient: String = render_text(template_name, recipient, ticket, team)?;
        if !recipient.trim().is_empty() {
            to.push(recipient.trim().to_string());
        }
    }

    Ok(RenderedMail {
        from,
        to,
        subject: render_text(template_name, &template.subject, ticket, team)?,
        body_html: render_text(template_name, &template.body_html, ticket, team)?,
    })
}

impl TemplateRenderer for Persistence {
    fn render(
        &self,
        template_name: &str,
        ticket: &Ticket,
        team: &Team,
    ) -> Result<RenderedMail, RenderError> {
        let template: &MailTemplate = self
            .templates
            .get(template_name)
            .ok_or_else(|| RenderError::TemplateNotFound(template_name.to_string()))?;
        debug!(template = template_name, ticket_id = %ticket.id(), "Rendering mail template");
        render_template(template_name, template, ticket, team)
    }
}

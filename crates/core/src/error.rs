// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors a template renderer can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No template is registered under the requested name.
    TemplateNotFound(String),
    /// The template exists but could not be rendered for this ticket.
    RenderFailed {
        /// The template name.
        template: String,
        /// Why rendering failed.
        reason: String,
    },
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TemplateNotFound(name) => write!(f, "Email template '{name}' not found"),
            Self::RenderFailed { template, reason } => {
                write!(f, "Failed to render template '{template}': {reason}")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Errors a mail transport or message stream can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The receiving side refused the message.
    Rejected(String),
    /// The transport could not be reached or is not accepting messages.
    Unavailable(String),
}

impl std::fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(reason) => write!(f, "Delivery rejected: {reason}"),
            Self::Unavailable(reason) => write!(f, "Transport unavailable: {reason}"),
        }
    }
}

impl std::error::Error for DeliveryError {}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::settings::DEFAULT_INTERNAL_DOMAINS;

/// The set of email domains treated as belonging to the organization.
///
/// Entries are trimmed and lower-cased on parse; empty entries are dropped.
/// Matching is exact, so `sub.wavext.io` is not covered by `wavext.io`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalDomains {
    domains: Vec<String>,
}

impl InternalDomains {
    /// Parses a comma-separated domain list.
    ///
    /// # Arguments
    ///
    /// * `raw` - The configured value, e.g. `"wavext.io, Example.COM"`
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let domains: Vec<String> = raw
            .split(',')
            .map(|entry| entry.trim().to_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect();
        Self { domains }
    }

    /// Returns whether `domain` is in the set, ignoring case.
    #[must_use]
    pub fn contains(&self, domain: &str) -> bool {
        let domain: String = domain.trim().to_lowercase();
        self.domains.iter().any(|d| *d == domain)
    }

    /// Returns the normalized entries.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.domains
    }

    /// Returns whether no domain is configured.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Default for InternalDomains {
    fn default() -> Self {
        Self::parse(DEFAULT_INTERNAL_DOMAINS)
    }
}

/// Extracts the lower-cased domain after the last `@`.
///
/// Returns `None` when there is no `@` or nothing follows it.
#[must_use]
pub fn extract_domain(email: &str) -> Option<String> {
    let (_, domain) = email.rsplit_once('@')?;
    let domain: &str = domain.trim();
    if domain.is_empty() {
        return None;
    }
    Some(domain.to_lowercase())
}

/// Derives the email domain for a ticket.
///
/// The ticket's own email wins whenever it is non-empty, even if it turns
/// out to be malformed; the partner email is only consulted when the ticket
/// email is absent or blank.
///
/// # Arguments
///
/// * `identity_email` - The email typed on the ticket
/// * `partner_email` - The email of the linked identity record
#[must_use]
pub fn compute_email_domain(
    identity_email: Option<&str>,
    partner_email: Option<&str>,
) -> Option<String> {
    let email: &str = identity_email
        .filter(|e| !e.trim().is_empty())
        .or_else(|| partner_email.filter(|e| !e.trim().is_empty()))?;
    extract_domain(email)
}

/// Returns whether `domain` belongs to the internal domain set.
///
/// An absent domain is never internal.
#[must_use]
pub fn compute_is_internal(domain: Option<&str>, internal_domains: &InternalDomains) -> bool {
    domain.is_some_and(|d| internal_domains.contains(d))
}

//! Domain name normalization and subtree utilities.
//!
//! This module provides the domain-name handling the discovery engine relies on:
//! - `normalize_domain()` - Validates a user-supplied name and converts it to
//!   canonical ASCII (IDNA/punycode) form with a trailing dot
//! - `to_fqdn()` - Lowercases a name and appends the trailing dot
//! - `is_within()` - Checks whether a name lies in a domain's subtree
//! - `relative_label()` - Strips the domain suffix from a name inside the subtree

use crate::config::{MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH};
use crate::error_handling::DiscoveryError;

/// Validates and normalizes a domain name for discovery.
///
/// IDNA input (e.g. `bücher.example`) is converted to punycode via the `url`
/// crate's host parser. The result is lowercase and ends with a trailing dot.
///
/// # Arguments
///
/// * `input` - The domain as typed by the user, with or without trailing dot
///
/// # Errors
///
/// Returns `DiscoveryError::InvalidDomain` if the name is empty, too long, an
/// IP address, or contains a label that is not a valid hostname label.
pub fn normalize_domain(input: &str) -> Result<String, DiscoveryError> {
    let invalid = |reason: &str| DiscoveryError::InvalidDomain {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = input.trim();
    let without_dot = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if without_dot.is_empty() {
        return Err(invalid("domain is empty"));
    }

    let ascii = match url::Host::parse(without_dot) {
        Ok(url::Host::Domain(domain)) => domain,
        Ok(url::Host::Ipv4(_)) | Ok(url::Host::Ipv6(_)) => {
            return Err(invalid("IP addresses are not domains"))
        }
        Err(e) => return Err(invalid(&e.to_string())),
    };

    if ascii.len() > MAX_DOMAIN_LENGTH {
        return Err(invalid("domain exceeds 253 characters"));
    }

    for label in ascii.split('.') {
        validate_label(label).map_err(invalid)?;
    }

    Ok(to_fqdn(&ascii))
}

/// Checks a single label against hostname syntax.
///
/// Underscores are accepted because service labels (`_dmarc`, `_sip._tcp`)
/// are common discovery targets.
fn validate_label(label: &str) -> Result<(), &'static str> {
    if label.is_empty() {
        return Err("empty label");
    }
    if label.len() > MAX_LABEL_LENGTH {
        return Err("label exceeds 63 characters");
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err("label starts or ends with a hyphen");
    }
    if !label
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err("label contains invalid characters");
    }
    Ok(())
}

/// Lowercases a name and makes sure it ends with exactly one dot.
pub fn to_fqdn(name: &str) -> String {
    let trimmed = name.trim().trim_end_matches('.');
    let mut fqdn = trimmed.to_ascii_lowercase();
    fqdn.push('.');
    fqdn
}

/// Returns `true` if `name` equals `domain` or is a descendant of it.
///
/// Both arguments are compared in canonical form, so trailing dots and case
/// don't matter. `notexample.com` is not within `example.com`.
pub fn is_within(name: &str, domain: &str) -> bool {
    let name = to_fqdn(name);
    let domain = to_fqdn(domain);
    name == domain || name.ends_with(&format!(".{domain}"))
}

/// Strips the domain suffix from a name below the domain.
///
/// Returns the remaining label(s) without trailing dot, e.g. `mail` for
/// `mail.example.com.` under `example.com.`. Returns `None` for the domain
/// itself and for names outside the subtree.
pub fn relative_label(name: &str, domain: &str) -> Option<String> {
    let name = to_fqdn(name);
    let domain = to_fqdn(domain);
    name.strip_suffix(&format!(".{domain}"))
        .filter(|label| !label.is_empty())
        .map(str::to_string)
}

/// Checks that a relative name (one or more labels, no trailing dot) has
/// valid hostname syntax.
pub(crate) fn is_valid_subdomain(label: &str) -> bool {
    !label.is_empty() && label.split('.').all(|part| validate_label(part).is_ok())
}

/// Normalizes a caller-supplied subdomain label.
///
/// Lowercases and strips surrounding dots; returns `None` when nothing is left.
pub fn normalize_label(label: &str) -> Option<String> {
    let label = label.trim().trim_matches('.').to_ascii_lowercase();
    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}

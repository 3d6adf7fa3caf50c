//! Conversions between DNS question names and container runtime identifiers.

use docker_dns_domain::{DomainError, DomainSuffix};
use std::net::Ipv4Addr;

pub const REVERSE_ZONE_SUFFIX: &str = ".in-addr.arpa.";

/// Strip `suffix` from `name` to get the runtime identifier.
///
/// Names outside the zone pass through untouched; the runtime decides
/// whether they exist.
pub fn name_to_identifier<'a>(name: &'a str, suffix: &DomainSuffix) -> &'a str {
    name.strip_suffix(suffix.as_str()).unwrap_or(name)
}

/// Build the DNS name for a runtime display name such as `/api`.
pub fn identifier_to_name(display_name: &str, suffix: &DomainSuffix) -> String {
    let bare = display_name.strip_prefix('/').unwrap_or(display_name);
    format!("{}{}", bare, suffix)
}

/// Decode `d.c.b.a.in-addr.arpa.` into `a.b.c.d`.
pub fn reverse_name_to_ip(name: &str) -> Result<Ipv4Addr, DomainError> {
    let reversed = name
        .strip_suffix(REVERSE_ZONE_SUFFIX)
        .ok_or_else(|| DomainError::MalformedReverseName(name.to_string()))?;

    let labels: Vec<&str> = reversed.split('.').collect();
    if labels.len() != 4 {
        return Err(DomainError::MalformedReverseName(name.to_string()));
    }

    let mut octets = [0u8; 4];
    for (octet, label) in octets.iter_mut().zip(labels.iter().rev()) {
        if label.is_empty() || !label.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::MalformedReverseName(name.to_string()));
        }
        *octet = label
            .parse()
            .map_err(|_| DomainError::MalformedReverseName(name.to_string()))?;
    }

    Ok(Ipv4Addr::from(octets))
}

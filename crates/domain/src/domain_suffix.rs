use super::DomainError;
use std::fmt;
use std::sync::Arc;

/// Zone suffix container names live under, stored fully qualified (`.docker.`).
///
/// Matching against it is a literal, case-sensitive suffix comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSuffix(Arc<str>);

impl DomainSuffix {
    /// Accepts `.docker` or `.docker.`; a missing trailing dot is added.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let raw = raw.trim();
        if !raw.starts_with('.') {
            return Err(DomainError::InvalidDomainSuffix(format!(
                "'{}' must start with '.'",
                raw
            )));
        }
        if raw.len() > 1 && raw.contains("..") {
            return Err(DomainError::InvalidDomainSuffix(format!(
                "'{}' contains an empty label",
                raw
            )));
        }

        let fqdn = if raw.ends_with('.') {
            raw.to_string()
        } else {
            format!("{}.", raw)
        };

        Ok(Self(fqdn.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The zone apex as a fully qualified name: `.docker.` becomes `docker.`.
    pub fn zone_apex(&self) -> &str {
        match &self.0[1..] {
            "" => ".",
            apex => apex,
        }
    }
}

impl Default for DomainSuffix {
    fn default() -> Self {
        Self(".docker.".into())
    }
}

impl fmt::Display for DomainSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

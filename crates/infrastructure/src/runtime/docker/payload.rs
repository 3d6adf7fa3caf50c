//! Docker Engine API response bodies, reduced to the fields lookups need.

use docker_dns_domain::{ContainerRecord, DomainError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::net::Ipv4Addr;
use tracing::debug;

/// `GET /containers/{id}/json`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ContainerInspect {
    id: String,

    #[serde(default)]
    name: String,

    #[serde(default)]
    network_settings: Option<NetworkSettings>,
}

/// One entry of `GET /containers/json`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ContainerSummary {
    id: String,

    #[serde(default)]
    names: Vec<String>,

    #[serde(default)]
    network_settings: Option<NetworkSettings>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
struct NetworkSettings {
    #[serde(rename = "IPAddress", default)]
    ip_address: Option<String>,

    #[serde(default)]
    networks: Option<BTreeMap<String, EndpointSettings>>,
}

#[derive(Debug, Deserialize)]
struct EndpointSettings {
    #[serde(rename = "IPAddress", default)]
    ip_address: Option<String>,
}

impl NetworkSettings {
    /// Default-bridge address, else the first attached network with one.
    fn ipv4(&self) -> Option<Ipv4Addr> {
        let legacy = self.ip_address.as_deref();
        let attached = self
            .networks
            .iter()
            .flat_map(|networks| networks.values())
            .filter_map(|endpoint| endpoint.ip_address.as_deref());

        legacy
            .into_iter()
            .chain(attached)
            .filter(|ip| !ip.is_empty())
            .find_map(|ip| match ip.parse() {
                Ok(addr) => Some(addr),
                Err(_) => {
                    debug!(ip, "Ignoring non-IPv4 container address");
                    None
                }
            })
    }
}

fn address_of(settings: &Option<NetworkSettings>) -> Option<Ipv4Addr> {
    settings.as_ref().and_then(NetworkSettings::ipv4)
}

pub fn parse_inspect(body: &[u8]) -> Result<ContainerRecord, DomainError> {
    let inspect: ContainerInspect = serde_json::from_slice(body).map_err(malformed)?;
    let address = address_of(&inspect.network_settings);

    Ok(ContainerRecord::new(inspect.id, inspect.name, address))
}

pub fn parse_list(body: &[u8]) -> Result<Vec<ContainerRecord>, DomainError> {
    let summaries: Vec<ContainerSummary> = serde_json::from_slice(body).map_err(malformed)?;

    Ok(summaries
        .into_iter()
        .map(|summary| {
            let address = address_of(&summary.network_settings);
            let name = canonical_name(summary.names);
            ContainerRecord::new(summary.id, name, address)
        })
        .collect())
}

/// `Names` also carries legacy link aliases such as `/web/db`; the container's
/// own name is the single-segment one.
fn canonical_name(names: Vec<String>) -> String {
    let index = names
        .iter()
        .position(|name| !name.trim_start_matches('/').contains('/'))
        .unwrap_or(0);

    names.into_iter().nth(index).unwrap_or_default()
}

fn malformed(e: serde_json::Error) -> DomainError {
    DomainError::RuntimeUnreachable(format!("malformed engine response: {}", e))
}

//! Local host address resolution.
//!
//! Mirrors the classic "resolve my own hostname" lookup: read the machine
//! hostname, then ask the system resolver for its addresses. This goes
//! through the normal resolution path (`/etc/hosts`, DNS), not interface
//! enumeration, so the answer matches what other hosts on the docker
//! network would resolve.

use std::net::IpAddr;

use thiserror::Error;

/// Failure to derive the host machine's IP address.
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("could not read local hostname: {0}")]
    Hostname(#[source] std::io::Error),

    #[error("could not resolve hostname '{0}': {1}")]
    Lookup(String, #[source] std::io::Error),

    #[error("hostname '{0}' resolved to no addresses")]
    NoAddress(String),
}

/// Resolves the current host's IP address. IPv4 wins when the lookup
/// returns both families; errors propagate, there is no retry.
pub fn resolve_local_ip() -> Result<String, ResolutionError> {
    let name = hostname::get()
        .map_err(ResolutionError::Hostname)?
        .to_string_lossy()
        .into_owned();

    let addrs: Vec<IpAddr> =
        dns_lookup::lookup_host(&name).map_err(|e| ResolutionError::Lookup(name.clone(), e))?;

    let addr = addrs
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| addrs.first())
        .ok_or_else(|| ResolutionError::NoAddress(name.clone()))?;

    tracing::debug!(host = %name, %addr, "resolved local address");
    Ok(addr.to_string())
}

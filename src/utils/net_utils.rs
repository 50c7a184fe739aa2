/// Local host network utilities
///
/// Resolves the machine's own hostname to an IPv4 address. No outbound
/// connection is made; this is a plain address lookup.

use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs};

use log::debug;

use crate::core::analyzer::AnalyzerError;

/// Resolve the local hostname to its IPv4 address.
///
/// # Returns
///
/// The first IPv4 address the hostname resolves to, or a network-resolution
/// error if the hostname is unavailable or only resolves to IPv6 addresses.
pub fn resolve_local_address() -> Result<Ipv4Addr, AnalyzerError> {
    let hostname = sys_info::hostname().map_err(|e| AnalyzerError::NetworkResolution {
        detail: format!("hostname unavailable: {}", e),
    })?;
    debug!("Resolving local hostname {}", hostname);

    // Port 0 is a placeholder; ToSocketAddrs needs one to perform the lookup.
    let addresses =
        (hostname.as_str(), 0u16)
            .to_socket_addrs()
            .map_err(|e| AnalyzerError::NetworkResolution {
                detail: format!("{}: {}", hostname, e),
            })?;

    for address in addresses {
        if let SocketAddr::V4(v4) = address {
            return Ok(*v4.ip());
        }
    }

    Err(AnalyzerError::NetworkResolution {
        detail: format!("no IPv4 address found for {}", hostname),
    })
}

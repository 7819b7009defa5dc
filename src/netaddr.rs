/*!
 * Local origin address resolution
 */

use std::net::UdpSocket;

use crate::error::{CourierError, Result};

// Targets used only for route selection; no datagram is ever sent.
const IPV4_PROBE_TARGET: &str = "8.8.8.8:80";
const IPV6_PROBE_TARGET: &str = "[2001:4860:4860::8888]:80";

/// Resolve the sender's own network address: the non-loopback address
/// bound to the interface the default route uses.
///
/// Connecting an unbound UDP socket to a public address makes the OS pick
/// the outbound interface; `local_addr` then carries that interface's
/// address. IPv4 is preferred, with an IPv6 fallback.
pub fn resolve_origin_address() -> Result<String> {
    match probe("0.0.0.0:0", IPV4_PROBE_TARGET) {
        Ok(address) => Ok(address),
        Err(v4) => probe("[::]:0", IPV6_PROBE_TARGET).map_err(|v6| {
            CourierError::AddressResolution(format!(
                "IPv4 probe failed ({v4}); IPv6 probe failed ({v6})"
            ))
        }),
    }
}

fn probe(bind: &str, target: &str) -> std::result::Result<String, String> {
    let socket = UdpSocket::bind(bind).map_err(|e| format!("bind failed: {e}"))?;

    socket
        .connect(target)
        .map_err(|e| format!("no route to pick an interface: {e}"))?;

    let addr = socket
        .local_addr()
        .map_err(|e| format!("failed to read local address: {e}"))?;

    let ip = addr.ip();
    if ip.is_loopback() || ip.is_unspecified() {
        return Err(format!("{ip} is not a routable interface address"));
    }

    Ok(ip.to_string())
}

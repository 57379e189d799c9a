//! Local subnet resolution.
//!
//! The outbound address is taken from the routing table rather than from the
//! hostname, which on many systems resolves to 127.0.1.1.

use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};

use sweepr_common::error::ResolutionError;
use sweepr_common::network::subnet::Subnet;
use tracing::debug;

use super::interface;

/// Destination used only to make the OS pick a source address. No packet is sent.
pub const REFERENCE_DESTINATION: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 80);

/// Derives the /24 containing this machine's outbound IPv4 address.
///
/// Falls back to interface enumeration when there is no default route.
pub fn resolve_local_subnet() -> Result<Subnet, ResolutionError> {
    let addr = match outbound_ipv4(REFERENCE_DESTINATION) {
        Ok(addr) => addr,
        Err(e) => {
            debug!("routing lookup failed ({e}), falling back to interfaces");
            interface::first_interface_ipv4().ok_or(ResolutionError::NoUsableInterface)?
        }
    };
    debug!("local address {addr}");
    Ok(Subnet::containing(addr))
}

/// Source address the OS would use to reach `reference`.
pub fn outbound_ipv4(reference: SocketAddr) -> Result<Ipv4Addr, ResolutionError> {
    let socket = UdpSocket::bind("0.0.0.0:0").map_err(ResolutionError::NoRoute)?;
    socket.connect(reference).map_err(ResolutionError::NoRoute)?;
    let local = socket.local_addr().map_err(ResolutionError::NoRoute)?;
    match local.ip() {
        IpAddr::V4(v4) if interface::is_usable_ipv4(v4) => Ok(v4),
        other => Err(ResolutionError::UnusableAddress(other)),
    }
}

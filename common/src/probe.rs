//! Probe contracts.
//!
//! The engine only ever talks to these traits. The real implementations
//! (platform ping, TCP connect) live in `sweepr-core`; tests plug in
//! simulated ones.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use async_trait::async_trait;

/// Decides whether a single address is reachable.
///
/// Implementations perform exactly one bounded check and map every failure
/// (timeout, unreachable, missing permissions) to `false`.
#[async_trait]
pub trait LivenessProber: Send + Sync {
    async fn probe_liveness(&self, addr: Ipv4Addr) -> bool;
}

/// Decides whether a TCP port accepts connections.
#[async_trait]
pub trait PortProber: Send + Sync {
    async fn probe_port(&self, addr: SocketAddr) -> bool;

    /// Probes `ports` one after another and returns the open ones in the same order.
    async fn probe_ports(&self, addr: Ipv4Addr, ports: &[u16]) -> Vec<u16> {
        let mut open: Vec<u16> = Vec::new();
        for &port in ports {
            let socket_addr = SocketAddr::V4(SocketAddrV4::new(addr, port));
            if self.probe_port(socket_addr).await {
                open.push(port);
            }
        }
        open
    }
}

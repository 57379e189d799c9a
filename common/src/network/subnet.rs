//! The /24 network a scan runs against.

use std::fmt;
use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

use super::range::Ipv4Range;

pub const SUBNET_PREFIX: u8 = 24;

/// A /24 derived from one local address by zeroing its last octet.
///
/// Usable hosts are `.1` through `.254`; the network and broadcast addresses
/// are never handed out as candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subnet {
    network: Ipv4Network,
}

impl Subnet {
    pub fn containing(addr: Ipv4Addr) -> Self {
        let [a, b, c, _] = addr.octets();
        let base = Ipv4Addr::new(a, b, c, 0);
        let network = Ipv4Network::new(base, SUBNET_PREFIX)
            .unwrap_or_else(|_| unreachable!("/{SUBNET_PREFIX} is always a valid prefix"));
        Self { network }
    }

    pub fn network(&self) -> Ipv4Addr {
        self.network.network()
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        self.network.broadcast()
    }

    pub fn prefix(&self) -> u8 {
        self.network.prefix()
    }

    /// The usable host range, network and broadcast excluded.
    pub fn hosts(&self) -> Ipv4Range {
        let start = u32::from(self.network()) + 1;
        let end = u32::from(self.broadcast()) - 1;
        Ipv4Range::new(Ipv4Addr::from(start), Ipv4Addr::from(end))
    }

    /// Candidate addresses for the liveness sweep, ascending.
    pub fn candidates(&self) -> impl Iterator<Item = Ipv4Addr> + use<> {
        self.hosts().to_iter()
    }

    pub fn contains_host(&self, addr: Ipv4Addr) -> bool {
        self.hosts().contains(addr)
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix())
    }
}

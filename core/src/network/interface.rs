use std::net::Ipv4Addr;

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;

/// First usable IPv4 address on any interface that is up and not loopback.
pub fn first_interface_ipv4() -> Option<Ipv4Addr> {
    let interfaces: Vec<NetworkInterface> = datalink::interfaces();
    select_ipv4(&interfaces, |intf| intf.is_up() && !intf.is_loopback())
}

/// Walks `interfaces` in order and returns the first IPv4 address that is
/// neither loopback, unspecified nor link-local, on an interface accepted by
/// `is_viable`.
pub fn select_ipv4(
    interfaces: &[NetworkInterface],
    is_viable: impl Fn(&NetworkInterface) -> bool,
) -> Option<Ipv4Addr> {
    interfaces
        .iter()
        .filter(|intf| is_viable(intf))
        .flat_map(|intf| intf.ips.iter())
        .find_map(|net| match net {
            IpNetwork::V4(v4) if is_usable_ipv4(v4.ip()) => Some(v4.ip()),
            _ => None,
        })
}

pub fn is_usable_ipv4(addr: Ipv4Addr) -> bool {
    !addr.is_loopback() && !addr.is_unspecified() && !addr.is_link_local()
}

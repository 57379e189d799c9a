use std::net::Ipv4Addr;

/// Open ports found on one live host, in port-set order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostReport {
    pub addr: Ipv4Addr,
    pub open_ports: Vec<u16>,
}

impl HostReport {
    pub fn new(addr: Ipv4Addr, open_ports: Vec<u16>) -> Self {
        Self { addr, open_ports }
    }

    /// The host answered but none of the probed ports accepted a connection.
    pub fn is_closed(&self) -> bool {
        self.open_ports.is_empty()
    }
}

/// Result of one run: every live host with its open ports, ascending by address.
///
/// Hosts that never answered the sweep are absent. Hosts that answered but
/// expose nothing are present with an empty port list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    hosts: Vec<HostReport>,
}

impl ScanReport {
    pub fn new(hosts: Vec<HostReport>) -> Self {
        Self { hosts }
    }

    pub fn hosts(&self) -> &[HostReport] {
        &self.hosts
    }

    pub fn get(&self, addr: Ipv4Addr) -> Option<&HostReport> {
        self.hosts.iter().find(|host| host.addr == addr)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// `(address, open ports)` pairs in report order.
    pub fn entries(&self) -> Vec<(Ipv4Addr, Vec<u16>)> {
        self.hosts
            .iter()
            .map(|host| (host.addr, host.open_ports.clone()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ScanReport {
    type Item = &'a HostReport;
    type IntoIter = std::slice::Iter<'a, HostReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.iter()
    }
}

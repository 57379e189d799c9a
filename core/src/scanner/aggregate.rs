use std::net::Ipv4Addr;
use std::sync::Arc;

use sweepr_common::network::ports::PortSet;
use sweepr_common::probe::PortProber;
use sweepr_common::report::{HostReport, ScanReport};
use sweepr_common::warn;
use tracing::trace;

use crate::pool::WorkerPool;

/// Probes `ports` on every live host and builds the report in `live_hosts` order.
///
/// Hosts are probed concurrently, ports within one host sequentially. A host
/// without open ports is kept with an empty list.
pub async fn aggregate(
    live_hosts: &[Ipv4Addr],
    ports: &PortSet,
    prober: Arc<dyn PortProber>,
    pool: &WorkerPool,
) -> ScanReport {
    let ports: Arc<[u16]> = Arc::from(ports.as_slice());

    let outcomes = pool
        .run(
            live_hosts.to_vec(),
            move |addr| {
                let prober = Arc::clone(&prober);
                let ports = Arc::clone(&ports);
                async move {
                    let open = prober.probe_ports(addr, &ports).await;
                    trace!("{addr} open={open:?}");
                    open
                }
            },
            |_| {},
        )
        .await;

    let hosts: Vec<HostReport> = live_hosts
        .iter()
        .zip(outcomes)
        .map(|(&addr, open)| {
            let open = open.unwrap_or_else(|| {
                warn!("port probing for {addr} did not finish, reporting no open ports");
                Vec::new()
            });
            HostReport::new(addr, open)
        })
        .collect();

    ScanReport::new(hosts)
}

//! Simulated collaborators for driving the pipeline without a network.

use std::collections::{HashMap, HashSet};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::network::subnet::Subnet;
use sweepr_common::probe::{LivenessProber, PortProber};
use sweepr_common::report::ScanReport;
use sweepr_common::ui::{ProgressObserver, UserInterface};

/// Answers liveness from a fixed set, with address-derived jitter so that
/// completion order differs from submission order.
pub struct SimulatedHosts {
    live: HashSet<Ipv4Addr>,
}

impl SimulatedHosts {
    pub fn new(live: &[Ipv4Addr]) -> Self {
        Self {
            live: live.iter().copied().collect(),
        }
    }
}

#[async_trait]
impl LivenessProber for SimulatedHosts {
    async fn probe_liveness(&self, addr: Ipv4Addr) -> bool {
        let last = u64::from(addr.octets()[3]);
        tokio::time::sleep(Duration::from_micros((last * 37) % 300)).await;
        self.live.contains(&addr)
    }
}

/// Answers port probes from a fixed map.
pub struct SimulatedPorts {
    open: HashMap<Ipv4Addr, Vec<u16>>,
}

impl SimulatedPorts {
    pub fn new(open: impl IntoIterator<Item = (Ipv4Addr, Vec<u16>)>) -> Self {
        Self {
            open: open.into_iter().collect(),
        }
    }
}

#[async_trait]
impl PortProber for SimulatedPorts {
    async fn probe_port(&self, addr: SocketAddr) -> bool {
        let SocketAddr::V4(v4) = addr else {
            return false;
        };
        tokio::time::sleep(Duration::from_micros(u64::from(addr.port() % 50))).await;
        self.open
            .get(v4.ip())
            .is_some_and(|ports| ports.contains(&v4.port()))
    }
}

/// Records what the pipeline tells the front-end.
#[derive(Default)]
pub struct RecordingUi {
    pub progress: AtomicUsize,
    pub started_with: Mutex<Option<(Subnet, usize)>>,
    pub finished_with: Mutex<Option<usize>>,
    pub reports: Mutex<Vec<ScanReport>>,
    pub headers: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl ProgressObserver for RecordingUi {
    fn advance_progress(&self) {
        self.progress.fetch_add(1, Ordering::SeqCst);
    }
}

impl UserInterface for RecordingUi {
    fn print_header(&self, text: &str) {
        self.headers.lock().unwrap().push(text.to_string());
    }

    fn start_progress(&self, subnet: &Subnet, total: usize) {
        *self.started_with.lock().unwrap() = Some((*subnet, total));
    }

    fn finish_progress(&self, live_hosts: usize) {
        *self.finished_with.lock().unwrap() = Some(live_hosts);
    }

    fn display_report(&self, report: &ScanReport) {
        self.reports.lock().unwrap().push(report.clone());
    }

    fn display_error(&self, err: &anyhow::Error) {
        self.errors.lock().unwrap().push(format!("{err:#}"));
    }
}

//! The scan pipeline: resolve, sweep, aggregate, render.
//!
//! [`Scanner`] owns the probers and the worker pool. It is built once per run
//! from a [`Config`] (or from injected probers in tests) and knows nothing
//! about the terminal beyond the [`UserInterface`] it is handed.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use sweepr_common::config::Config;
use sweepr_common::error::ResolutionError;
use sweepr_common::network::ports::PortSet;
use sweepr_common::network::subnet::Subnet;
use sweepr_common::probe::{LivenessProber, PortProber};
use sweepr_common::report::ScanReport;
use sweepr_common::success;
use sweepr_common::ui::UserInterface;
use tracing::info;

use crate::network::ping::PingProber;
use crate::network::resolver;
use crate::network::tcp::TcpConnectProber;
use crate::pool::WorkerPool;

pub mod aggregate;
pub mod sweep;

pub struct Scanner {
    liveness: Arc<dyn LivenessProber>,
    ports: Arc<dyn PortProber>,
    pool: WorkerPool,
}

impl Scanner {
    pub fn new(
        liveness: Arc<dyn LivenessProber>,
        ports: Arc<dyn PortProber>,
        pool: WorkerPool,
    ) -> Self {
        Self {
            liveness,
            ports,
            pool,
        }
    }

    /// Platform ping for liveness, TCP connect for ports.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            Arc::new(PingProber::new(cfg.ping_timeout)),
            Arc::new(TcpConnectProber::new(cfg.connect_timeout)),
            WorkerPool::new(cfg.parallelism),
        )
    }

    /// Sweeps `subnet` and probes `ports` on every live host.
    pub async fn scan_subnet(
        &self,
        subnet: &Subnet,
        ports: &PortSet,
        ui: &dyn UserInterface,
    ) -> ScanReport {
        let start_time = Instant::now();
        ui.start_progress(subnet, subnet.hosts().len());
        let live_hosts = sweep::sweep(subnet, Arc::clone(&self.liveness), &self.pool, ui).await;
        ui.finish_progress(live_hosts.len());

        success!(
            "{} live hosts in {subnet} after {:.2}s",
            live_hosts.len(),
            start_time.elapsed().as_secs_f64()
        );

        if !live_hosts.is_empty() {
            info!("Checking ports {ports} on {} hosts", live_hosts.len());
        }
        aggregate::aggregate(&live_hosts, ports, Arc::clone(&self.ports), &self.pool).await
    }

    /// Resolves the subnet with `resolve`, scans it and hands the report to
    /// `ui`. A resolution failure is returned before anything is swept.
    pub async fn run<R>(
        &self,
        resolve: R,
        ports: &PortSet,
        ui: &dyn UserInterface,
    ) -> anyhow::Result<ScanReport>
    where
        R: FnOnce() -> Result<Subnet, ResolutionError>,
    {
        let subnet = resolve().context("could not determine the local subnet")?;

        ui.print_header(&format!("scanning network {subnet}"));
        let report = self.scan_subnet(&subnet, ports, ui).await;
        ui.display_report(&report);
        Ok(report)
    }
}

/// Runs one full scan of the local /24 and hands the report to `ui`.
///
/// Only a failure to find the local subnet is returned as an error; every
/// per-address failure is already folded into the report.
pub async fn perform_scan(
    cfg: &Config,
    ports: &PortSet,
    ui: &dyn UserInterface,
) -> anyhow::Result<ScanReport> {
    Scanner::from_config(cfg)
        .run(resolver::resolve_local_subnet, ports, ui)
        .await
}

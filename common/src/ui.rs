use crate::network::subnet::Subnet;
use crate::report::ScanReport;

/// Receives one notification per finished liveness probe.
///
/// Called from the collecting task, so a slow implementation delays
/// bookkeeping but never a probe.
pub trait ProgressObserver: Send + Sync {
    fn advance_progress(&self);
}

/// Everything the scan pipeline needs from a front-end.
pub trait UserInterface: ProgressObserver {
    fn print_header(&self, text: &str);
    fn start_progress(&self, subnet: &Subnet, total: usize);
    fn finish_progress(&self, live_hosts: usize);
    fn display_report(&self, report: &ScanReport);
    fn display_error(&self, err: &anyhow::Error);
}

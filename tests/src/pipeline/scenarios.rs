use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use sweepr_common::network::ports::{self, DEFAULT_PORTS, PortSet};
use sweepr_common::error::ResolutionError;
use sweepr_common::network::subnet::Subnet;
use sweepr_common::report::ScanReport;
use sweepr_core::pool::WorkerPool;
use sweepr_core::scanner::Scanner;

use crate::support::{RecordingUi, SimulatedHosts, SimulatedPorts};

fn home_subnet() -> Subnet {
    Subnet::containing(Ipv4Addr::new(192, 168, 1, 23))
}

fn ip(last: u8) -> Ipv4Addr {
    Ipv4Addr::new(192, 168, 1, last)
}

fn scanner(live: &[Ipv4Addr], open: Vec<(Ipv4Addr, Vec<u16>)>, workers: usize) -> Scanner {
    Scanner::new(
        Arc::new(SimulatedHosts::new(live)),
        Arc::new(SimulatedPorts::new(open)),
        WorkerPool::new(workers),
    )
}

async fn run(
    live: &[Ipv4Addr],
    open: Vec<(Ipv4Addr, Vec<u16>)>,
    ports: &PortSet,
    workers: usize,
    ui: &RecordingUi,
) -> ScanReport {
    scanner(live, open, workers)
        .scan_subnet(&home_subnet(), ports, ui)
        .await
}

#[tokio::test]
async fn two_live_hosts_one_closed() {
    let ui = RecordingUi::default();
    let report = run(
        &[ip(50), ip(1)],
        vec![(ip(1), vec![80, 443]), (ip(50), vec![])],
        &PortSet::default(),
        100,
        &ui,
    )
    .await;

    assert_eq!(
        report.entries(),
        vec![(ip(1), vec![80, 443]), (ip(50), vec![])]
    );
    assert_eq!(ui.progress.load(Ordering::SeqCst), 254);
    assert_eq!(*ui.started_with.lock().unwrap(), Some((home_subnet(), 254)));
    assert_eq!(*ui.finished_with.lock().unwrap(), Some(2));
}

#[tokio::test]
async fn nobody_home_gives_an_empty_report() {
    let ui = RecordingUi::default();
    let report = run(&[], vec![], &PortSet::default(), 100, &ui).await;

    assert!(report.is_empty());
    assert_eq!(ui.progress.load(Ordering::SeqCst), 254);
    assert_eq!(*ui.finished_with.lock().unwrap(), Some(0));
}

#[tokio::test]
async fn empty_custom_port_keeps_the_defaults() {
    let custom = ports::parse_custom_port("").unwrap();
    let port_set = PortSet::default().with_custom(custom);
    assert_eq!(port_set.as_slice(), &DEFAULT_PORTS);

    let ui = RecordingUi::default();
    let report = run(
        &[ip(7)],
        vec![(ip(7), vec![3306, 22, 9999])],
        &port_set,
        16,
        &ui,
    )
    .await;
    assert_eq!(report.entries(), vec![(ip(7), vec![22, 3306])]);
}

#[tokio::test]
async fn custom_port_is_probed_last() {
    let custom = ports::parse_custom_port("21").unwrap();
    let port_set = PortSet::default().with_custom(custom);
    assert_eq!(port_set.len(), DEFAULT_PORTS.len() + 1);

    let ui = RecordingUi::default();
    let report = run(
        &[ip(9)],
        vec![(ip(9), vec![21, 8080, 22])],
        &port_set,
        16,
        &ui,
    )
    .await;
    assert_eq!(report.entries(), vec![(ip(9), vec![22, 8080, 21])]);
}

#[tokio::test]
async fn report_is_independent_of_pool_size() {
    let live = [ip(254), ip(3), ip(128), ip(64), ip(1)];
    let open = || {
        vec![
            (ip(1), vec![22]),
            (ip(64), vec![80, 8080]),
            (ip(254), vec![443]),
        ]
    };

    let ports = PortSet::default();
    let baseline = run(&live, open(), &ports, 1, &RecordingUi::default()).await;
    for workers in [2, 13, 100, 500] {
        let report = run(&live, open(), &ports, workers, &RecordingUi::default()).await;
        assert_eq!(report, baseline, "{workers} workers");
    }

    let hosts: Vec<Ipv4Addr> = baseline.hosts().iter().map(|h| h.addr).collect();
    assert_eq!(hosts, vec![ip(1), ip(3), ip(64), ip(128), ip(254)]);
    assert!(baseline.get(ip(3)).is_some_and(|h| h.is_closed()));
}

#[tokio::test]
async fn addresses_outside_the_subnet_never_show_up() {
    let stray = Ipv4Addr::new(192, 168, 2, 1);
    let ui = RecordingUi::default();
    let report = run(
        &[stray, ip(0), ip(255), ip(10)],
        vec![(stray, vec![22])],
        &PortSet::default(),
        64,
        &ui,
    )
    .await;
    assert_eq!(report.entries(), vec![(ip(10), vec![])]);
}

#[tokio::test]
async fn unresolvable_subnet_aborts_before_sweeping() {
    let ui = RecordingUi::default();
    let result = scanner(&[ip(1)], vec![(ip(1), vec![22])], 8)
        .run(
            || Err(ResolutionError::NoUsableInterface),
            &PortSet::default(),
            &ui,
        )
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ResolutionError>(),
        Some(ResolutionError::NoUsableInterface)
    ));
    assert!(format!("{err:#}").contains("could not determine the local subnet"));
    assert_eq!(ui.progress.load(Ordering::SeqCst), 0);
    assert!(ui.started_with.lock().unwrap().is_none());
    assert!(ui.headers.lock().unwrap().is_empty());
    assert!(ui.reports.lock().unwrap().is_empty());
}

#[tokio::test]
async fn full_run_hands_one_report_to_the_ui() {
    let ui = RecordingUi::default();
    let report = scanner(
        &[ip(50), ip(1)],
        vec![(ip(1), vec![80, 443]), (ip(50), vec![])],
        32,
    )
    .run(|| Ok(home_subnet()), &PortSet::default(), &ui)
    .await
    .unwrap();

    let reports = ui.reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0], report);
    assert_eq!(
        reports[0].entries(),
        vec![(ip(1), vec![80, 443]), (ip(50), vec![])]
    );
    assert_eq!(
        *ui.headers.lock().unwrap(),
        vec!["scanning network 192.168.1.0/24".to_string()]
    );
    assert_eq!(ui.progress.load(Ordering::SeqCst), 254);
    assert!(ui.errors.lock().unwrap().is_empty());
}

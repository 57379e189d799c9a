use std::net::Ipv4Addr;
use std::sync::Arc;

use sweepr_common::network::subnet::Subnet;
use sweepr_common::probe::LivenessProber;
use sweepr_common::ui::ProgressObserver;
use tracing::{debug, trace};

use crate::pool::WorkerPool;

/// Probes every usable address of `subnet` and returns the live ones, ascending.
///
/// The result depends only on the prober's answers, never on the order in
/// which probes complete.
pub async fn sweep<O>(
    subnet: &Subnet,
    prober: Arc<dyn LivenessProber>,
    pool: &WorkerPool,
    observer: &O,
) -> Vec<Ipv4Addr>
where
    O: ProgressObserver + ?Sized,
{
    let candidates: Vec<Ipv4Addr> = subnet.candidates().collect();
    debug!(
        "sweeping {} candidates in {subnet} with {} workers",
        candidates.len(),
        pool.workers()
    );

    let outcomes = pool
        .run(
            candidates,
            move |addr| {
                let prober = Arc::clone(&prober);
                async move {
                    let live = prober.probe_liveness(addr).await;
                    trace!("{addr} live={live}");
                    (addr, live)
                }
            },
            |_| observer.advance_progress(),
        )
        .await;

    let mut live: Vec<Ipv4Addr> = outcomes
        .into_iter()
        .flatten()
        .filter_map(|(addr, live)| live.then_some(addr))
        .collect();
    live.sort_unstable();
    live
}

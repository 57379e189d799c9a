//! Liveness through the platform `ping` utility.
//!
//! Using the system binary avoids needing raw ICMP sockets (and therefore
//! root). A host counts as live when the reply output carries a TTL field.

use std::net::Ipv4Addr;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::config::DEFAULT_PING_TIMEOUT;
use sweepr_common::error::ProbeError;
use sweepr_common::probe::LivenessProber;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::trace;

/// Extra time granted to the child process on top of the reply timeout.
const SPAWN_GRACE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingFlavor {
    Windows,
    /// macOS and the BSDs take `-W` in milliseconds.
    Bsd,
    /// iputils and busybox take `-W` in whole seconds.
    Linux,
}

impl PingFlavor {
    pub fn current() -> Self {
        if cfg!(windows) {
            PingFlavor::Windows
        } else if cfg!(any(
            target_os = "macos",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd"
        )) {
            PingFlavor::Bsd
        } else {
            PingFlavor::Linux
        }
    }

    /// The reply wait `ping` actually honors for a requested `wait`.
    ///
    /// Linux rounds up to whole seconds, at least one; the others take
    /// milliseconds, at least one.
    pub fn effective_wait(self, wait: Duration) -> Duration {
        match self {
            PingFlavor::Linux => {
                let secs = wait.as_secs() + u64::from(wait.subsec_nanos() > 0);
                Duration::from_secs(secs.max(1))
            }
            PingFlavor::Windows | PingFlavor::Bsd => {
                Duration::from_millis(wait.as_millis().max(1) as u64)
            }
        }
    }

    /// Arguments for a single echo request to `addr`.
    pub fn args(self, addr: Ipv4Addr, wait: Duration) -> Vec<String> {
        let wait = self.effective_wait(wait);
        let millis = wait.as_millis();
        match self {
            PingFlavor::Windows => vec![
                "-n".into(),
                "1".into(),
                "-w".into(),
                millis.to_string(),
                addr.to_string(),
            ],
            PingFlavor::Bsd => vec![
                "-c".into(),
                "1".into(),
                "-W".into(),
                millis.to_string(),
                addr.to_string(),
            ],
            PingFlavor::Linux => {
                let secs = wait.as_secs();
                vec![
                    "-c".into(),
                    "1".into(),
                    "-W".into(),
                    secs.to_string(),
                    addr.to_string(),
                ]
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct PingProber {
    timeout: Duration,
    flavor: PingFlavor,
}

impl PingProber {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            flavor: PingFlavor::current(),
        }
    }

    async fn ping_once(&self, addr: Ipv4Addr) -> Result<(), ProbeError> {
        let mut cmd = Command::new("ping");
        cmd.args(self.flavor.args(addr, self.timeout))
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let deadline = self.flavor.effective_wait(self.timeout) + SPAWN_GRACE;
        let output = match timeout(deadline, cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(ProbeError::Spawn(e)),
            Err(_elapsed) => return Err(ProbeError::Timeout),
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        if has_ttl(&stdout) {
            Ok(())
        } else {
            Err(ProbeError::NoReply)
        }
    }
}

impl Default for PingProber {
    fn default() -> Self {
        Self::new(DEFAULT_PING_TIMEOUT)
    }
}

#[async_trait]
impl LivenessProber for PingProber {
    async fn probe_liveness(&self, addr: Ipv4Addr) -> bool {
        match self.ping_once(addr).await {
            Ok(()) => true,
            Err(e) => {
                trace!("{addr} not live: {e}");
                false
            }
        }
    }
}

/// Replies from a live host carry `ttl=` (Unix) or `TTL=` (Windows).
/// "Destination host unreachable" replies do not.
pub fn has_ttl(output: &str) -> bool {
    output.to_ascii_lowercase().contains("ttl=")
}

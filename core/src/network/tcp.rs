use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::config::DEFAULT_CONNECT_TIMEOUT;
use sweepr_common::error::ProbeError;
use sweepr_common::probe::PortProber;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

/// Full TCP handshake per port. Open means the handshake completed in time.
#[derive(Debug, Clone, Copy)]
pub struct TcpConnectProber {
    timeout: Duration,
}

impl TcpConnectProber {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TcpConnectProber {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_TIMEOUT)
    }
}

#[async_trait]
impl PortProber for TcpConnectProber {
    async fn probe_port(&self, addr: SocketAddr) -> bool {
        match handshake(addr, self.timeout).await {
            Ok(()) => true,
            Err(e) => {
                trace!("{addr} closed: {e}");
                false
            }
        }
    }
}

/// Connects and immediately drops the stream.
pub async fn handshake(addr: SocketAddr, probe_timeout: Duration) -> Result<(), ProbeError> {
    match timeout(probe_timeout, TcpStream::connect(addr)).await {
        Ok(Ok(stream)) => {
            drop(stream);
            Ok(())
        }
        Ok(Err(e)) => Err(ProbeError::Unreachable(e)),
        Err(_elapsed) => Err(ProbeError::Timeout),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

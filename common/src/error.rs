//! Error taxonomy.
//!
//! Only [`ResolutionError`] is fatal. [`ProbeError`] never leaves a prober: it
//! is logged and folded into "not live" / "closed". [`InputError`] is reported
//! to the user and the run continues with defaults.

use std::io;
use std::net::IpAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolutionError {
    /// The routing table has no path to the reference destination.
    #[error("no outbound route available: {0}")]
    NoRoute(#[source] io::Error),
    /// The OS picked an IPv6, loopback or otherwise unusable source address.
    #[error("outbound address {0} is not a usable IPv4 address")]
    UnusableAddress(IpAddr),
    /// No interface is up with a non-loopback IPv4 address.
    #[error("no network interface has a usable IPv4 address")]
    NoUsableInterface,
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("probe timed out")]
    Timeout,
    #[error("target unreachable: {0}")]
    Unreachable(#[source] io::Error),
    #[error("failed to launch reachability check: {0}")]
    Spawn(#[source] io::Error),
    #[error("reply carried no ttl field")]
    NoReply,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a valid TCP port (expected 0-65535)")]
    InvalidPort(String),
}

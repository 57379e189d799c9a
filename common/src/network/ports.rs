//! The ordered set of TCP ports probed on every live host.

use std::fmt;

use crate::error::InputError;

pub const DEFAULT_PORTS: [u16; 5] = [22, 80, 443, 8080, 3306];

/// Ordered, duplicate-free list of TCP ports.
///
/// Order is insertion order: a custom port always lands at the end, even when
/// it is numerically smaller than the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSet {
    ports: Vec<u16>,
}

impl PortSet {
    pub fn new(ports: impl IntoIterator<Item = u16>) -> Self {
        let mut set = Self { ports: Vec::new() };
        for port in ports {
            set.push(port);
        }
        set
    }

    /// Appends `port` unless it is already present. Returns whether it was added.
    fn push(&mut self, port: u16) -> bool {
        if self.ports.contains(&port) {
            return false;
        }
        self.ports.push(port);
        true
    }

    /// Consumes the set and returns it extended by `custom`, if any.
    pub fn with_custom(mut self, custom: Option<u16>) -> Self {
        if let Some(port) = custom {
            self.push(port);
        }
        self
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.ports
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.ports.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    pub fn contains(&self, port: u16) -> bool {
        self.ports.contains(&port)
    }
}

impl Default for PortSet {
    fn default() -> Self {
        Self::new(DEFAULT_PORTS)
    }
}

impl fmt::Display for PortSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.ports.iter().map(u16::to_string).collect();
        write!(f, "{}", joined.join(", "))
    }
}

/// Parses the answer to the custom port prompt.
///
/// Blank input means "no custom port". Anything that is not an integer in
/// `0..=65535` is rejected.
pub fn parse_custom_port(input: &str) -> Result<Option<u16>, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u16>()
        .map(Some)
        .map_err(|_| InputError::InvalidPort(trimmed.to_string()))
}

use std::time::Duration;

pub const DEFAULT_PARALLELISM: usize = 100;
pub const DEFAULT_PING_TIMEOUT: Duration = Duration::from_millis(1_000);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(1_000);

#[derive(Debug, Clone)]
pub struct Config {
    /// Hides the banner printed before the scan starts.
    pub no_banner: bool,
    /// 0 prints everything, 1 drops headers and decorations, 2 prints the table only.
    pub quiet: u8,
    /// Skips the interactive custom port prompt.
    pub disable_input: bool,
    /// Upper bound of concurrently running probes. Never below 1.
    pub parallelism: usize,
    /// How long a single liveness check may wait for a reply.
    pub ping_timeout: Duration,
    /// How long a single TCP connect may take before the port counts as closed.
    pub connect_timeout: Duration,
}

impl Config {
    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism.max(1);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            disable_input: false,
            parallelism: DEFAULT_PARALLELISM,
            ping_timeout: DEFAULT_PING_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

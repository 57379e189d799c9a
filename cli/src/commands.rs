pub mod scan;

use std::time::Duration;

use clap::{ArgAction, Parser};
use sweepr_common::config::{Config, DEFAULT_PARALLELISM};
use sweepr_common::network::ports;

#[derive(Parser)]
#[command(name = "sweepr")]
#[command(about = "Finds live hosts on the local /24 and checks them for open TCP ports.")]
#[command(version)]
pub struct CommandLine {
    /// Extra TCP port to check on every live host (skips the prompt)
    #[arg(short, long, value_parser = parse_port_arg)]
    pub port: Option<u16>,

    /// Do not ask for a custom port
    #[arg(long)]
    pub no_input: bool,

    /// Maximum number of probes in flight
    #[arg(short = 'j', long, default_value_t = DEFAULT_PARALLELISM)]
    pub parallelism: usize,

    /// Liveness timeout per address, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 1_000)]
    pub ping_timeout: u64,

    /// TCP connect timeout per port, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 1_000)]
    pub connect_timeout: u64,

    /// Hide the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Less output (-q drops decorations, -qq prints the table only)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            disable_input: self.no_input || self.port.is_some(),
            parallelism: self.parallelism,
            ping_timeout: Duration::from_millis(self.ping_timeout),
            connect_timeout: Duration::from_millis(self.connect_timeout),
        }
        .with_parallelism(self.parallelism)
    }
}

fn parse_port_arg(s: &str) -> Result<u16, String> {
    match ports::parse_custom_port(s) {
        Ok(Some(port)) => Ok(port),
        Ok(None) => Err("port must not be empty".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

use std::io;

use sweepr_common::config::Config;
use sweepr_common::network::ports::PortSet;
use sweepr_core::scanner;

use crate::terminal::{print, prompt, ui::TerminalUi};

pub async fn scan(custom_port: Option<u16>, cfg: &Config, ui: &TerminalUi) -> anyhow::Result<()> {
    let custom_port: Option<u16> = match custom_port {
        Some(port) => Some(port),
        None if cfg.disable_input => None,
        None => prompt::ask_custom_port(&mut io::stdin().lock(), cfg.quiet),
    };

    let ports = PortSet::default().with_custom(custom_port);
    if cfg.quiet == 0 {
        print::aligned_line("Ports", ports.to_string());
        print::aligned_line("Workers", cfg.parallelism.to_string());
    }

    scanner::perform_scan(cfg, &ports, ui).await?;
    print::end_of_program(cfg.quiet);
    Ok(())
}

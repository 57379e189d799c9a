mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, scan};
use sweepr_common::config::Config;
use sweepr_common::ui::UserInterface;
use terminal::{logging, print, ui::TerminalUi};

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    logging::init_logging(commands.verbose, commands.quiet);

    let cfg: Config = commands.to_config();
    let ui = TerminalUi::new(cfg.quiet);

    print::banner(cfg.no_banner, cfg.quiet);

    match scan::scan(commands.port, &cfg, &ui).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.display_error(&e);
            ExitCode::FAILURE
        }
    }
}

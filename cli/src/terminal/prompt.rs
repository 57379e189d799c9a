use std::io::BufRead;

use sweepr_common::network::ports;
use tracing::warn;

use crate::terminal::print;

/// Asks once for an extra port to check.
///
/// Blank input, end of input and unparsable answers all mean "no custom
/// port"; the latter with a warning.
pub fn ask_custom_port<R: BufRead>(input: &mut R, q_level: u8) -> Option<u16> {
    if q_level == 0 {
        print::print_status("do you want to add a custom port to check?");
    }
    print::print_status("Enter the port number (leave empty to skip):");

    let mut line = String::new();
    if let Err(e) = input.read_line(&mut line) {
        warn!("could not read from stdin: {e}");
        return None;
    }

    match ports::parse_custom_port(&line) {
        Ok(port) => port,
        Err(e) => {
            warn!("{e}, continuing with the default ports");
            None
        }
    }
}

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, modifiers};
use sweepr_common::report::ScanReport;

pub const TITLE: &str = "Active IPs and Open Ports";
pub const NO_OPEN_PORTS: &str = "None";

/// Builds the result table. An empty report yields a header-only table.
pub fn build(report: &ScanReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("IP Address")
                .add_attribute(Attribute::Bold)
                .fg(Color::Magenta),
            Cell::new("Open Ports")
                .add_attribute(Attribute::Bold)
                .fg(Color::Magenta),
        ]);

    for host in report {
        table.add_row(vec![
            Cell::new(host.addr.to_string()).fg(Color::Green),
            Cell::new(open_ports_cell(&host.open_ports))
                .add_attribute(Attribute::Bold)
                .fg(Color::Yellow),
        ]);
    }

    table
}

pub fn open_ports_cell(ports: &[u16]) -> String {
    if ports.is_empty() {
        return NO_OPEN_PORTS.to_string();
    }
    ports
        .iter()
        .map(u16::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}

//! Terminal front-end for the scan pipeline.

use std::sync::Mutex;

use colored::*;
use indicatif::ProgressStyle;
use sweepr_common::network::subnet::Subnet;
use sweepr_common::report::ScanReport;
use sweepr_common::ui::{ProgressObserver, UserInterface};
use tracing::{Span, error, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::{colors, print, table};

const PROGRESS_TEMPLATE: &str =
    "{spinner:.blue} {msg} [{bar:32.green/bright_black}] {pos}/{len} ({elapsed})";

pub struct TerminalUi {
    quiet: u8,
    /// Carries the progress bar while a sweep is running, `Span::none()` otherwise.
    sweep_span: Mutex<Span>,
}

impl TerminalUi {
    pub fn new(quiet: u8) -> Self {
        Self {
            quiet,
            sweep_span: Mutex::new(Span::none()),
        }
    }

    fn replace_span(&self, span: Span) {
        if let Ok(mut current) = self.sweep_span.lock() {
            *current = span;
        }
    }
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ])
        .progress_chars("█▓░")
}

impl ProgressObserver for TerminalUi {
    fn advance_progress(&self) {
        if let Ok(span) = self.sweep_span.lock() {
            span.pb_inc(1);
        }
    }
}

impl UserInterface for TerminalUi {
    fn print_header(&self, text: &str) {
        print::header(text, self.quiet);
    }

    fn start_progress(&self, subnet: &Subnet, total: usize) {
        if self.quiet > 0 {
            return;
        }
        print::aligned_line("Subnet", subnet.to_string().color(colors::IPV4_ADDR));
        print::aligned_line("Targets", total.to_string());

        let span = info_span!("sweep");
        span.pb_set_style(&progress_style());
        span.pb_set_length(total as u64);
        span.pb_set_message(&format!("Sweeping {subnet}"));
        span.pb_start();
        self.replace_span(span);
    }

    fn finish_progress(&self, live_hosts: usize) {
        // Dropping the span removes its bar.
        self.replace_span(Span::none());
        if self.quiet == 0 {
            print::aligned_line("Live", format!("{live_hosts} hosts").color(colors::ACCENT));
        }
    }

    fn display_report(&self, report: &ScanReport) {
        if report.is_empty() {
            print::header("zero hosts detected", self.quiet);
        } else {
            print::header(table::TITLE, self.quiet);
        }

        let rendered: String = table::build(report).to_string();
        for line in rendered.lines() {
            print::print(line);
        }

        if self.quiet == 0 {
            let closed = report.hosts().iter().filter(|h| h.is_closed()).count();
            let summary = format!(
                "{} hosts up, {} with open ports",
                report.len().to_string().green().bold(),
                (report.len() - closed).to_string().yellow().bold()
            );
            print::fat_separator();
            print::centerln(&summary);
        }
    }

    fn display_error(&self, err: &anyhow::Error) {
        self.replace_span(Span::none());
        error!("{err:#}");
    }
}

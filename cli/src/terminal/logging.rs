use colored::*;
use sweepr_common::log::{PRINT_TARGET, SUCCESS_TARGET};
use tracing::{Event, Level, Subscriber};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

pub struct SweeprFormatter;

impl<S, N> FormatEvent<S, N> for SweeprFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            let (symbol, color_func) = prefix(meta.level(), meta.target());
            write!(writer, "{} ", color_func(symbol.into()))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn prefix(level: &Level, target: &str) -> (&'static str, fn(ColoredString) -> ColoredString) {
    if target == SUCCESS_TARGET {
        return ("[+]", |s| s.green().bold());
    }
    match *level {
        Level::TRACE => ("[ ]", |s| s.dimmed()),
        Level::DEBUG => ("[?]", |s| s.blue()),
        Level::INFO => ("[*]", |s| s.cyan()),
        Level::WARN => ("[!]", |s| s.yellow().bold()),
        Level::ERROR => ("[-]", |s| s.red().bold()),
    }
}

/// Filter directives built from the command line. `RUST_LOG` is not consulted.
pub fn directives(verbose: u8, quiet: u8) -> String {
    let level = match (quiet, verbose) {
        (q, _) if q > 0 => "warn",
        (_, 0) => "info",
        (_, 1) => "debug",
        _ => "trace",
    };
    format!(
        "warn,sweepr_cli={level},sweepr_core={level},sweepr_common={level},{PRINT_TARGET}=info,{SUCCESS_TARGET}={level}"
    )
}

pub fn init_logging(verbose: u8, quiet: u8) {
    let indicatif_layer = IndicatifLayer::new();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .event_format(SweeprFormatter)
        .with_writer(indicatif_layer.get_stdout_writer());

    tracing_subscriber::registry()
        .with(EnvFilter::new(directives(verbose, quiet)))
        .with(fmt_layer)
        .with(indicatif_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::print::print;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;

    struct Targets(Arc<Mutex<Vec<String>>>);

    impl<S: Subscriber> Layer<S> for Targets {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.lock().unwrap().push(event.metadata().target().to_string());
        }
    }

    #[test]
    fn print_target_survives_quiet_mode() {
        let d = directives(0, 2);
        assert!(d.contains("sweepr::print=info"));
        assert!(d.contains("sweepr_core=warn"));
    }

    #[test]
    fn verbosity_raises_crate_levels() {
        assert!(directives(1, 0).contains("sweepr_core=debug"));
        assert!(directives(3, 0).contains("sweepr_core=trace"));
        assert!(directives(0, 0).starts_with("warn,sweepr_cli=info"));
    }

    #[test]
    fn success_events_get_their_own_prefix() {
        let (symbol, _) = prefix(&Level::INFO, SUCCESS_TARGET);
        assert_eq!(symbol, "[+]");
        let (symbol, _) = prefix(&Level::INFO, "sweepr_core::scanner");
        assert_eq!(symbol, "[*]");
    }

    #[test]
    fn emitters_use_the_targets_the_formatter_matches() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(Targets(Arc::clone(&seen)));
        tracing::subscriber::with_default(subscriber, || {
            sweepr_common::success!("done");
            print("raw line");
        });
        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![SUCCESS_TARGET.to_string(), PRINT_TARGET.to_string()]);
    }
}

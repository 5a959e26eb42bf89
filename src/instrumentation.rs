//! Span timing for the search and difficulty entry points.
//!
//! Compiled only with `--features instrumentation`. Every function annotated
//! with `instrument` is timed on entry and exit, and the per-span totals are
//! printed to stderr when the CLI exits.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;
use thread_local::ThreadLocal;
use tracing::span;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Clone, Copy, Default)]
struct SpanTiming {
    calls: u64,
    total_nanos: u64,
}

impl SpanTiming {
    fn add(&mut self, other: SpanTiming) {
        self.calls += other.calls;
        self.total_nanos += other.total_nanos;
    }

    fn total_millis(&self) -> f64 {
        self.total_nanos as f64 / 1_000_000.0
    }

    fn average_micros(&self) -> f64 {
        if self.calls == 0 {
            return 0.0;
        }
        self.total_nanos as f64 / self.calls as f64 / 1_000.0
    }
}

type TimingTable = HashMap<&'static str, SpanTiming>;

static SPAN_TIMINGS: Lazy<ThreadLocal<Mutex<TimingTable>>> = Lazy::new(ThreadLocal::new);

struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let started = match span.extensions_mut().remove::<Instant>() {
            Some(started) => started,
            None => return,
        };

        let table = SPAN_TIMINGS.get_or(|| Mutex::new(HashMap::new()));
        if let Ok(mut table) = table.lock() {
            table.entry(span.name()).or_default().add(SpanTiming {
                calls: 1,
                total_nanos: started.elapsed().as_nanos() as u64,
            });
        }
    }
}

/// Installs the timing layer as the global subscriber.
///
/// With `RUST_LOG` unset or `off` spans are only timed; any other value also
/// prints span events filtered by `RUST_LOG`.
pub fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_default();

    let result = if filter.is_empty() || filter == "off" {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("trace"))
            .with(TimingLayer);
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(false)
            .compact();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(TimingLayer)
            .with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)
    };

    if let Err(error) = result {
        eprintln!("instrumentation disabled: {}", error);
    }
}

/// Prints call counts and latencies per span, slowest total first.
pub fn print_timing_statistics() {
    let mut totals: TimingTable = HashMap::new();
    for table in SPAN_TIMINGS.iter() {
        if let Ok(table) = table.lock() {
            for (name, timing) in table.iter() {
                totals.entry(*name).or_default().add(*timing);
            }
        }
    }

    if totals.is_empty() {
        eprintln!("\nNo timing data collected.");
        return;
    }

    let mut rows: Vec<_> = totals.into_iter().collect();
    rows.sort_by_key(|(_, timing)| std::cmp::Reverse(timing.total_nanos));

    eprintln!("\n{:=<72}", "");
    eprintln!(
        "{:<32} {:>12} {:>12} {:>12}",
        "Span", "Calls", "Total (ms)", "Avg (µs)"
    );
    eprintln!("{:-<72}", "");
    for (name, timing) in rows.iter() {
        eprintln!(
            "{:<32} {:>12} {:>12.2} {:>12.2}",
            name,
            timing.calls,
            timing.total_millis(),
            timing.average_micros()
        );
    }
    eprintln!("{:=<72}", "");
}

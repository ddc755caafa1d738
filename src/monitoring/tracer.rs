/*!
 * Structured Tracing
 * Subscriber setup and per-processor spans using the tracing crate
 *
 * Every runner thread enters a span carrying its processor id and
 * algorithm, so interleaved events from concurrent processors stay
 * attributable in both the compact and the JSON output.
 */

use crate::core::types::ProcessorId;
use crate::scheduler::SchedulingAlgorithm;
use tracing::{info, span, Level, Span};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - MPSCHED_TRACE_JSON: Enable JSON output (default: false)
///
/// Events go to stderr; stdout is reserved for the report and the dump.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("MPSCHED_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_thread_names(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Span wrapping one processor runner for its whole lifetime
pub fn processor_span(processor: ProcessorId, algorithm: SchedulingAlgorithm) -> Span {
    span!(
        Level::INFO,
        "processor",
        id = processor,
        algorithm = algorithm.as_str()
    )
}

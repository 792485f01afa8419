use smartcalc::trace_categories;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer,
};

/// Environment variable that enables tracing like `--trace`
pub(crate) const TRACE_ENV: &str = "SMARTCALC_TRACE";

/// Whether tracing was requested through the environment
pub(crate) fn trace_requested_by_env() -> bool {
    std::env::var(TRACE_ENV).is_ok_and(|v| v == "1")
}

/// Install the stderr subscriber. Calculator targets log at DEBUG when
/// `enabled`, everything else stays at WARN.
pub(crate) fn init(enabled: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_filter(compose_filter(enabled));

    if tracing_subscriber::registry().with(layer).try_init().is_err() {
        eprintln!("warning: failed to initialize tracing.");
    }
}

fn compose_filter(enabled: bool) -> Targets {
    let filter = Targets::new().with_default(LevelFilter::WARN);
    if !enabled {
        return filter;
    }
    filter.with_targets(
        trace_categories::ALL
            .into_iter()
            .map(|target| (target, LevelFilter::DEBUG)),
    )
}

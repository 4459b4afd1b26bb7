use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging.
///
/// Quiet by default: only error-level events are emitted so stdout/stderr stay
/// readable for an interactive tool. With `verbose`, info-level and above.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "error" };

    let mut filter = EnvFilter::from_default_env();
    for target in ["pr", "pr_core"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}

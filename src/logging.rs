use std::io;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

/// Logs go to stderr; stdout is reserved for the JSON output.
pub fn setup() {
    let filter = filter::Targets::new()
        .with_target("planning_bpjeps", Level::TRACE)
        .with_default(Level::WARN);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

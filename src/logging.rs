//! Tracing subscriber setup for the Lambda binaries.

use std::env;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "items_crud=info,warn";

/// Environment variable selecting the output format (`json` or `compact`).
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Install the global subscriber. Call once, at the top of `main`.
///
/// Logs are JSON by default; CloudWatch does not render ANSI colours.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let format = env::var(LOG_FORMAT_VAR).unwrap_or_default();

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "compact" => {
            registry
                .with(fmt::layer().compact().with_ansi(false))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_current_span(false))
                .init();
        }
    }
}

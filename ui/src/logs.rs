//! Logging to the javascript console.
//!
//! There is no process environment in the browser, so the filter is fixed
//! at build time: `UI_LOG="ui=trace,fetch_state=trace" trunk build` replaces
//! the default directives.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Fetch lifecycle events from `fetch_state` are debug level.
const DEFAULT_DIRECTIVES: &str = "error,ui=debug,fetch_state=debug";

fn directives(build_override: Option<&'static str>) -> &'static str {
    build_override
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVES)
}

/// Initialize logging. Call once, before the app is rendered.
pub fn init_logging() {
    let directives = directives(option_env!("UI_LOG"));
    let (env_filter, rejected) = match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_DIRECTIVES), Some(err)),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    if let Some(err) = rejected {
        tracing::warn!(%err, directives, "ignoring invalid UI_LOG filter");
    }
    tracing::info!(directives, "Initialized logs");
}

//! Browser log sink for `tracing` events.
//!
//! # Design
//! - Events go to the devtools console through `tracing-web`; the filter is
//!   baked in at build time (`BACKOFFICE_LOG`).
//! - Timestamps are left to the console, which has its own.

use crate::core::config::{DEFAULT_LOG_FILTER, LOG_FILTER_ENV, log_filter};
use gloo::console;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::MakeWebConsoleWriter;

/// Install the console subscriber. A second install is reported and ignored.
pub(crate) fn install() {
    let directive = log_filter(LOG_FILTER_ENV);
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|err| {
        console::warn!("invalid log filter; using default", directive, err.to_string());
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });
    let layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(MakeWebConsoleWriter::new());
    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
    {
        console::warn!("tracing subscriber not installed", err.to_string());
    }
}

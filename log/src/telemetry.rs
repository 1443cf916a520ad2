//! Install a global [tracing] subscriber.

use crate::{Error, Journal, JournalLayer};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, EnvFilter, Registry};

/// Log events at `level` (and above) to standard output and, if provided, into `journal`.
///
/// Fails if a global subscriber is already installed.
pub fn init(level: Level, journal: Option<Arc<Journal>>) -> Result<(), Error> {
    // Create fmt layer for logging
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_span_events(FmtSpan::CLOSE);

    // Create a filter layer to set the maximum level
    let filter = EnvFilter::new(level.to_string());

    // Set the global subscriber
    let subscriber = Registry::default()
        .with(filter)
        .with(fmt_layer)
        .with(journal.map(JournalLayer::new));
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| Error::Subscriber(err.to_string()))
}

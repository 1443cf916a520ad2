//! [tracing_subscriber::Layer] that writes events into a [Journal].

use crate::{Journal, Kind, TARGET};
use std::{
    fmt::{self, Write},
    sync::Arc,
};
use tracing::{field, Event, Subscriber};
use tracing_subscriber::{layer::Context, Layer};

/// The message and `key=value` fields of an event.
#[derive(Default)]
struct Fields {
    message: String,
    pairs: Vec<(&'static str, String)>,
}

impl field::Visit for Fields {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.pairs.push((field.name(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        let rendered = format!("{value:?}");
        if field.name() == "message" {
            self.message = rendered;
        } else {
            self.pairs.push((field.name(), rendered));
        }
    }
}

/// Writes every event as a [Journal] entry whose [Kind] follows the event's level.
///
/// Events emitted by the journal itself are skipped, so a failing output cannot feed back into
/// the journal.
#[derive(Clone, Debug)]
pub struct JournalLayer {
    journal: Arc<Journal>,
}

impl JournalLayer {
    pub fn new(journal: Arc<Journal>) -> Self {
        Self { journal }
    }
}

impl<S: Subscriber> Layer<S> for JournalLayer {
    fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
        let metadata = event.metadata();
        if metadata.target() == TARGET {
            return;
        }

        let mut fields = Fields::default();
        event.record(&mut fields);

        let mut entry = self.journal.entry().kind(Kind::from(*metadata.level()));
        let _ = entry.write_str(&fields.message);
        for (name, value) in fields.pairs {
            let _ = write!(entry, " {name}={value}");
        }
        entry.flush();
    }
}

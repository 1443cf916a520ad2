//! Write leveled, categorised entries to the console and a file.
//!
//! A [Journal] holds up to two outputs: a console (any writer, usually standard output) and a
//! file. Every write goes to each open output and is flushed immediately.
//!
//! Entries are built with [Journal::entry] and filtered twice before they are written: an entry's
//! level must not exceed the journal's level, and its category must share at least one bit with
//! the journal's categories.
//!
//! # Example
//!
//! ```rust
//! use mlib_log::{Config, Journal};
//! use std::fmt::Write;
//!
//! let journal = Journal::new(Config::default());
//! journal.open_stdout();
//!
//! let mut entry = journal.warning();
//! write!(entry, "disk {} is {}% full", "sda", 93).unwrap();
//! entry.flush();
//! ```

use std::{
    fmt,
    fs::File,
    io::Write,
    path::Path,
    sync::{
        atomic::{AtomicU32, Ordering},
        Mutex,
    },
};
use thiserror::Error;
use tracing::warn;

mod entry;
pub use entry::{Entry, TIMESTAMP_FORMAT};
mod layer;
pub use layer::JournalLayer;
pub mod telemetry;

#[cfg(test)]
mod mocks;

/// Target of the events the journal emits about itself.
const TARGET: &str = "mlib_log::journal";

/// Category mask that matches every category.
pub const ALL: u32 = u32::MAX;

/// Errors that can occur when using a [Journal].
#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to install subscriber: {0}")]
    Subscriber(String),
}

/// Configuration for a [Journal].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Most verbose entry level that is written.
    pub level: u32,

    /// Categories that are written.
    pub categories: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: 0,
            categories: ALL,
        }
    }
}

/// Severity of an [Entry]. Every kind except [Kind::Normal] is tagged in the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Kind {
    #[default]
    Normal,
    Info,
    Warning,
    Error,
    Critical,
}

impl Kind {
    /// The tag written before the entry's text.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Info => "[Info]",
            Self::Warning => "[Warning]",
            Self::Error => "[Error]",
            Self::Critical => "[Critical]",
        }
    }
}

impl From<tracing::Level> for Kind {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR => Self::Error,
            tracing::Level::WARN => Self::Warning,
            tracing::Level::INFO => Self::Info,
            _ => Self::Normal,
        }
    }
}

type Output = Box<dyn Write + Send>;

/// A thread-safe sink with an optional console output and an optional file output.
pub struct Journal {
    console: Mutex<Option<Output>>,
    file: Mutex<Option<Output>>,
    level: AtomicU32,
    categories: AtomicU32,
}

impl Journal {
    /// Create a journal with no open outputs.
    pub fn new(cfg: Config) -> Self {
        Self {
            console: Mutex::new(None),
            file: Mutex::new(None),
            level: AtomicU32::new(cfg.level),
            categories: AtomicU32::new(cfg.categories),
        }
    }

    /// Write to `writer` as the console output, replacing any open console.
    pub fn open_console(&self, writer: impl Write + Send + 'static) {
        *self.console.lock().unwrap() = Some(Box::new(writer));
    }

    /// Write to standard output as the console output.
    pub fn open_stdout(&self) {
        self.open_console(std::io::stdout());
    }

    /// Close the console output.
    pub fn close_console(&self) {
        self.console.lock().unwrap().take();
    }

    /// Create (or truncate) the file at `path` and use it as the file output.
    ///
    /// On failure the previously open file output (if any) is kept.
    pub fn open_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let file = File::create(path)?;
        self.open_writer(file);
        Ok(())
    }

    /// Write to `writer` as the file output, replacing any open file.
    pub fn open_writer(&self, writer: impl Write + Send + 'static) {
        *self.file.lock().unwrap() = Some(Box::new(writer));
    }

    /// Close the file output.
    pub fn close_file(&self) {
        self.file.lock().unwrap().take();
    }

    /// Returns true if a file output is open.
    pub fn has_file(&self) -> bool {
        self.file.lock().unwrap().is_some()
    }

    /// Most verbose entry level that is written.
    pub fn level(&self) -> u32 {
        self.level.load(Ordering::Relaxed)
    }

    /// Change the most verbose entry level that is written.
    pub fn set_level(&self, level: u32) {
        self.level.store(level, Ordering::Relaxed);
    }

    /// Categories that are written.
    pub fn categories(&self) -> u32 {
        self.categories.load(Ordering::Relaxed)
    }

    /// Change the categories that are written.
    pub fn set_categories(&self, categories: u32) {
        self.categories.store(categories, Ordering::Relaxed);
    }

    /// Start an entry in every category.
    pub fn entry(&self) -> Entry<'_> {
        Entry::new(self, ALL)
    }

    /// Start an entry in `category`.
    pub fn entry_in(&self, category: u32) -> Entry<'_> {
        Entry::new(self, category)
    }

    /// Start a [Kind::Warning] entry in every category.
    pub fn warning(&self) -> Entry<'_> {
        self.entry().kind(Kind::Warning)
    }

    /// Start a [Kind::Error] entry in every category.
    pub fn error(&self) -> Entry<'_> {
        self.entry().kind(Kind::Error)
    }

    /// Write `text` to every open output, unfiltered.
    pub fn write(&self, text: &str) {
        emit(&self.console, "console", text.as_bytes());
        emit(&self.file, "file", text.as_bytes());
    }

    /// Write `text` followed by a newline to every open output, unfiltered.
    pub fn write_line(&self, text: &str) {
        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');
        self.write(&line);
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl fmt::Debug for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Journal")
            .field("level", &self.level())
            .field("categories", &format_args!("{:#010X}", self.categories()))
            .field("console", &self.console.lock().unwrap().is_some())
            .field("file", &self.has_file())
            .finish()
    }
}

/// Write and flush `bytes` to `output` if it is open.
fn emit(output: &Mutex<Option<Output>>, name: &'static str, bytes: &[u8]) {
    let result = {
        let mut output = output.lock().unwrap();
        let Some(writer) = output.as_mut() else {
            return;
        };
        writer.write_all(bytes).and_then(|()| writer.flush())
    };

    // The lock is released so a subscriber forwarding into this journal cannot deadlock
    if let Err(err) = result {
        warn!(target: TARGET, output = name, ?err, "failed to write journal output");
    }
}

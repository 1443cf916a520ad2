use crate::{Journal, Kind};
use chrono::Local;
use std::fmt;

/// Format of the local timestamp that starts every entry.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// A message being built for a [Journal].
///
/// Text is appended with [std::fmt::Write] (usually through `write!`). [Entry::flush] writes the
/// text as one line if it passes the journal's filters. A non-empty entry is flushed when dropped.
pub struct Entry<'a> {
    journal: &'a Journal,
    kind: Kind,
    level: u32,
    category: u32,
    buffer: String,
}

impl<'a> Entry<'a> {
    pub(crate) fn new(journal: &'a Journal, category: u32) -> Self {
        Self {
            journal,
            kind: Kind::Normal,
            level: 0,
            category,
            buffer: String::new(),
        }
    }

    /// Set the tag written before the text.
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the verbosity of the entry. Higher levels are more verbose.
    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Set the categories the entry belongs to.
    pub fn category(mut self, category: u32) -> Self {
        self.category = category;
        self
    }

    /// Text appended since the last successful flush.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Returns true if the journal would currently accept this entry.
    pub fn is_enabled(&self) -> bool {
        self.level <= self.journal.level() && self.category & self.journal.categories() != 0
    }

    /// Write the buffered text as a timestamped line and clear it.
    ///
    /// Does nothing if the buffer is empty. If the entry is filtered out, the text is kept.
    pub fn flush(&mut self) {
        if self.buffer.is_empty() || !self.is_enabled() {
            return;
        }
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let line = match self.kind.tag() {
            "" => format!("{timestamp} {}", self.buffer),
            tag => format!("{timestamp} {tag} {}", self.buffer),
        };
        self.journal.write_line(&line);
        self.buffer.clear();
    }
}

impl fmt::Write for Entry<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl Drop for Entry<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}

impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("kind", &self.kind)
            .field("level", &self.level)
            .field("category", &self.category)
            .field("text", &self.buffer)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mocks::Buffer, Config, ALL};
    use chrono::NaiveDateTime;
    use std::fmt::Write;
    use test_case::test_case;

    fn journal(cfg: Config) -> (Journal, Buffer) {
        let journal = Journal::new(cfg);
        let buffer = Buffer::default();
        journal.open_console(buffer.clone());
        (journal, buffer)
    }

    /// Split a line into its parsed timestamp and the rest.
    fn split(line: &str) -> (NaiveDateTime, &str) {
        let (timestamp, rest) = line.split_at(23);
        let timestamp = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).unwrap();
        (timestamp, rest.strip_prefix(' ').unwrap())
    }

    #[test]
    fn test_normal_entry() {
        let (journal, buffer) = journal(Config::default());
        let mut entry = journal.entry();
        write!(entry, "value = {}", 42).unwrap();
        assert_eq!(entry.text(), "value = 42");
        entry.flush();
        assert_eq!(entry.text(), "");

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        let (_, text) = split(&lines[0]);
        assert_eq!(text, "value = 42");
    }

    #[test_case(Kind::Info, "[Info] hello"; "info")]
    #[test_case(Kind::Warning, "[Warning] hello"; "warning")]
    #[test_case(Kind::Error, "[Error] hello"; "error")]
    #[test_case(Kind::Critical, "[Critical] hello"; "critical")]
    fn test_tagged_entry(kind: Kind, expected: &str) {
        let (journal, buffer) = journal(Config::default());
        let mut entry = journal.entry().kind(kind);
        entry.write_str("hello").unwrap();
        entry.flush();
        let lines = buffer.lines();
        assert_eq!(split(&lines[0]).1, expected);
    }

    #[test]
    fn test_shortcuts() {
        let (journal, buffer) = journal(Config::default());
        write!(journal.warning(), "w").unwrap();
        write!(journal.error(), "e").unwrap();
        write!(journal.entry_in(0b10), "c").unwrap();

        let lines = buffer.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(split(&lines[0]).1, "[Warning] w");
        assert_eq!(split(&lines[1]).1, "[Error] e");
        assert_eq!(split(&lines[2]).1, "c");
    }

    #[test]
    fn test_empty_entry_not_written() {
        let (journal, buffer) = journal(Config::default());
        let mut entry = journal.entry();
        entry.flush();
        drop(entry);
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_level_filter() {
        let (journal, buffer) = journal(Config {
            level: 1,
            categories: ALL,
        });

        let mut verbose = journal.entry().level(2);
        write!(verbose, "verbose").unwrap();
        assert!(!verbose.is_enabled());
        verbose.flush();
        assert!(buffer.contents().is_empty());

        // Filtered text is kept and written once the journal accepts it
        assert_eq!(verbose.text(), "verbose");
        journal.set_level(2);
        verbose.flush();
        assert_eq!(split(&buffer.lines()[0]).1, "verbose");

        write!(journal.entry().level(1), "equal").unwrap();
        assert_eq!(buffer.lines().len(), 2);
    }

    #[test]
    fn test_category_filter() {
        let (journal, buffer) = journal(Config {
            level: 0,
            categories: 0b0110,
        });
        write!(journal.entry_in(0b0001), "skipped").unwrap();
        write!(journal.entry_in(0b0100), "kept").unwrap();
        write!(journal.entry().category(0b1010), "overlap").unwrap();
        write!(journal.entry_in(0), "none").unwrap();

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(split(&lines[0]).1, "kept");
        assert_eq!(split(&lines[1]).1, "overlap");
    }

    #[test]
    fn test_drop_flushes() {
        let (journal, buffer) = journal(Config::default());
        {
            let mut entry = journal.entry();
            write!(entry, "on drop").unwrap();
        }
        assert_eq!(split(&buffer.lines()[0]).1, "on drop");
    }

    #[test]
    fn test_reuse_after_flush() {
        let (journal, buffer) = journal(Config::default());
        let mut entry = journal.entry();
        write!(entry, "first").unwrap();
        entry.flush();
        write!(entry, "second").unwrap();
        drop(entry);

        let lines = buffer.lines();
        assert_eq!(split(&lines[0]).1, "first");
        assert_eq!(split(&lines[1]).1, "second");
        assert!(split(&lines[0]).0 <= split(&lines[1]).0);
    }
}

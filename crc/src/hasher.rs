use crate::{init, result, update, SEED};
use std::io;

/// A CRC-32 accumulator that owns its state.
///
/// [Crc32::finalize] resets the accumulator, so an instance can be reused for the next stream
/// without an explicit [Crc32::reset].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crc32 {
    crc: u32,
}

impl Crc32 {
    /// Create a new accumulator.
    pub fn new() -> Self {
        let mut crc = 0;
        init(&mut crc);
        Self { crc }
    }

    /// Append `data` to previously recorded bytes.
    pub fn update(&mut self, data: &[u8]) {
        update(data, &mut self.crc);
    }

    /// Return the checksum of all recorded bytes and reset the accumulator.
    pub fn finalize(&mut self) -> u32 {
        let checksum = result(&mut self.crc);
        self.reset();
        checksum
    }

    /// Return the checksum of all recorded bytes without resetting the accumulator.
    pub fn peek(&self) -> u32 {
        !self.crc
    }

    /// Discard all recorded bytes.
    pub fn reset(&mut self) {
        init(&mut self.crc);
    }

    /// Return the checksum of no bytes.
    pub const fn empty() -> u32 {
        !SEED
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl io::Write for Crc32 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

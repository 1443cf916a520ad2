//! Byte-at-a-time reduction table for the reflected CRC-32 polynomial.

/// Reflected form of the CRC-32 generator polynomial `0x04C11DB7` (zlib, Ethernet, PNG).
pub const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Number of entries in a [Table] (one per byte value).
pub const SIZE: usize = 256;

/// Precomputed remainder of every byte value after 8 reflected division steps.
///
/// The process-wide instance is [TABLE], evaluated at compile time. Building a
/// [Table] at runtime with [Table::new] always yields the same entries.
#[derive(Clone, PartialEq, Eq)]
pub struct Table([u32; SIZE]);

/// The table used by [crate::update] and friends.
pub static TABLE: Table = Table::new();

impl Table {
    /// Derive the table from [POLYNOMIAL].
    pub const fn new() -> Self {
        let mut entries = [0u32; SIZE];
        let mut i = 0;
        while i < SIZE {
            let mut crc = i as u32;
            let mut bit = 0;
            while bit < 8 {
                if crc & 1 != 0 {
                    crc = (crc >> 1) ^ POLYNOMIAL;
                } else {
                    crc >>= 1;
                }
                bit += 1;
            }
            entries[i] = crc;
            i += 1;
        }
        Self(entries)
    }

    /// Returns the entry for `index`.
    #[inline]
    pub const fn get(&self, index: u8) -> u32 {
        self.0[index as usize]
    }

    /// Returns all entries.
    pub const fn entries(&self) -> &[u32; SIZE] {
        &self.0
    }

    /// Fold `data` into a running (non-finalized) accumulator and return the new value.
    #[inline]
    pub fn update(&self, mut crc: u32, data: &[u8]) -> u32 {
        for &byte in data {
            crc = self.0[((crc ^ byte as u32) & 0xFF) as usize] ^ (crc >> 8);
        }
        crc
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("polynomial", &format_args!("{POLYNOMIAL:#010X}"))
            .finish_non_exhaustive()
    }
}

//! Compute CRC-32 checksums over byte streams.
//!
//! # Overview
//!
//! Implements the reflected CRC-32 used by zlib's `crc32()`, Ethernet frame check sequences and
//! PNG chunks (polynomial `0xEDB88320`, initial value `0xFFFFFFFF`, final complement). Input is
//! processed one byte per step against a 256-entry [table::TABLE] computed at compile time.
//!
//! A checksum is produced with a three-phase protocol over a caller-owned `u32` accumulator:
//! [init] seeds it, [update] folds in any number of chunks, and [result] finalizes it. Folding a
//! stream in several chunks yields the same accumulator as folding it at once.
//!
//! ```
//! let mut crc = 0;
//! mlib_crc::init(&mut crc);
//! mlib_crc::update(b"12345", &mut crc);
//! mlib_crc::update(b"6789", &mut crc);
//! assert_eq!(mlib_crc::result(&mut crc), 0xCBF4_3926);
//! ```
//!
//! [Crc32] wraps the same protocol in an object that owns its accumulator.
//!
//! # Misuse
//!
//! The protocol is not validated at runtime. Calling [update] before [init], calling [update]
//! on an accumulator that was already passed to [result], or calling [result] twice (which flips
//! the value back to its running form) produces an unspecified checksum.

use bytes::Buf;

mod hasher;
pub use hasher::Crc32;
pub mod table;
use table::TABLE;

/// Value of an accumulator after [init].
pub const SEED: u32 = !0;

/// Size of a checksum in bytes.
pub const SIZE: usize = 4;

/// Seed `crc` for a new stream.
#[inline]
pub fn init(crc: &mut u32) {
    *crc = SEED;
}

/// Fold `data` into a running accumulator.
///
/// An empty slice leaves the accumulator unchanged.
#[inline]
pub fn update(data: &[u8], crc: &mut u32) {
    *crc = TABLE.update(*crc, data);
}

/// Fold every remaining byte of `buf` into a running accumulator, advancing `buf` to its end.
pub fn update_buf(buf: &mut impl Buf, crc: &mut u32) {
    while buf.has_remaining() {
        let chunk = buf.chunk();
        let len = chunk.len();
        update(chunk, crc);
        buf.advance(len);
    }
}

/// Finalize `crc` in place and return the checksum.
#[inline]
pub fn result(crc: &mut u32) -> u32 {
    *crc = !*crc;
    *crc
}

/// Encode a checksum in big-endian order, as it is stored in PNG chunks.
#[inline]
pub fn to_bytes(checksum: u32) -> [u8; SIZE] {
    checksum.to_be_bytes()
}

/// Compute the checksum of `data` in one call.
pub fn checksum(data: &[u8]) -> u32 {
    let mut crc = 0;
    init(&mut crc);
    update(data, &mut crc);
    result(&mut crc)
}

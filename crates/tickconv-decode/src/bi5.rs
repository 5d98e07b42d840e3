//! Format-A ("compressed" bi5 layout) decoder.

use std::slice::ChunksExact;

use byteorder::{BigEndian, ByteOrder};
use tickconv_types::{DecodeContext, RawTick, Tick, WireFormat};

use crate::{DecodeError, Truncation};

/// Decodes Format-A ticks from a decompressed bi5 buffer.
///
/// Records are 20 bytes, big-endian:
/// - `u32`: milliseconds elapsed since the context's hour start (bytes 0-3)
/// - `u32`: ask price as a scaled integer (bytes 4-7)
/// - `u32`: bid price as a scaled integer (bytes 8-11)
/// - `f32`: ask volume (bytes 12-15)
/// - `f32`: bid volume (bytes 16-19)
///
/// Only complete records are decoded; `policy` decides what happens to
/// a trailing fragment. The returned iterator yields ticks lazily in
/// byte-offset order and performs no time-ordering check.
///
/// # Errors
///
/// Returns [`DecodeError::TrailingBytes`] if the buffer length is not
/// a multiple of 20 and `policy` is [`Truncation::Reject`].
pub fn decode_bi5(
    data: &[u8],
    ctx: DecodeContext,
    policy: Truncation,
) -> Result<Bi5Ticks<'_>, DecodeError> {
    let chunks = data.chunks_exact(RawTick::SIZE);
    policy.check(WireFormat::Bi5, data.len(), chunks.remainder().len())?;
    Ok(Bi5Ticks { chunks, ctx })
}

/// Lazy iterator over the ticks of one bi5 buffer, in byte-offset order.
#[derive(Debug, Clone)]
pub struct Bi5Ticks<'a> {
    chunks: ChunksExact<'a, u8>,
    ctx: DecodeContext,
}

impl Bi5Ticks<'_> {
    /// Bytes at the end of the buffer too short to form a record.
    #[must_use]
    pub fn trailing_bytes(&self) -> usize {
        self.chunks.remainder().len()
    }
}

impl Iterator for Bi5Ticks<'_> {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        self.chunks
            .next()
            .map(|chunk| decode_record(chunk).normalize(&self.ctx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Bi5Ticks<'_> {}

/// Decodes a single 20-byte record.
#[inline]
fn decode_record(chunk: &[u8]) -> RawTick {
    RawTick::new(
        BigEndian::read_u32(&chunk[0..4]),
        BigEndian::read_u32(&chunk[4..8]),
        BigEndian::read_u32(&chunk[8..12]),
        BigEndian::read_f32(&chunk[12..16]),
        BigEndian::read_f32(&chunk[16..20]),
    )
}

//! Format-B ("archived" bin layout) decoder.

use std::slice::ChunksExact;

use byteorder::{BigEndian, ByteOrder};
use chrono::DateTime;
use tickconv_types::{Tick, WireFormat};

use crate::{DecodeError, Truncation};

const RECORD_SIZE: usize = WireFormat::Bin.record_size();

/// Decodes Format-B ticks from an extracted bin buffer.
///
/// Records are 40 bytes, big-endian throughout:
/// - `u64`: absolute epoch in milliseconds (bytes 0-7)
/// - `f64`: ask price (bytes 8-15)
/// - `f64`: bid price (bytes 16-23)
/// - `f64`: ask volume (bytes 24-31)
/// - `f64`: bid volume (bytes 32-39)
///
/// Prices and volumes are already in natural units; no scale applies.
/// Only complete records are decoded; `policy` decides what happens to
/// a trailing fragment.
///
/// # Errors
///
/// Returns [`DecodeError::TrailingBytes`] if the buffer length is not
/// a multiple of 40 and `policy` is [`Truncation::Reject`].
pub fn decode_bin(data: &[u8], policy: Truncation) -> Result<BinTicks<'_>, DecodeError> {
    let chunks = data.chunks_exact(RECORD_SIZE);
    policy.check(WireFormat::Bin, data.len(), chunks.remainder().len())?;
    Ok(BinTicks { chunks, offset: 0 })
}

/// Lazy iterator over the ticks of one bin buffer, in byte-offset order.
///
/// Every bit pattern is a valid double, so the only per-record failure
/// is an epoch outside the representable timestamp range.
#[derive(Debug, Clone)]
pub struct BinTicks<'a> {
    chunks: ChunksExact<'a, u8>,
    offset: usize,
}

impl BinTicks<'_> {
    /// Bytes at the end of the buffer too short to form a record.
    #[must_use]
    pub fn trailing_bytes(&self) -> usize {
        self.chunks.remainder().len()
    }
}

impl Iterator for BinTicks<'_> {
    type Item = Result<Tick, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        let offset = self.offset;
        self.offset += RECORD_SIZE;
        Some(decode_record(chunk, offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for BinTicks<'_> {}

/// Decodes a single 40-byte record starting at `offset`.
#[inline]
fn decode_record(chunk: &[u8], offset: usize) -> Result<Tick, DecodeError> {
    let epoch_ms = BigEndian::read_u64(&chunk[0..8]);
    let timestamp = i64::try_from(epoch_ms)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .ok_or(DecodeError::TimestampOutOfRange {
            format: WireFormat::Bin,
            offset,
            epoch_ms,
        })?;

    Ok(Tick::new(
        timestamp,
        BigEndian::read_f64(&chunk[8..16]),
        BigEndian::read_f64(&chunk[16..24]),
        BigEndian::read_f64(&chunk[24..32]),
        BigEndian::read_f64(&chunk[32..40]),
    ))
}

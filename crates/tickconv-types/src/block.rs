//! Raw input blocks and decoding context.

use chrono::{DateTime, Utc};

use crate::{PriceScale, RawTick};

/// Binary wire format of an hourly tick file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireFormat {
    /// Format A, the "compressed" layout: LZMA-compressed buffers of
    /// 20-byte hour-relative records with integer-scaled prices.
    Bi5,
    /// Format B, the "archived" layout: zip-contained buffers of
    /// 40-byte records with absolute timestamps and double prices.
    Bin,
}

impl WireFormat {
    /// Size in bytes of one complete record.
    #[must_use]
    pub const fn record_size(&self) -> usize {
        match self {
            Self::Bi5 => RawTick::SIZE,
            Self::Bin => 40,
        }
    }

    /// Returns the format as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bi5 => "bi5",
            Self::Bin => "bin",
        }
    }
}

impl std::fmt::Display for WireFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An opaque, already-decompressed/extracted byte buffer tagged with
/// its wire format.
///
/// A block is owned by a single decoder invocation and decodes to zero
/// or more ticks in strict byte-offset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    data: Vec<u8>,
    format: WireFormat,
}

impl RawBlock {
    /// Creates a block from extracted bytes and their declared format.
    #[must_use]
    pub const fn new(data: Vec<u8>, format: WireFormat) -> Self {
        Self { data, format }
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the declared wire format.
    #[must_use]
    pub const fn format(&self) -> WireFormat {
        self.format
    }

    /// Returns the buffer length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Per-buffer decoding context for the Format-A (bi5) decoder.
///
/// Constructed once per input buffer and immutable afterwards. Format-B
/// buffers carry absolute timestamps and need no context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeContext {
    /// UTC epoch of the first instant representable in the buffer.
    pub hour_start: DateTime<Utc>,
    /// Scale applied to integer-encoded prices.
    pub price_scale: PriceScale,
}

impl DecodeContext {
    /// Creates a new decoding context.
    #[must_use]
    pub const fn new(hour_start: DateTime<Utc>, price_scale: PriceScale) -> Self {
        Self {
            hour_start,
            price_scale,
        }
    }
}

/// Outcome of decoding one block, returned by every conversion entry
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeSummary {
    /// Number of complete records decoded.
    pub records: usize,
    /// Bytes at the end of the buffer too short to form a record,
    /// left undecoded.
    pub trailing_bytes: usize,
}

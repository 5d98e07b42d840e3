//! Tick data representation.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::DecodeContext;

/// A single decoded tick quotation.
///
/// A tick's fields are fully determined by its source bytes and
/// decoding context; it never mutates after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Timestamp of the tick (UTC, millisecond resolution).
    pub timestamp: DateTime<Utc>,
    /// Ask (offer) price.
    pub ask: f64,
    /// Bid price.
    pub bid: f64,
    /// Volume available at the ask price.
    pub ask_volume: f64,
    /// Volume available at the bid price.
    pub bid_volume: f64,
}

impl Tick {
    /// Creates a new tick.
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        ask: f64,
        bid: f64,
        ask_volume: f64,
        bid_volume: f64,
    ) -> Self {
        Self {
            timestamp,
            ask,
            bid,
            ask_volume,
            bid_volume,
        }
    }
}

/// Raw Format-A tick as stored in a bi5 record (before normalization).
///
/// The bi5 format stores ticks as 20 bytes in big-endian order:
/// - `u32`: milliseconds elapsed since the hour start
/// - `u32`: ask price as a scaled integer
/// - `u32`: bid price as a scaled integer
/// - `f32`: ask volume
/// - `f32`: bid volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTick {
    /// Milliseconds elapsed since the hour start.
    pub ms_offset: u32,
    /// Raw ask price (scaled integer).
    pub ask_raw: u32,
    /// Raw bid price (scaled integer).
    pub bid_raw: u32,
    /// Ask volume.
    pub ask_volume: f32,
    /// Bid volume.
    pub bid_volume: f32,
}

impl RawTick {
    /// Size in bytes of a raw tick record.
    pub const SIZE: usize = 20;

    /// Creates a new raw tick.
    #[must_use]
    pub const fn new(
        ms_offset: u32,
        ask_raw: u32,
        bid_raw: u32,
        ask_volume: f32,
        bid_volume: f32,
    ) -> Self {
        Self {
            ms_offset,
            ask_raw,
            bid_raw,
            ask_volume,
            bid_volume,
        }
    }

    /// Normalizes the raw tick using the block's decoding context.
    ///
    /// The millisecond offset is anchored to the context's hour start
    /// and the integer prices are converted through its price scale.
    /// For example, a raw price of 112345 with the standard five-digit
    /// scale becomes 1.12345.
    #[must_use]
    pub fn normalize(self, ctx: &DecodeContext) -> Tick {
        let timestamp = ctx.hour_start + TimeDelta::milliseconds(i64::from(self.ms_offset));
        Tick {
            timestamp,
            ask: ctx.price_scale.apply(self.ask_raw),
            bid: ctx.price_scale.apply(self.bid_raw),
            ask_volume: f64::from(self.ask_volume),
            bid_volume: f64::from(self.bid_volume),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PriceScale;
    use chrono::TimeZone;

    #[test]
    fn test_raw_tick_normalize() {
        let hour_start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let ctx = DecodeContext::new(hour_start, PriceScale::FIVE_DIGIT);
        let raw = RawTick::new(1000, 112345, 112340, 100.0, 200.0);
        let tick = raw.normalize(&ctx);

        assert_eq!(tick.timestamp, hour_start + TimeDelta::milliseconds(1000));
        assert!((tick.ask - 1.12345).abs() < 1e-10);
        assert!((tick.bid - 1.1234).abs() < 1e-10);
        assert!((tick.ask_volume - 100.0).abs() < 1e-10);
        assert!((tick.bid_volume - 200.0).abs() < 1e-10);
    }

    #[test]
    fn test_normalize_division_is_exact() {
        // 123450 / 100000 rounds to the f64 nearest 1.2345, which the
        // shortest-round-trip display renders as "1.2345".
        let hour_start = Utc.with_ymd_and_hms(2010, 1, 4, 0, 0, 0).unwrap();
        let ctx = DecodeContext::new(hour_start, PriceScale::FIVE_DIGIT);
        let tick = RawTick::new(0, 123456, 123450, 1.0, 1.0).normalize(&ctx);

        assert_eq!(tick.ask.to_string(), "1.23456");
        assert_eq!(tick.bid.to_string(), "1.2345");
    }
}

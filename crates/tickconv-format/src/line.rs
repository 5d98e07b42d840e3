//! Canonical tick line rendering.

use tickconv_types::{Tick, WireFormat};

/// Price representation tagged at format time.
///
/// Each variant carries a fixed rendering rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    /// Exactly integral value; renders with one decimal place (`1.0`).
    Integral(f64),
    /// Fractional value; renders at natural (shortest round-trip)
    /// precision.
    Fractional(f64),
}

impl Price {
    /// Classifies a decoded price value.
    #[must_use]
    pub fn classify(value: f64) -> Self {
        if value == value.trunc() {
            Self::Integral(value)
        } else {
            Self::Fractional(value)
        }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integral(v) => write!(f, "{v:.1}"),
            Self::Fractional(v) => write!(f, "{v}"),
        }
    }
}

/// Number of digits used when rendering prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PricePrecision {
    /// Natural precision: integral prices as `1.0`, fractional prices
    /// at full shortest-round-trip precision.
    #[default]
    Natural,
    /// Fixed number of decimal places for every price.
    Fixed(u8),
}

/// Per-format volume rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeStyle {
    /// Zero decimal places (Format A).
    Integer,
    /// Exactly two decimal places (Format B).
    TwoDecimal,
}

impl VolumeStyle {
    /// Returns the volume style mandated by a wire format.
    #[must_use]
    pub const fn for_format(format: WireFormat) -> Self {
        match format {
            WireFormat::Bi5 => Self::Integer,
            WireFormat::Bin => Self::TwoDecimal,
        }
    }
}

/// Renders decoded ticks as canonical CSV lines.
///
/// The line is `timestamp,bid,ask,bidvolume,askvolume` terminated by a
/// newline, with the timestamp as `YYYY.MM.DD HH:MM:SS.mmm` in UTC.
/// No thousands separators are ever emitted.
#[derive(Debug, Clone, Copy)]
pub struct LineFormatter {
    volume_style: VolumeStyle,
    precision: PricePrecision,
}

impl LineFormatter {
    /// Creates a formatter for the given wire format with natural
    /// price precision.
    #[must_use]
    pub const fn for_format(format: WireFormat) -> Self {
        Self {
            volume_style: VolumeStyle::for_format(format),
            precision: PricePrecision::Natural,
        }
    }

    /// Sets the price rendering precision.
    #[must_use]
    pub const fn with_precision(mut self, precision: PricePrecision) -> Self {
        self.precision = precision;
        self
    }

    /// Renders one tick as a newline-terminated line.
    #[must_use]
    pub fn format_line(&self, tick: &Tick) -> String {
        format!(
            "{},{},{},{},{}\n",
            tick.timestamp.format("%Y.%m.%d %H:%M:%S%.3f"),
            self.price(tick.bid),
            self.price(tick.ask),
            self.volume(tick.bid_volume),
            self.volume(tick.ask_volume),
        )
    }

    fn price(&self, value: f64) -> String {
        if let PricePrecision::Fixed(digits) = self.precision {
            let digits = usize::from(digits);
            return format!("{value:.digits$}");
        }
        Price::classify(value).to_string()
    }

    fn volume(&self, value: f64) -> String {
        match self.volume_style {
            VolumeStyle::Integer => format!("{value:.0}"),
            VolumeStyle::TwoDecimal => format!("{value:.2}"),
        }
    }
}

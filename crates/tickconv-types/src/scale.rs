//! Per-symbol price scaling.

/// Decimal scale applied to Format-A integer-encoded prices.
///
/// The scale is stored as its divisor (the decimal factor): dividing a
/// raw price by the exact integer factor is correctly rounded against
/// the true decimal value, while multiplying by the nearest-f64 of
/// `0.00001` can land one ulp off and leak into the rendered price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScale {
    decimal_factor: f64,
}

impl PriceScale {
    /// Scale for symbols quoted to five decimal places (most forex pairs).
    pub const FIVE_DIGIT: Self = Self {
        decimal_factor: 100_000.0,
    };

    /// Scale for symbols quoted to three decimal places (JPY and RUB
    /// crosses, spot metals).
    pub const THREE_DIGIT: Self = Self {
        decimal_factor: 1_000.0,
    };

    /// Decimal value of one raw price unit (e.g. `0.00001`).
    #[must_use]
    pub fn per_point(&self) -> f64 {
        1.0 / self.decimal_factor
    }

    /// Normalizes a raw integer price to its decimal value.
    #[must_use]
    pub fn apply(&self, raw: u32) -> f64 {
        f64::from(raw) / self.decimal_factor
    }
}

/// Resolves the price scale for a symbol name.
///
/// Returns [`PriceScale::THREE_DIGIT`] if the symbol, case-insensitively,
/// contains `"jpy"`, equals `"usdrub"`, `"xagusd"` or `"xauusd"`, or
/// contains `"rub"`; [`PriceScale::FIVE_DIGIT`] otherwise.
///
/// Pure function, resolved once per file by the Format-A caller.
#[must_use]
pub fn resolve_scale(symbol: &str) -> PriceScale {
    let symbol = symbol.to_ascii_lowercase();
    if symbol.contains("jpy")
        || symbol == "usdrub"
        || symbol == "xagusd"
        || symbol == "xauusd"
        || symbol.contains("rub")
    {
        PriceScale::THREE_DIGIT
    } else {
        PriceScale::FIVE_DIGIT
    }
}

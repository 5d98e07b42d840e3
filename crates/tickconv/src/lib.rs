//! Dukascopy-style hourly tick file decoder and CSV converter.
//!
//! This is a facade crate that re-exports functionality from the
//! tickconv workspace crates and provides the per-hour conversion
//! pipeline wiring extraction, decoding, formatting and the output
//! sink together.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickconv/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod convert;

pub use convert::{ConvertOptions, convert_bi5_hour, convert_bin_hour, convert_block};

// Re-export core types
pub use tickconv_types::*;

// Re-export decoders
pub use tickconv_decode::{
    Bi5Ticks, BinTicks, DecodeError, ExtractError, Truncation, decode_bi5, decode_bin,
    decompress_lzma, unzip_single_entry,
};

// Re-export formatting
pub use tickconv_format::{LineFormatter, Price, PricePrecision, SequentialSink, VolumeStyle};

/// Prelude module for convenient imports.
///
/// ```
/// use tickconv::prelude::*;
/// ```
pub mod prelude {
    pub use tickconv_types::{
        DecodeContext, DecodeSummary, PriceScale, RawBlock, RawTick, Result, Tick, TickconvError,
        WireFormat, resolve_scale,
    };

    pub use tickconv_decode::{Truncation, decode_bi5, decode_bin};

    pub use tickconv_format::{LineFormatter, PricePrecision, SequentialSink};

    pub use crate::convert::{
        ConvertOptions, convert_bi5_hour, convert_bin_hour, convert_block,
    };
}

//! Binary tick decoders for tickconv tick data converter.
//!
//! This crate turns extracted hourly tick buffers into decoded ticks:
//!
//! - [`decompress_lzma`] - LZMA decompression of Format-A (bi5) payloads
//! - [`unzip_single_entry`] - Extraction of Format-B (bin) archives
//! - [`decode_bi5`] - Format-A decoder (hour-relative 20-byte records)
//! - [`decode_bin`] - Format-B decoder (absolute-timestamp 40-byte records)
//! - [`Truncation`] - Policy for trailing bytes shorter than one record

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickconv/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bi5;
mod bin;
mod error;
mod extract;
mod policy;

pub use bi5::{Bi5Ticks, decode_bi5};
pub use bin::{BinTicks, decode_bin};
pub use error::DecodeError;
pub use extract::{ExtractError, decompress_lzma, unzip_single_entry};
pub use policy::Truncation;

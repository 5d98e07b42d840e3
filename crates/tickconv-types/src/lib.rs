//! Core types for tickconv tick data converter.
//!
//! This crate provides the fundamental data structures used throughout
//! tickconv:
//!
//! - [`Tick`] - A single decoded tick with timestamp, bid, ask and volumes
//! - [`RawTick`] - Raw Format-A tick before price normalization
//! - [`RawBlock`] - An extracted byte buffer tagged with its wire format
//! - [`DecodeContext`] - Hour start and price scale for Format-A decoding
//! - [`PriceScale`] / [`resolve_scale`] - Per-symbol price scaling

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickconv/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod block;
mod error;
mod scale;
mod tick;

pub use block::{DecodeContext, DecodeSummary, RawBlock, WireFormat};
pub use error::{Result, TickconvError};
pub use scale::{PriceScale, resolve_scale};
pub use tick::{RawTick, Tick};

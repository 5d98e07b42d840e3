//! Line rendering and output sink for tickconv tick data converter.
//!
//! This crate renders decoded ticks as canonical CSV lines and writes
//! them, in order, to an append-only sink:
//!
//! - [`LineFormatter`] - Canonical `timestamp,bid,ask,bidvolume,askvolume` lines
//! - [`Price`] - Tagged integral/fractional price representation
//! - [`PricePrecision`] - Natural or fixed-digit price rendering
//! - [`SequentialSink`] - Append-only, order-preserving line sink

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickconv/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod line;
mod sink;

pub use line::{LineFormatter, Price, PricePrecision, VolumeStyle};
pub use sink::SequentialSink;

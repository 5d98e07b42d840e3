//! Decode error types.

use thiserror::Error;
use tickconv_types::{TickconvError, WireFormat};

use crate::ExtractError;

/// Errors that can occur during binary tick decoding.
///
/// The format has no checksums, so a mis-decoded double is not
/// detectable; these variants cover the structural failures only.
/// Each carries the format tag and byte context so callers can log
/// and skip the file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer length is not a multiple of the record size.
    ///
    /// Raised only under [`Truncation::Reject`](crate::Truncation).
    #[error("{format} buffer of {len} bytes leaves {trailing} trailing bytes")]
    TrailingBytes {
        /// Wire format of the buffer.
        format: WireFormat,
        /// Total buffer length in bytes.
        len: usize,
        /// Bytes left over after the last complete record.
        trailing: usize,
    },

    /// A Format-B epoch cannot be represented as a timestamp.
    #[error("{format} record at offset {offset}: epoch {epoch_ms} ms out of range")]
    TimestampOutOfRange {
        /// Wire format of the buffer.
        format: WireFormat,
        /// Byte offset of the offending record.
        offset: usize,
        /// The undecodable epoch value, in milliseconds.
        epoch_ms: u64,
    },
}

impl From<DecodeError> for TickconvError {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<ExtractError> for TickconvError {
    fn from(err: ExtractError) -> Self {
        Self::Extraction(err.to_string())
    }
}

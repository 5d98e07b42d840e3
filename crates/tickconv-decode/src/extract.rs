//! Decompression and archive extraction for hourly tick files.

use std::io::{BufReader, Cursor, Read};

use lzma_rs::lzma_decompress;
use thiserror::Error;
use zip::ZipArchive;

/// Errors that can occur while materializing a raw tick buffer.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Empty input data.
    #[error("Empty input data")]
    EmptyInput,

    /// Extraction produced an empty buffer where tick data was expected.
    #[error("Extraction produced an empty buffer")]
    EmptyOutput,

    /// LZMA decompression failed.
    #[error("LZMA decompression failed: {0}")]
    Lzma(String),

    /// Zip extraction failed.
    #[error("Zip extraction failed: {0}")]
    Zip(String),

    /// The archive contains no entries.
    #[error("Archive contains no entries")]
    NoEntries,
}

/// Decompresses an LZMA-compressed Format-A (bi5) payload.
///
/// # Errors
///
/// Returns an error if the input is empty, the LZMA stream is invalid,
/// or decompression yields an empty buffer.
pub fn decompress_lzma(compressed: &[u8]) -> Result<Vec<u8>, ExtractError> {
    if compressed.is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    let mut decompressed = Vec::new();
    let mut reader = BufReader::new(Cursor::new(compressed));

    lzma_decompress(&mut reader, &mut decompressed)
        .map_err(|e| ExtractError::Lzma(e.to_string()))?;

    if decompressed.is_empty() {
        return Err(ExtractError::EmptyOutput);
    }
    Ok(decompressed)
}

/// Extracts the single entry of a Format-B (bin) zip archive.
///
/// The vendor stores one `.bin` file per archive, so only the first
/// entry is read.
///
/// # Errors
///
/// Returns an error if the input is empty, the archive is unreadable
/// or entryless, or the extracted entry is empty.
pub fn unzip_single_entry(archive: &[u8]) -> Result<Vec<u8>, ExtractError> {
    if archive.is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    let mut zip =
        ZipArchive::new(Cursor::new(archive)).map_err(|e| ExtractError::Zip(e.to_string()))?;
    if zip.is_empty() {
        return Err(ExtractError::NoEntries);
    }

    let mut entry = zip
        .by_index(0)
        .map_err(|e| ExtractError::Zip(e.to_string()))?;
    let mut data = Vec::new();
    entry
        .read_to_end(&mut data)
        .map_err(|e| ExtractError::Zip(e.to_string()))?;

    if data.is_empty() {
        return Err(ExtractError::EmptyOutput);
    }
    Ok(data)
}

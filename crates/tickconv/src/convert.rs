//! Per-hour conversion pipeline: extract, decode, format, append.

use std::io::Write;

use tickconv_decode::{Truncation, decode_bi5, decode_bin, decompress_lzma, unzip_single_entry};
use tickconv_format::{LineFormatter, PricePrecision, SequentialSink};
use tickconv_types::{
    DecodeContext, DecodeSummary, RawBlock, Result, TickconvError, WireFormat,
};

/// Options shared by the conversion entry points.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Handling of trailing bytes shorter than one record.
    pub truncation: Truncation,
    /// Price rendering precision.
    pub precision: PricePrecision,
}

/// Decodes an already-extracted block and appends its lines to the sink.
///
/// Records are written in byte-offset order. Format-A blocks require a
/// decoding context; Format-B blocks carry absolute timestamps and
/// ignore `ctx`.
///
/// # Errors
///
/// Returns an error if a Format-A block has no context, decoding fails
/// under the configured truncation policy, a Format-B epoch is out of
/// range, or the sink fails.
pub fn convert_block<W: Write>(
    block: &RawBlock,
    ctx: Option<&DecodeContext>,
    options: ConvertOptions,
    sink: &mut SequentialSink<W>,
) -> Result<DecodeSummary> {
    let formatter = LineFormatter::for_format(block.format()).with_precision(options.precision);

    match block.format() {
        WireFormat::Bi5 => {
            let ctx = ctx.ok_or(TickconvError::MissingContext)?;
            let ticks = decode_bi5(block.data(), *ctx, options.truncation)?;
            let trailing_bytes = ticks.trailing_bytes();
            let mut records = 0;
            for tick in ticks {
                sink.write_line(&formatter.format_line(&tick))?;
                records += 1;
            }
            Ok(DecodeSummary {
                records,
                trailing_bytes,
            })
        }
        WireFormat::Bin => {
            let ticks = decode_bin(block.data(), options.truncation)?;
            let trailing_bytes = ticks.trailing_bytes();
            let mut records = 0;
            for tick in ticks {
                sink.write_line(&formatter.format_line(&tick?))?;
                records += 1;
            }
            Ok(DecodeSummary {
                records,
                trailing_bytes,
            })
        }
    }
}

/// Converts one compressed Format-A hour file and appends its lines to
/// the sink.
///
/// # Errors
///
/// Returns an error if decompression fails or yields an empty buffer,
/// or if decoding or writing fails.
pub fn convert_bi5_hour<W: Write>(
    compressed: &[u8],
    ctx: &DecodeContext,
    options: ConvertOptions,
    sink: &mut SequentialSink<W>,
) -> Result<DecodeSummary> {
    let data = decompress_lzma(compressed)?;
    let block = RawBlock::new(data, WireFormat::Bi5);
    convert_block(&block, Some(ctx), options, sink)
}

/// Converts one archived Format-B hour file and appends its lines to
/// the sink.
///
/// # Errors
///
/// Returns an error if extraction fails or yields an empty buffer, or
/// if decoding or writing fails.
pub fn convert_bin_hour<W: Write>(
    archive: &[u8],
    options: ConvertOptions,
    sink: &mut SequentialSink<W>,
) -> Result<DecodeSummary> {
    let data = unzip_single_entry(archive)?;
    let block = RawBlock::new(data, WireFormat::Bin);
    convert_block(&block, None, options, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{BigEndian, ByteOrder};
    use chrono::{TimeZone, Utc};
    use std::io::{BufReader, Cursor};
    use tickconv_types::{PriceScale, resolve_scale};

    fn bi5_record(ms: u32, ask: u32, bid: u32, ask_vol: f32, bid_vol: f32) -> Vec<u8> {
        let mut bytes = vec![0u8; 20];
        BigEndian::write_u32(&mut bytes[0..4], ms);
        BigEndian::write_u32(&mut bytes[4..8], ask);
        BigEndian::write_u32(&mut bytes[8..12], bid);
        BigEndian::write_f32(&mut bytes[12..16], ask_vol);
        BigEndian::write_f32(&mut bytes[16..20], bid_vol);
        bytes
    }

    fn bin_record(epoch_ms: u64, ask: f64, bid: f64, ask_vol: f64, bid_vol: f64) -> Vec<u8> {
        let mut bytes = vec![0u8; 40];
        BigEndian::write_u64(&mut bytes[0..8], epoch_ms);
        BigEndian::write_f64(&mut bytes[8..16], ask);
        BigEndian::write_f64(&mut bytes[16..24], bid);
        BigEndian::write_f64(&mut bytes[24..32], ask_vol);
        BigEndian::write_f64(&mut bytes[32..40], bid_vol);
        bytes
    }

    fn compress(data: &[u8]) -> Vec<u8> {
        let mut compressed = Vec::new();
        lzma_rs::lzma_compress(&mut BufReader::new(Cursor::new(data)), &mut compressed).unwrap();
        compressed
    }

    fn archive(data: &[u8]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        writer.start_file("00h_ticks.bin", options).unwrap();
        std::io::Write::write_all(&mut writer, data).unwrap();
        writer.finish().unwrap().into_inner()
    }

    fn eurusd_ctx() -> DecodeContext {
        DecodeContext::new(
            Utc.with_ymd_and_hms(2010, 1, 4, 0, 0, 0).unwrap(),
            resolve_scale("EURUSD"),
        )
    }

    #[test]
    fn test_bi5_hour_end_to_end() {
        let mut data = bi5_record(500, 123_456, 123_450, 1000.0, 999.5);
        data.extend(bi5_record(750, 123_460, 123_451, 250.0, 125.0));
        let compressed = compress(&data);

        let mut sink = SequentialSink::new(Vec::new());
        let summary =
            convert_bi5_hour(&compressed, &eurusd_ctx(), ConvertOptions::default(), &mut sink)
                .unwrap();

        assert_eq!(summary, DecodeSummary { records: 2, trailing_bytes: 0 });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            "2010.01.04 00:00:00.500,1.2345,1.23456,1000,1000\n\
             2010.01.04 00:00:00.750,1.23451,1.2346,125,250\n"
        );
    }

    #[test]
    fn test_bin_hour_end_to_end() {
        let mut data = bin_record(1_262_563_200_500, 1.23456, 1.2345, 1000.0, 2000.25);
        data.extend(bin_record(1_262_563_201_000, 1.0, 0.9999, 1.0, 1.0));

        let mut sink = SequentialSink::new(Vec::new());
        let summary =
            convert_bin_hour(&archive(&data), ConvertOptions::default(), &mut sink).unwrap();

        assert_eq!(summary, DecodeSummary { records: 2, trailing_bytes: 0 });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            "2010.01.04 00:00:00.500,1.2345,1.23456,2000.25,1000.00\n\
             2010.01.04 00:00:01.000,0.9999,1.0,1.00,1.00\n"
        );
    }

    #[test]
    fn test_decoding_is_idempotent() {
        let data = bi5_record(1, 100_001, 100_000, 3.5, 4.5);
        let block = RawBlock::new(data, WireFormat::Bi5);
        let ctx = eurusd_ctx();

        let mut first = SequentialSink::new(Vec::new());
        let mut second = SequentialSink::new(Vec::new());
        convert_block(&block, Some(&ctx), ConvertOptions::default(), &mut first).unwrap();
        convert_block(&block, Some(&ctx), ConvertOptions::default(), &mut second).unwrap();

        assert_eq!(first.into_inner(), second.into_inner());
    }

    #[test]
    fn test_bi5_block_requires_context() {
        let block = RawBlock::new(vec![0u8; 20], WireFormat::Bi5);
        let mut sink = SequentialSink::new(Vec::new());
        let result = convert_block(&block, None, ConvertOptions::default(), &mut sink);
        assert!(matches!(result, Err(TickconvError::MissingContext)));
    }

    #[test]
    fn test_trailing_bytes_reported_in_summary() {
        let mut data = bi5_record(0, 1, 1, 1.0, 1.0);
        data.extend([0u8; 3]);
        let block = RawBlock::new(data, WireFormat::Bi5);
        let ctx = eurusd_ctx();

        let options = ConvertOptions {
            truncation: Truncation::Silent,
            ..ConvertOptions::default()
        };
        let mut sink = SequentialSink::new(Vec::new());
        let summary = convert_block(&block, Some(&ctx), options, &mut sink).unwrap();

        assert_eq!(summary, DecodeSummary { records: 1, trailing_bytes: 3 });
        assert_eq!(sink.lines_written(), 1);
    }

    #[test]
    fn test_truncated_block_rejected_when_configured() {
        let block = RawBlock::new(vec![0u8; 41], WireFormat::Bin);
        let options = ConvertOptions {
            truncation: Truncation::Reject,
            ..ConvertOptions::default()
        };
        let mut sink = SequentialSink::new(Vec::new());
        let result = convert_block(&block, None, options, &mut sink);

        assert!(matches!(result, Err(TickconvError::Decode(_))));
        assert_eq!(sink.lines_written(), 0);
    }

    #[test]
    fn test_empty_compressed_input_is_fatal() {
        let mut sink = SequentialSink::new(Vec::new());
        let result =
            convert_bi5_hour(&[], &eurusd_ctx(), ConvertOptions::default(), &mut sink);
        assert!(matches!(result, Err(TickconvError::Extraction(_))));
    }

    #[test]
    fn test_fixed_precision_option() {
        let data = bi5_record(0, 123_456, 123_450, 1.0, 1.0);
        let block = RawBlock::new(data, WireFormat::Bi5);
        let options = ConvertOptions {
            precision: PricePrecision::Fixed(5),
            ..ConvertOptions::default()
        };

        let mut sink = SequentialSink::new(Vec::new());
        convert_block(&block, Some(&eurusd_ctx()), options, &mut sink).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "2010.01.04 00:00:00.000,1.23450,1.23456,1,1\n");
    }

    #[test]
    fn test_jpy_scale_through_pipeline() {
        let data = bi5_record(0, 89_123, 89_120, 1.0, 1.0);
        let compressed = compress(&data);
        let ctx = DecodeContext::new(
            Utc.with_ymd_and_hms(2010, 1, 4, 0, 0, 0).unwrap(),
            resolve_scale("USDJPY"),
        );
        assert_eq!(ctx.price_scale, PriceScale::THREE_DIGIT);

        let mut sink = SequentialSink::new(Vec::new());
        convert_bi5_hour(&compressed, &ctx, ConvertOptions::default(), &mut sink).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "2010.01.04 00:00:00.000,89.12,89.123,1,1\n");
    }
}

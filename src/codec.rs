//! Glue between the byte adapters and the external `png` codec.
//!
//! Resource release is by ownership: the source is moved into the codec's
//! reader and the sink is only borrowed for the duration of the call, so
//! every exit path — success, validation failure, or codec error — drops
//! the file handle and the codec session exactly once.

use log::{debug, warn};

use crate::encode::Compression;
use crate::error::PngArrayError;
use crate::limits::Limits;
use crate::raster::RasterImage;
use crate::sink::ByteSink;
use crate::source::ByteSource;

/// Decode one PNG stream into 8-bit, channel-expanded raster rows.
///
/// EXPAND turns paletted and sub-8-bit grayscale sources into full bytes;
/// STRIP_16 truncates 16-bit samples. Output channel count is therefore
/// always 1–4 at depth 8.
pub(crate) fn decode(
    source: ByteSource<'_>,
    limits: Option<&Limits>,
) -> Result<RasterImage, PngArrayError> {
    let mut decoder = match limits.and_then(|l| l.max_memory_bytes) {
        Some(max) => {
            let bytes = usize::try_from(max).unwrap_or(usize::MAX);
            png::Decoder::new_with_limits(source, png::Limits { bytes })
        }
        None => png::Decoder::new(source),
    };
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    decoder.set_ignore_text_chunk(true);

    let mut reader = decoder.read_info().map_err(PngArrayError::from_decoding)?;

    let (width, height, source_depth) = {
        let info = reader.info();
        (info.width, info.height, info.bit_depth)
    };
    if let Some(limits) = limits {
        limits.check_dimensions(width, height)?;
        // Raster bytes now, f64 samples after conversion.
        limits.reserve(reader.output_buffer_size())?;
        limits.reserve(reader.output_buffer_size().saturating_mul(8))?;
    }
    if source_depth == png::BitDepth::Sixteen {
        warn!("16-bit samples truncated to 8-bit");
    }

    let mut data = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut data)
        .map_err(PngArrayError::from_decoding)?;
    data.truncate(frame.buffer_size());

    let (color_type, depth) = reader.output_color_type();
    if depth != png::BitDepth::Eight {
        return Err(PngArrayError::Format(format!(
            "codec produced unexpected bit depth {depth:?}"
        )));
    }
    let channels = color_type.samples();
    debug!(
        "decoded {width}x{height} png, {channels} channel(s), source depth {source_depth:?}"
    );

    Ok(RasterImage::new(width, height, channels, data))
}

/// Encode raster rows as a PNG stream into the sink.
///
/// Depth is fixed at 8, the color type derives from the channel count, and
/// the image is written non-interlaced in one shot.
pub(crate) fn encode(
    raster: &RasterImage,
    sink: &mut ByteSink,
    compression: Compression,
) -> Result<(), PngArrayError> {
    let color_type = match raster.channels() {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => {
            return Err(PngArrayError::InvalidArgument(format!(
                "unsupported channel count {n}"
            )));
        }
    };

    let mut encoder = png::Encoder::new(&mut *sink, raster.width(), raster.height());
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(compression.to_png());

    let mut writer = encoder
        .write_header()
        .map_err(PngArrayError::from_encoding)?;
    writer
        .write_image_data(raster.data())
        .map_err(PngArrayError::from_encoding)?;
    writer.finish().map_err(PngArrayError::from_encoding)?;
    Ok(())
}

//! Pixel-layout conversion between raster rows and the host array.
//!
//! The decode direction transposes row-major, channel-interleaved bytes into
//! the column-major float array and normalizes 0–255 to [0, 1] in one pass.
//! The encode direction does the reverse, with range clamping and
//! quantization.

use crate::array::PixelArray;
use crate::error::PngArrayError;
use crate::raster::RasterImage;

pub(crate) fn raster_to_array(raster: &RasterImage) -> PixelArray {
    let height = raster.height() as usize;
    let width = raster.width() as usize;
    let channels = raster.channels();
    let plane = width * height;

    let mut samples = vec![0.0f64; plane * channels];
    for y in 0..height {
        let row = raster.row(y);
        for x in 0..width {
            for p in 0..channels {
                samples[y + x * height + p * plane] = f64::from(row[x * channels + p]) / 255.0;
            }
        }
    }

    PixelArray::from_parts(height, width, channels, samples)
}

pub(crate) fn array_to_raster(array: &PixelArray) -> Result<RasterImage, PngArrayError> {
    let channels = array.channels();
    if !(1..=4).contains(&channels) {
        return Err(PngArrayError::InvalidArgument(format!(
            "image must have 1 (grayscale), 2 (gray+alpha), 3 (RGB) or 4 (RGBA) channels, \
             got {channels}"
        )));
    }

    let height = array.height();
    let width = array.width();
    if height == 0 || width == 0 {
        return Err(PngArrayError::InvalidArgument(format!(
            "image dimensions must be non-zero, got {height}x{width}"
        )));
    }
    let (Ok(height_u32), Ok(width_u32)) = (u32::try_from(height), u32::try_from(width)) else {
        return Err(PngArrayError::InvalidArgument(format!(
            "image dimensions {height}x{width} exceed the PNG limit"
        )));
    };

    let mut data = vec![0u8; height * width * channels];
    let stride = width * channels;
    for y in 0..height {
        for x in 0..width {
            for p in 0..channels {
                data[y * stride + x * channels + p] = quantize(array.get(y, x, p));
            }
        }
    }

    Ok(RasterImage::new(width_u32, height_u32, channels, data))
}

/// Clamp and quantize one sample to an 8-bit value.
///
/// Values below 0 clamp to 0. Values strictly above 255 collapse to 1.0
/// before the multiply — a historical clamp behavior callers rely on, kept
/// as-is (see DESIGN.md). Values in (1, 255] saturate at the cast.
#[inline]
fn quantize(value: f64) -> u8 {
    let mut v = value;
    if v < 0.0 {
        v = 0.0;
    }
    if v > 255.0 {
        v = 1.0;
    }
    (v * 255.0).round() as u8
}

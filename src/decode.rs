use std::path::Path;

use crate::array::PixelArray;
use crate::codec;
use crate::convert;
use crate::error::PngArrayError;
use crate::limits::Limits;
use crate::source::ByteSource;

/// A decode operation: PNG bytes in, normalized float array out.
///
/// The origin may be a file path or an in-memory buffer; the result is the
/// same either way.
///
/// ```no_run
/// use pngarray::DecodeRequest;
///
/// let array = DecodeRequest::from_path("input.png".as_ref()).decode()?;
/// println!("{:?}", array.dims());
/// # Ok::<(), pngarray::PngArrayError>(())
/// ```
pub struct DecodeRequest<'a> {
    origin: Origin<'a>,
    limits: Option<&'a Limits>,
}

enum Origin<'a> {
    Path(&'a Path),
    Bytes(&'a [u8]),
}

impl<'a> DecodeRequest<'a> {
    /// Decode from a file on disk.
    pub fn from_path(path: &'a Path) -> Self {
        DecodeRequest {
            origin: Origin::Path(path),
            limits: None,
        }
    }

    /// Decode from an in-memory PNG stream.
    pub fn from_bytes(data: &'a [u8]) -> Self {
        DecodeRequest {
            origin: Origin::Bytes(data),
            limits: None,
        }
    }

    /// Apply resource limits to the decode.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Run the decode.
    ///
    /// Samples come back normalized to `[0.0, 1.0]` in column-major order;
    /// paletted and sub-8-bit sources are expanded, 16-bit sources
    /// truncated, so the channel count is always 1–4.
    pub fn decode(self) -> Result<PixelArray, PngArrayError> {
        let raster = match self.origin {
            Origin::Path(path) => codec::decode(ByteSource::open_path(path)?, self.limits)?,
            Origin::Bytes(data) => codec::decode(ByteSource::from_bytes(data)?, self.limits)?,
        };
        Ok(convert::raster_to_array(&raster))
    }
}

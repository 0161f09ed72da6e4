use std::path::Path;

use crate::array::PixelArray;
use crate::codec;
use crate::convert;
use crate::error::PngArrayError;
use crate::sink::ByteSink;

/// Compression level for the encoded stream.
///
/// A hint to the codec; `Default` matches the codec's standard level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Compression {
    #[default]
    Default,
    /// Fast, minimal compression.
    Fast,
    /// High compression level.
    Best,
}

impl Compression {
    pub(crate) fn to_png(self) -> png::Compression {
        match self {
            Compression::Default => png::Compression::Default,
            Compression::Fast => png::Compression::Fast,
            Compression::Best => png::Compression::Best,
        }
    }
}

/// An encode operation: normalized float array in, PNG bytes out.
///
/// The destination may be a file path or an in-memory buffer; both produce
/// byte-identical streams.
///
/// ```no_run
/// use pngarray::{EncodeRequest, PixelArray};
///
/// let array = PixelArray::from_samples(vec![0.5; 12], &[2, 2, 3])?;
/// let bytes = EncodeRequest::new(&array).to_bytes()?;
/// # Ok::<(), pngarray::PngArrayError>(())
/// ```
pub struct EncodeRequest<'a> {
    array: &'a PixelArray,
    compression: Compression,
}

impl<'a> EncodeRequest<'a> {
    pub fn new(array: &'a PixelArray) -> Self {
        EncodeRequest {
            array,
            compression: Compression::Default,
        }
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Encode to a file. The handle is closed on every exit path, including
    /// codec failures.
    pub fn to_path(&self, path: &Path) -> Result<(), PngArrayError> {
        let raster = convert::array_to_raster(self.array)?;
        let mut sink = ByteSink::create_path(path)?;
        codec::encode(&raster, &mut sink, self.compression)?;
        sink.finalize();
        Ok(())
    }

    /// Encode to an in-memory buffer and return it.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PngArrayError> {
        let raster = convert::array_to_raster(self.array)?;
        let mut sink = ByteSink::memory();
        codec::encode(&raster, &mut sink, self.compression)?;
        Ok(sink.finalize().unwrap_or_default())
    }
}

//! Codec-level raster representation: row-major, channel-interleaved bytes.

/// One decoded or to-be-encoded image as the codec sees it.
///
/// Rows are stored contiguously, `width * channels` bytes each, 8 bits per
/// sample. Instances live for the duration of a single decode or encode
/// call and are never retained across calls.
#[derive(Debug)]
pub(crate) struct RasterImage {
    width: u32,
    height: u32,
    channels: usize,
    data: Vec<u8>,
}

impl RasterImage {
    pub(crate) fn new(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * channels);
        RasterImage {
            width,
            height,
            channels,
            data,
        }
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn channels(&self) -> usize {
        self.channels
    }

    pub(crate) fn row_bytes(&self) -> usize {
        self.width as usize * self.channels
    }

    pub(crate) fn row(&self, y: usize) -> &[u8] {
        let stride = self.row_bytes();
        &self.data[y * stride..(y + 1) * stride]
    }

    pub(crate) fn data(&self) -> &[u8] {
        &self.data
    }
}

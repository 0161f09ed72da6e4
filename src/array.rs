//! Host-level image representation: a column-major floating-point array.

use crate::error::PngArrayError;

/// A decoded image, or an image to encode, as normalized floating-point
/// samples in `[0.0, 1.0]`.
///
/// The backing store is column-major with the channel as the slowest-varying
/// index: sample (row `y`, column `x`, channel `p`) lives at linear offset
/// `y + x*height + p*(width*height)`. Dimension metadata is `[height, width]`
/// for single-channel images and `[height, width, channels]` otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelArray {
    height: usize,
    width: usize,
    channels: usize,
    samples: Vec<f64>,
}

impl PixelArray {
    /// Build an array from a flat column-major sample vector and its
    /// dimensions (`[height, width]` or `[height, width, channels]`).
    ///
    /// Fails with [`PngArrayError::InvalidArgument`] when the dimension count
    /// is not 2 or 3, or when the sample count does not match the dims.
    /// Channel-count range is checked at encode time, not here.
    pub fn from_samples(samples: Vec<f64>, dims: &[usize]) -> Result<Self, PngArrayError> {
        let (height, width, channels) = match *dims {
            [height, width] => (height, width, 1),
            [height, width, channels] => (height, width, channels),
            _ => {
                return Err(PngArrayError::InvalidArgument(format!(
                    "image must have two or three dimensions, got {}",
                    dims.len()
                )));
            }
        };

        let expected = height
            .checked_mul(width)
            .and_then(|hw| hw.checked_mul(channels))
            .ok_or_else(|| {
                PngArrayError::InvalidArgument(format!(
                    "dimensions {height}x{width}x{channels} overflow"
                ))
            })?;
        if samples.len() != expected {
            return Err(PngArrayError::InvalidArgument(format!(
                "expected {expected} samples for dims {dims:?}, got {}",
                samples.len()
            )));
        }

        Ok(PixelArray {
            height,
            width,
            channels,
            samples,
        })
    }

    /// Internal constructor for the decode converter; dims already validated.
    pub(crate) fn from_parts(
        height: usize,
        width: usize,
        channels: usize,
        samples: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(samples.len(), height * width * channels);
        PixelArray {
            height,
            width,
            channels,
            samples,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Dimension metadata: `[height, width]` when single-channel, else
    /// `[height, width, channels]`.
    pub fn dims(&self) -> Vec<usize> {
        if self.channels > 1 {
            vec![self.height, self.width, self.channels]
        } else {
            vec![self.height, self.width]
        }
    }

    /// The flat column-major sample store.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Sample at (row, column, channel). Panics when out of bounds.
    #[inline]
    pub fn get(&self, y: usize, x: usize, p: usize) -> f64 {
        self.samples[self.offset(y, x, p)]
    }

    /// Overwrite the sample at (row, column, channel). Panics when out of
    /// bounds.
    #[inline]
    pub fn set(&mut self, y: usize, x: usize, p: usize, value: f64) {
        let offset = self.offset(y, x, p);
        self.samples[offset] = value;
    }

    #[inline]
    fn offset(&self, y: usize, x: usize, p: usize) -> usize {
        y + x * self.height + p * (self.width * self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_major_offsets() {
        // 2 rows, 3 columns, 2 channels: offset = y + x*2 + p*6.
        let samples: Vec<f64> = (0..12).map(f64::from).collect();
        let array = PixelArray::from_samples(samples, &[2, 3, 2]).unwrap();
        assert_eq!(array.get(0, 0, 0), 0.0);
        assert_eq!(array.get(1, 0, 0), 1.0);
        assert_eq!(array.get(0, 1, 0), 2.0);
        assert_eq!(array.get(0, 0, 1), 6.0);
        assert_eq!(array.get(1, 2, 1), 11.0);
    }

    #[test]
    fn dims_omit_single_channel_axis() {
        let gray = PixelArray::from_samples(vec![0.0; 6], &[2, 3]).unwrap();
        assert_eq!(gray.dims(), vec![2, 3]);
        assert_eq!(gray.channels(), 1);

        let rgb = PixelArray::from_samples(vec![0.0; 18], &[2, 3, 3]).unwrap();
        assert_eq!(rgb.dims(), vec![2, 3, 3]);
    }

    #[test]
    fn set_writes_the_expected_offset() {
        let mut array = PixelArray::from_samples(vec![0.0; 12], &[2, 3, 2]).unwrap();
        array.set(1, 2, 1, 0.75);
        assert_eq!(array.get(1, 2, 1), 0.75);
        // offset = y + x*height + p*(width*height) = 1 + 2*2 + 1*6
        assert_eq!(array.into_samples()[11], 0.75);
    }

    #[test]
    fn rejects_wrong_dimensionality() {
        for dims in [&[6][..], &[1, 2, 3, 1][..]] {
            let err = PixelArray::from_samples(vec![0.0; 6], dims).unwrap_err();
            assert!(matches!(err, PngArrayError::InvalidArgument(_)));
        }
    }

    #[test]
    fn rejects_sample_count_mismatch() {
        let err = PixelArray::from_samples(vec![0.0; 5], &[2, 3]).unwrap_err();
        assert!(matches!(err, PngArrayError::InvalidArgument(_)));
    }
}

//! Caps on what a single decode call may consume.
//!
//! Checked against the PNG header before any pixel data is read, and
//! against buffer allocations before they happen. PNG dimensions are
//! `u32` by format definition, so the per-axis caps are too.

use crate::error::PngArrayError;

/// Decode resource limits. Fields default to `None` (unlimited).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    /// Widest image accepted, in pixels.
    pub max_width: Option<u32>,
    /// Tallest image accepted, in pixels.
    pub max_height: Option<u32>,
    /// Largest pixel count (width × height) accepted.
    pub max_pixels: Option<u64>,
    /// Largest single buffer allocation, in bytes. Also handed to the
    /// codec to bound its internal allocations.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject a header whose dimensions exceed the configured caps.
    pub(crate) fn check_dimensions(&self, width: u32, height: u32) -> Result<(), PngArrayError> {
        if let Some(max) = self.max_width.filter(|&max| width > max) {
            return Err(exceeded(format!("image width {width} (limit {max})")));
        }
        if let Some(max) = self.max_height.filter(|&max| height > max) {
            return Err(exceeded(format!("image height {height} (limit {max})")));
        }
        if let Some(max) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max {
                return Err(exceeded(format!(
                    "{width}x{height} image, {pixels} pixels (limit {max})"
                )));
            }
        }
        Ok(())
    }

    /// Reject a buffer allocation larger than the memory cap.
    pub(crate) fn reserve(&self, bytes: usize) -> Result<(), PngArrayError> {
        match self.max_memory_bytes {
            Some(max) if bytes as u64 > max => {
                Err(exceeded(format!("{bytes} byte buffer (limit {max} bytes)")))
            }
            _ => Ok(()),
        }
    }
}

fn exceeded(what: String) -> PngArrayError {
    PngArrayError::Resource(what)
}

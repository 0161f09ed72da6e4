//! # pngarray
//!
//! PNG decode/encode bridged to column-major floating-point pixel arrays.
//!
//! Decoding turns a PNG stream — from a file or an in-memory buffer — into a
//! [`PixelArray`]: `f64` samples normalized to `[0.0, 1.0]`, stored
//! column-major with the channel as the slowest axis (dims `[height, width]`
//! or `[height, width, channels]`). Encoding does the reverse, clamping and
//! quantizing back to 8-bit rows. The PNG entropy coding itself is delegated
//! to the [`png`] crate; this crate owns the I/O adapters and the layout
//! conversion.
//!
//! Paletted and sub-8-bit images are expanded on decode; 16-bit images are
//! truncated to 8-bit. Output is always 8-bit, non-interlaced, with 1–4
//! channels (gray, gray+alpha, RGB, RGBA).
//!
//! ## Usage
//!
//! ```no_run
//! use pngarray::{DecodeRequest, EncodeRequest};
//!
//! let array = DecodeRequest::from_path("input.png".as_ref()).decode()?;
//! assert!(array.samples().iter().all(|&v| (0.0..=1.0).contains(&v)));
//!
//! // Re-encode to bytes, or straight to a file.
//! let bytes = EncodeRequest::new(&array).to_bytes()?;
//! EncodeRequest::new(&array).to_path("output.png".as_ref())?;
//! # Ok::<(), pngarray::PngArrayError>(())
//! ```

#![forbid(unsafe_code)]

mod array;
mod codec;
mod convert;
mod decode;
mod encode;
mod error;
mod limits;
mod raster;
mod sink;
mod source;

// Re-exports
pub use array::PixelArray;
pub use decode::DecodeRequest;
pub use encode::{Compression, EncodeRequest};
pub use error::PngArrayError;
pub use limits::Limits;

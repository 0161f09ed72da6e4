//! Push-based byte consumer for encoding.
//!
//! The codec writes through [`ByteSink`] without knowing whether the bytes
//! land in a file or in memory. The memory variant collects output in a
//! chain of fixed-capacity chunks and flattens them once at the end, so
//! growth never re-copies what was already written.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::PngArrayError;

/// Capacity of one chunk in the in-memory output chain.
pub(crate) const CHUNK_CAPACITY: usize = 256 * 1024;

/// Byte consumer backing an encode call, file- or memory-backed.
pub(crate) enum ByteSink {
    File(File),
    Memory(ChunkBuffer),
}

impl ByteSink {
    pub(crate) fn create_path(path: &Path) -> Result<Self, PngArrayError> {
        let file = File::create(path)?;
        Ok(ByteSink::File(file))
    }

    pub(crate) fn memory() -> Self {
        ByteSink::Memory(ChunkBuffer::new())
    }

    /// Close the sink. File mode returns `None`; memory mode flattens the
    /// chunk chain into one contiguous buffer of exactly the written length.
    pub(crate) fn finalize(self) -> Option<Vec<u8>> {
        match self {
            ByteSink::File(_) => None,
            ByteSink::Memory(buffer) => Some(buffer.into_bytes()),
        }
    }
}

impl Write for ByteSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            ByteSink::File(file) => file.write(buf),
            ByteSink::Memory(buffer) => {
                buffer.push(buf);
                Ok(buf.len())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            ByteSink::File(file) => file.flush(),
            // No buffering beyond the chunk chain itself.
            ByteSink::Memory(_) => Ok(()),
        }
    }
}

/// Growable output as an ordered chain of fixed-capacity chunks.
///
/// Invariant: `total_len` equals the sum of bytes across all chunks, and a
/// new chunk is appended exactly when the current one is full with more
/// data left to write.
pub(crate) struct ChunkBuffer {
    chunks: Vec<Vec<u8>>,
    total_len: usize,
}

impl ChunkBuffer {
    fn new() -> Self {
        ChunkBuffer {
            chunks: vec![Vec::with_capacity(CHUNK_CAPACITY)],
            total_len: 0,
        }
    }

    fn push(&mut self, mut bytes: &[u8]) {
        while !bytes.is_empty() {
            if self.chunks.last().map_or(true, |c| c.len() >= CHUNK_CAPACITY) {
                self.chunks.push(Vec::with_capacity(CHUNK_CAPACITY));
            }
            if let Some(chunk) = self.chunks.last_mut() {
                let take = (CHUNK_CAPACITY - chunk.len()).min(bytes.len());
                chunk.extend_from_slice(&bytes[..take]);
                self.total_len += take;
                bytes = &bytes[take..];
            }
        }
    }

    fn into_bytes(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.total_len);
        for chunk in &self.chunks {
            out.extend_from_slice(chunk);
        }
        out
    }

    #[cfg(test)]
    fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

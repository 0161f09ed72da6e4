//! Pull-based byte provider for decoding.
//!
//! The codec reads through [`ByteSource`] without knowing whether the bytes
//! come from a file or from memory. Reads past the end of the data yield
//! zero-filled padding instead of an error; a truncated stream is then
//! rejected by the codec's own integrity checks (chunk CRCs, zlib framing).

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::PngArrayError;

// http://www.w3.org/TR/PNG-Structure.html
pub(crate) const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Byte provider backing a decode call, file- or memory-backed.
#[derive(Debug)]
pub(crate) enum ByteSource<'a> {
    File(BufReader<File>),
    Memory { data: &'a [u8], pos: usize },
}

impl ByteSource<'_> {
    /// Open a file and verify the PNG signature.
    ///
    /// The file position is rewound to 0 afterwards so the codec sees the
    /// whole stream. A file shorter than 8 bytes is a signature mismatch,
    /// not an I/O error.
    pub(crate) fn open_path(path: &Path) -> Result<ByteSource<'static>, PngArrayError> {
        let file = File::open(path).map_err(|source| PngArrayError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::new(file);

        let mut header = [0u8; 8];
        let got = read_up_to(&mut reader, &mut header)?;
        if got < header.len() || header != PNG_SIGNATURE {
            return Err(PngArrayError::Format("file is not in PNG format".into()));
        }
        reader.seek(SeekFrom::Start(0))?;

        Ok(ByteSource::File(reader))
    }

    /// Wrap an in-memory buffer, verifying the PNG signature.
    pub(crate) fn from_bytes(data: &[u8]) -> Result<ByteSource<'_>, PngArrayError> {
        if data.len() < PNG_SIGNATURE.len() || data[..PNG_SIGNATURE.len()] != PNG_SIGNATURE {
            return Err(PngArrayError::Format("buffer is not in PNG format".into()));
        }
        Ok(ByteSource::Memory { data, pos: 0 })
    }

    /// Fill `buf` from the current cursor, zero-padding past the end.
    ///
    /// Advances the cursor by the number of real bytes copied only.
    pub(crate) fn read_into(&mut self, buf: &mut [u8]) -> io::Result<()> {
        match self {
            ByteSource::File(reader) => {
                let got = read_up_to(reader, buf)?;
                buf[got..].fill(0);
            }
            ByteSource::Memory { data, pos } => {
                let remaining = data.len() - *pos;
                let got = remaining.min(buf.len());
                buf[..got].copy_from_slice(&data[*pos..*pos + got]);
                *pos += got;
                buf[got..].fill(0);
            }
        }
        Ok(())
    }
}

impl Read for ByteSource<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_into(buf)?;
        Ok(buf.len())
    }
}

/// Read until `buf` is full or EOF, returning the byte count.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

use std::io;
use std::path::PathBuf;

/// Errors from PNG decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PngArrayError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unable to open {path}: {source}")]
    NotFound { path: PathBuf, source: io::Error },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("png format error: {0}")]
    Format(String),

    #[error("resource limit exceeded: {0}")]
    Resource(String),
}

impl PngArrayError {
    pub(crate) fn from_decoding(err: png::DecodingError) -> Self {
        use png::DecodingError::*;
        match err {
            IoError(err) => Self::Io(err),
            err @ Format(_) => Self::Format(err.to_string()),
            Parameter(err) => Self::InvalidArgument(err.to_string()),
            LimitsExceeded => Self::Resource("codec memory limit exceeded".into()),
        }
    }

    pub(crate) fn from_encoding(err: png::EncodingError) -> Self {
        use png::EncodingError::*;
        match err {
            IoError(err) => Self::Io(err),
            err @ Format(_) => Self::Format(err.to_string()),
            Parameter(err) => Self::InvalidArgument(err.to_string()),
            LimitsExceeded => Self::Resource("codec memory limit exceeded".into()),
        }
    }
}

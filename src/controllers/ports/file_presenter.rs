use std::error::Error;
use std::fmt;
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub enum FilePresenterError {
    Io(std::io::Error),
    Encode(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for FilePresenterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to write image: {}", err),
            Self::Encode(err) => write!(f, "failed to encode image: {}", err),
        }
    }
}

impl Error for FilePresenterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err.as_ref()),
        }
    }
}

impl From<std::io::Error> for FilePresenterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Writes a rendered frame to disk in one lossless format.
pub trait FilePresenterPort {
    /// File extension for this format, without the dot.
    fn extension(&self) -> &'static str;

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), FilePresenterError>;
}

use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    resolution.pixel_count() * 3
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected buffer size {} does not match actual size {}",
                    expected_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB bytes, three per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    resolution: Resolution,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(
        resolution: Resolution,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected_size = resolution_to_buffer_size(resolution);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Writes the pixels into an RGBA frame with full alpha, as display
    /// surfaces expect.
    pub fn copy_into_rgba(&self, dst: &mut [u8]) -> Result<(), PixelBufferError> {
        let expected_size = self.resolution.pixel_count() * 4;

        if dst.len() != expected_size {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: dst.len(),
            });
        }

        for (src_pixel, dst_pixel) in self.buffer.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
            dst_pixel[..3].copy_from_slice(src_pixel);
            dst_pixel[3] = 255;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (1,0) green
            0, 0, 255, // (0,1) blue
            255, 255, 0, // (1,1) yellow
        ];

        let buffer = PixelBuffer::from_data(resolution(2, 2), data.clone()).unwrap();

        assert_eq!(buffer.resolution(), resolution(2, 2));
        assert_eq!(buffer.buffer(), &data);
    }

    #[test]
    fn test_from_data_wrong_size() {
        let result = PixelBuffer::from_data(resolution(2, 2), vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_copy_into_rgba_adds_opaque_alpha() {
        let buffer =
            PixelBuffer::from_data(resolution(2, 1), vec![10, 20, 30, 40, 50, 60]).unwrap();
        let mut dst = vec![0; 8];

        buffer.copy_into_rgba(&mut dst).unwrap();

        assert_eq!(dst, vec![10, 20, 30, 255, 40, 50, 60, 255]);
    }

    #[test]
    fn test_copy_into_rgba_rejects_wrong_destination_size() {
        let buffer = PixelBuffer::from_data(resolution(2, 1), vec![0; 6]).unwrap();
        let mut dst = vec![0; 6];

        assert_eq!(
            buffer.copy_into_rgba(&mut dst),
            Err(PixelBufferError::BoundsMismatch {
                expected_size: 8,
                buffer_size: 6
            })
        );
    }
}

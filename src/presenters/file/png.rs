use crate::controllers::ports::file_presenter::{FilePresenterError, FilePresenterPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ImageFormat, RgbImage};
use std::path::Path;

#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn extension(&self) -> &'static str {
        "png"
    }

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), FilePresenterError> {
        let resolution = buffer.resolution();
        let image = RgbImage::from_raw(
            resolution.width(),
            resolution.height(),
            buffer.buffer().clone(),
        )
        .ok_or_else(|| {
            FilePresenterError::Encode(
                format!("pixel data does not fill a {} image", resolution).into(),
            )
        })?;

        image
            .save_with_format(filepath, ImageFormat::Png)
            .map_err(|err| match err {
                image::ImageError::IoError(io) => FilePresenterError::Io(io),
                other => FilePresenterError::Encode(Box::new(other)),
            })
    }
}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

use std::path::Path;

use crate::input::domain::face_image_reader::FaceImageReader;
use crate::shared::face_image::FaceImage;

/// Decodes face crops from image files using the `image` crate.
///
/// Every supported format is converted to 8-bit RGB, so grayscale and RGBA
/// files come out with three channels.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<FaceImage, Box<dyn std::error::Error>> {
        let img = image::open(path)?.to_rgb8();
        let (width, height) = img.dimensions();
        Ok(FaceImage::from_rgb(img.into_raw(), width, height)?)
    }
}

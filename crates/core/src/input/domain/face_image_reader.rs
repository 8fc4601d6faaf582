use std::path::Path;

use crate::shared::face_image::FaceImage;

/// Loads a cropped face from storage.
pub trait FaceImageReader: Send {
    fn read(&self, path: &Path) -> Result<FaceImage, Box<dyn std::error::Error>>;
}

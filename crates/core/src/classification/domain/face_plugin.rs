use crate::classification::domain::classify_error::ClassifyError;
use crate::shared::face_image::FaceImage;

/// A per-face analysis step in the face pipeline.
pub trait FacePlugin: Send + Sync {
    type Output;

    /// Short identifier the host uses to name this plugin's output.
    fn slug(&self) -> &'static str;

    fn process(&self, face: &FaceImage) -> Result<Self::Output, ClassifyError>;
}

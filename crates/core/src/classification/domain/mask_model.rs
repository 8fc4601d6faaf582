use std::path::Path;

use ndarray::Array4;

/// A loaded mask-classification network.
///
/// Takes a `[1, height, width, channels]` batch of raw pixel values and
/// returns one score per mask label.
pub trait MaskModel: Send + Sync {
    fn infer(&self, batch: Array4<f32>) -> Result<Vec<f32>, Box<dyn std::error::Error>>;
}

/// Constructs a [`MaskModel`] from an artifact on disk.
pub trait MaskModelLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<Box<dyn MaskModel>, Box<dyn std::error::Error>>;
}

use ndarray::{Array3, ArrayD, ArrayView3, ArrayViewD, Ix3, ShapeError};

/// A cropped face as produced by upstream detection.
///
/// Pixels are stored as an n-dimensional array so that whatever the caller
/// hands over can be represented; the expected layout is
/// `(height, width, channels)` and consumers validate it at use.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceImage {
    pixels: ArrayD<u8>,
}

impl FaceImage {
    pub fn new(pixels: ArrayD<u8>) -> Self {
        Self { pixels }
    }

    /// Build an image from contiguous row-major RGB bytes.
    pub fn from_rgb(data: Vec<u8>, width: u32, height: u32) -> Result<Self, ShapeError> {
        let pixels = Array3::from_shape_vec((height as usize, width as usize, 3), data)?;
        Ok(Self::from(pixels))
    }

    pub fn shape(&self) -> &[usize] {
        self.pixels.shape()
    }

    pub fn ndim(&self) -> usize {
        self.pixels.ndim()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn as_ndarray(&self) -> ArrayViewD<'_, u8> {
        self.pixels.view()
    }

    /// View as `(height, width, channels)`, or `None` if the image is not 3-D.
    pub fn as_hwc(&self) -> Option<ArrayView3<'_, u8>> {
        self.pixels.view().into_dimensionality::<Ix3>().ok()
    }
}

impl From<Array3<u8>> for FaceImage {
    fn from(pixels: Array3<u8>) -> Self {
        Self::new(pixels.into_dyn())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, IxDyn};

    #[test]
    fn test_from_rgb_shape_is_height_width_channels() {
        let face = FaceImage::from_rgb(vec![0u8; 24], 4, 2).unwrap();
        assert_eq!(face.shape(), &[2, 4, 3]);
        assert_eq!(face.ndim(), 3);
    }

    #[test]
    fn test_from_rgb_rejects_mismatched_length() {
        assert!(FaceImage::from_rgb(vec![0u8; 10], 2, 2).is_err());
    }

    #[test]
    fn test_from_rgb_pixel_access() {
        // 2x2 RGB: set pixel (row=1, col=0) to red
        let mut data = vec![0u8; 12];
        data[6] = 255;
        let face = FaceImage::from_rgb(data, 2, 2).unwrap();
        let hwc = face.as_hwc().unwrap();
        assert_eq!(hwc[[1, 0, 0]], 255);
        assert_eq!(hwc[[1, 0, 1]], 0);
        assert_eq!(hwc[[1, 0, 2]], 0);
    }

    #[test]
    fn test_two_dimensional_image_has_no_hwc_view() {
        let face = FaceImage::new(Array2::<u8>::zeros((10, 10)).into_dyn());
        assert_eq!(face.ndim(), 2);
        assert!(face.as_hwc().is_none());
    }

    #[test]
    fn test_empty_image() {
        let face = FaceImage::new(ArrayD::<u8>::zeros(IxDyn(&[0, 0, 3])));
        assert!(face.is_empty());
        assert!(face.as_hwc().is_some());
    }

    #[test]
    fn test_clone_is_independent() {
        let face = FaceImage::from(Array3::<u8>::from_elem((2, 2, 3), 100));
        let cloned = face.clone();
        assert_eq!(face, cloned);
        assert_eq!(cloned.as_ndarray()[[0, 0, 0]], 100);
    }
}

/// Bicubic resize of face crops via the `image` crate.
use image::imageops::FilterType;
use image::{ImageBuffer, Luma, LumaA, Pixel, Rgb, Rgba};
use ndarray::{Array3, Array4, ArrayView3, Axis};

use crate::classification::domain::classify_error::ClassifyError;
use crate::classification::domain::model_variant::InputSize;
use crate::shared::face_image::FaceImage;

/// Catmull-Rom is the cubic kernel `image` offers.
const FILTER: FilterType = FilterType::CatmullRom;

/// Resize a `(height, width, channels)` face to `size`, keeping the channel count.
///
/// Fails with [`ClassifyError::Input`] if the image is not 3-D, is empty, or
/// has a channel count outside 1..=4.
pub fn resize_face(face: &FaceImage, size: InputSize) -> Result<Array3<u8>, ClassifyError> {
    let hwc = face.as_hwc().ok_or_else(|| {
        ClassifyError::Input(format!(
            "expected a height x width x channels image, got shape {:?}",
            face.shape()
        ))
    })?;
    if face.is_empty() {
        return Err(ClassifyError::Input(format!(
            "image is empty (shape {:?})",
            face.shape()
        )));
    }

    match hwc.dim().2 {
        1 => resize_as::<Luma<u8>>(hwc, size),
        2 => resize_as::<LumaA<u8>>(hwc, size),
        3 => resize_as::<Rgb<u8>>(hwc, size),
        4 => resize_as::<Rgba<u8>>(hwc, size),
        n => Err(ClassifyError::Input(format!(
            "unsupported channel count {n}"
        ))),
    }
}

/// Convert to `f32` and prepend a batch axis: `[1, height, width, channels]`.
pub fn to_batch(resized: ArrayView3<'_, u8>) -> Array4<f32> {
    resized.mapv(f32::from).insert_axis(Axis(0))
}

fn resize_as<P>(hwc: ArrayView3<'_, u8>, size: InputSize) -> Result<Array3<u8>, ClassifyError>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let (height, width, channels) = hwc.dim();
    let too_large = || ClassifyError::Input(format!("image {width}x{height} is too large"));
    let width = u32::try_from(width).map_err(|_| too_large())?;
    let height = u32::try_from(height).map_err(|_| too_large())?;

    // Logical iteration order is row-major regardless of memory layout.
    let raw: Vec<u8> = hwc.iter().copied().collect();
    let buffer = ImageBuffer::<P, Vec<u8>>::from_raw(width, height, raw)
        .ok_or_else(|| ClassifyError::Input("pixel buffer does not match image shape".into()))?;

    let resized = image::imageops::resize(&buffer, size.width, size.height, FILTER);

    Array3::from_shape_vec(
        (size.height as usize, size.width as usize, channels),
        resized.into_raw(),
    )
    .map_err(|e| ClassifyError::Input(format!("resized buffer has unexpected shape: {e}")))
}

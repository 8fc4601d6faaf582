use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use ndarray::Array4;

use crate::classification::domain::classify_error::ClassifyError;
use crate::classification::domain::face_plugin::FacePlugin;
use crate::classification::domain::mask_classification::MaskClassification;
use crate::classification::domain::mask_model::{MaskModel, MaskModelLoader};
use crate::classification::domain::model_variant::ModelVariant;
use crate::classification::infrastructure::face_resizer;
use crate::classification::infrastructure::onnx_mask_model::OnnxMaskModelLoader;
use crate::shared::constants::{MASK_PLUGIN_SLUG, MODEL_INPUT_CHANNELS};
use crate::shared::face_image::FaceImage;

/// Classifies whether a face wears a mask, and whether it is worn correctly.
///
/// The model is loaded on the first classification and kept for the life of
/// the plugin. Concurrent first calls block on a single load. A failed load
/// is remembered and returned to every later caller without retrying.
pub struct MaskClassifierPlugin {
    variant: ModelVariant,
    model_path: PathBuf,
    loader: Box<dyn MaskModelLoader>,
    model: OnceLock<Result<Box<dyn MaskModel>, ClassifyError>>,
}

impl MaskClassifierPlugin {
    pub fn new(
        variant: ModelVariant,
        model_path: impl Into<PathBuf>,
        loader: Box<dyn MaskModelLoader>,
    ) -> Self {
        Self {
            variant,
            model_path: model_path.into(),
            loader,
            model: OnceLock::new(),
        }
    }

    /// Plugin backed by an ONNX Runtime session.
    pub fn onnx(variant: ModelVariant, model_path: impl Into<PathBuf>) -> Self {
        Self::new(variant, model_path, Box::new(OnnxMaskModelLoader))
    }

    pub fn variant(&self) -> ModelVariant {
        self.variant
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.model.get(), Some(Ok(_)))
    }

    pub fn classify(&self, face: &FaceImage) -> Result<MaskClassification, ClassifyError> {
        let batch = self.preprocess(face)?;
        let model = self.model()?;
        let scores = model
            .infer(batch)
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;
        let result = MaskClassification::from_scores(&scores)?;
        log::debug!(
            "Classified face {:?} as {} ({:.3})",
            face.shape(),
            result.label(),
            result.probability()
        );
        Ok(result)
    }

    fn preprocess(&self, face: &FaceImage) -> Result<Array4<f32>, ClassifyError> {
        let resized = face_resizer::resize_face(face, self.variant.input_size())?;
        let channels = resized.dim().2;
        if channels != MODEL_INPUT_CHANNELS {
            return Err(ClassifyError::Input(format!(
                "{} expects {MODEL_INPUT_CHANNELS} channels, got {channels}",
                self.variant
            )));
        }
        Ok(face_resizer::to_batch(resized.view()))
    }

    fn model(&self) -> Result<&dyn MaskModel, ClassifyError> {
        match self.model.get_or_init(|| self.load()) {
            Ok(model) => Ok(model.as_ref()),
            Err(e) => Err(e.clone()),
        }
    }

    fn load(&self) -> Result<Box<dyn MaskModel>, ClassifyError> {
        log::info!(
            "Loading mask model {} from {}",
            self.variant,
            self.model_path.display()
        );
        self.loader.load(&self.model_path).map_err(|e| {
            log::error!("Mask model failed to load: {e}");
            ClassifyError::Load {
                path: self.model_path.clone(),
                reason: e.to_string(),
            }
        })
    }
}

impl FacePlugin for MaskClassifierPlugin {
    type Output = MaskClassification;

    fn slug(&self) -> &'static str {
        MASK_PLUGIN_SLUG
    }

    fn process(&self, face: &FaceImage) -> Result<MaskClassification, ClassifyError> {
        self.classify(face)
    }
}

/// Mask classifier network executed with ONNX Runtime via `ort`.
use std::path::Path;
use std::sync::Mutex;

use ndarray::Array4;

use crate::classification::domain::mask_model::{MaskModel, MaskModelLoader};

/// ONNX session for one mask checkpoint.
///
/// `Session::run` needs `&mut`, so the session sits behind a mutex to let
/// the model be shared by reference.
pub struct OnnxMaskModel {
    session: Mutex<ort::session::Session>,
}

impl OnnxMaskModel {
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let session = ort::session::Session::builder()?
            .with_optimization_level(ort::session::builder::GraphOptimizationLevel::Level3)?
            .with_execution_providers(execution_providers())?
            .commit_from_file(model_path)?;
        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl MaskModel for OnnxMaskModel {
    fn infer(&self, batch: Array4<f32>) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
        let input_value = ort::value::Tensor::from_array(batch)?;
        let mut session = self
            .session
            .lock()
            .map_err(|e| format!("Lock poisoned: {e}"))?;
        let outputs = session.run(ort::inputs![input_value])?;
        if outputs.len() == 0 {
            return Err("mask model produced no outputs".into());
        }

        // Output is [1, num_labels] softmax scores.
        let scores = outputs[0].try_extract_array::<f32>()?;
        if scores.shape().first() != Some(&1) {
            return Err(format!("Unexpected mask model output shape: {:?}", scores.shape()).into());
        }
        Ok(scores.iter().copied().collect())
    }
}

/// Loads [`OnnxMaskModel`]s from `.onnx` files.
#[derive(Clone, Copy, Debug, Default)]
pub struct OnnxMaskModelLoader;

impl MaskModelLoader for OnnxMaskModelLoader {
    fn load(&self, path: &Path) -> Result<Box<dyn MaskModel>, Box<dyn std::error::Error>> {
        if !path.is_file() {
            return Err(format!("model file not found: {}", path.display()).into());
        }
        Ok(Box::new(OnnxMaskModel::new(path)?))
    }
}

/// CoreML on macOS, DirectML on Windows, CPU elsewhere.
///
/// ONNX Runtime falls back to CPU if the platform provider fails to register.
fn execution_providers() -> Vec<ort::execution_providers::ExecutionProviderDispatch> {
    #[cfg(target_os = "macos")]
    {
        vec![ort::execution_providers::CoreMLExecutionProvider::default().build()]
    }
    #[cfg(target_os = "windows")]
    {
        vec![ort::execution_providers::DirectMLExecutionProvider::default().build()]
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_loader_rejects_missing_file() {
        let tmp = TempDir::new().unwrap();
        let result = OnnxMaskModelLoader.load(&tmp.path().join("missing.onnx"));
        let err = result.err().expect("missing model must fail to load");
        assert!(err.to_string().contains("model file not found"));
    }

    #[test]
    fn test_loader_rejects_directory() {
        let tmp = TempDir::new().unwrap();
        assert!(OnnxMaskModelLoader.load(tmp.path()).is_err());
    }
}

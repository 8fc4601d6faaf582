use std::path::{Path, PathBuf};

use crate::classification::domain::classify_error::ClassifyError;
use crate::classification::domain::face_plugin::FacePlugin;
use crate::input::domain::face_image_reader::FaceImageReader;

/// Classification result for one input file.
#[derive(Debug)]
pub struct FaceOutcome<T> {
    pub path: PathBuf,
    pub result: Result<T, ClassifyError>,
}

/// Runs a face plugin over a list of face-crop files.
///
/// Unreadable or malformed images are recorded in their own outcome and the
/// batch moves on. A fatal plugin error (model failed to load) aborts the
/// whole batch.
pub struct ClassifyFacesUseCase<P: FacePlugin> {
    reader: Box<dyn FaceImageReader>,
    plugin: P,
    on_progress: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
}

impl<P: FacePlugin> ClassifyFacesUseCase<P> {
    pub fn new(
        reader: Box<dyn FaceImageReader>,
        plugin: P,
        on_progress: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
    ) -> Self {
        Self {
            reader,
            plugin,
            on_progress,
        }
    }

    pub fn plugin(&self) -> &P {
        &self.plugin
    }

    /// Classifies each input in order, returning one outcome per file.
    pub fn execute(
        &self,
        inputs: &[PathBuf],
    ) -> Result<Vec<FaceOutcome<P::Output>>, Box<dyn std::error::Error>> {
        let total = inputs.len();
        let mut outcomes = Vec::with_capacity(total);

        for (i, path) in inputs.iter().enumerate() {
            let result = self.classify_file(path);
            match &result {
                Err(e) if e.is_fatal() => return Err(Box::new(e.clone())),
                Err(e) => log::warn!("Skipping {}: {e}", path.display()),
                Ok(_) => {}
            }
            outcomes.push(FaceOutcome {
                path: path.clone(),
                result,
            });

            self.report_progress(i + 1, total)?;
        }

        log::info!(
            "{} classified {}/{} images",
            self.plugin.slug(),
            outcomes.iter().filter(|o| o.result.is_ok()).count(),
            total
        );
        Ok(outcomes)
    }

    fn classify_file(&self, path: &Path) -> Result<P::Output, ClassifyError> {
        let face = self.reader.read(path).map_err(|e| {
            ClassifyError::Input(format!("failed to read {}: {e}", path.display()))
        })?;
        self.plugin.process(&face)
    }

    fn report_progress(
        &self,
        current: usize,
        total: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(ref callback) = self.on_progress {
            if !callback(current, total) {
                return Err("Cancelled".into());
            }
        }
        Ok(())
    }
}

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use facemask_core::classification::domain::mask_classification::MaskClassification;
use facemask_core::classification::domain::model_variant::ModelVariant;
use facemask_core::classification::mask_classifier_plugin::MaskClassifierPlugin;
use facemask_core::input::infrastructure::image_file_reader::ImageFileReader;
use facemask_core::pipeline::classify_faces_use_case::{ClassifyFacesUseCase, FaceOutcome};
use facemask_core::shared::constants::IMAGE_EXTENSIONS;
use facemask_core::shared::model_resolver;

/// Classify face mask usage in cropped face images.
#[derive(Parser)]
#[command(name = "facemask")]
struct Cli {
    /// Face crop image files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Model checkpoint: inception-v3 or mobilenet-v2 (full checkpoint ids also accepted).
    #[arg(long, default_value = "inception-v3")]
    model_variant: String,

    /// Path to the ONNX model file (skips model lookup).
    #[arg(long)]
    model: Option<PathBuf>,

    /// Directory of bundled models, searched after the user cache.
    #[arg(long)]
    models_dir: Option<PathBuf>,

    /// Print one JSON object per image.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let variant: ModelVariant = cli.model_variant.parse()?;
    let model_path = match cli.model {
        Some(path) => path,
        None => {
            log::info!("Resolving model: {}", variant.file_name());
            model_resolver::resolve(variant.file_name(), cli.models_dir.as_deref())?
        }
    };
    let plugin = MaskClassifierPlugin::onnx(variant, model_path);

    let progress: Box<dyn Fn(usize, usize) -> bool + Send> = Box::new(|current, total| {
        eprint!("\rClassifying image {current}/{total}");
        true
    });
    let use_case =
        ClassifyFacesUseCase::new(Box::new(ImageFileReader::new()), plugin, Some(progress));
    let outcomes = use_case.execute(&cli.inputs)?;
    eprintln!();

    for outcome in &outcomes {
        if cli.json {
            println!("{}", json_line(outcome)?);
        } else {
            println!("{}", text_line(outcome));
        }
    }

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed > 0 {
        return Err(format!("{failed} of {} images could not be classified", outcomes.len()).into());
    }
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    for input in &cli.inputs {
        if !input.exists() {
            return Err(format!("Input file not found: {}", input.display()).into());
        }
        if !is_image(input) {
            return Err(format!(
                "Unsupported input {}; expected one of: {}",
                input.display(),
                IMAGE_EXTENSIONS.join(", ")
            )
            .into());
        }
    }
    if let Some(model) = &cli.model {
        if !model.is_file() {
            return Err(format!("Model file not found: {}", model.display()).into());
        }
        if cli.models_dir.is_some() {
            return Err("--model and --models-dir are mutually exclusive".into());
        }
    }
    if let Some(dir) = &cli.models_dir {
        if !dir.is_dir() {
            return Err(format!("Models directory not found: {}", dir.display()).into());
        }
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn text_line(outcome: &FaceOutcome<MaskClassification>) -> String {
    match &outcome.result {
        Ok(c) => format!(
            "{}\t{}\t{:.4}",
            outcome.path.display(),
            c.label(),
            c.probability()
        ),
        Err(e) => format!("{}\terror\t{e}", outcome.path.display()),
    }
}

fn json_line(
    outcome: &FaceOutcome<MaskClassification>,
) -> Result<serde_json::Value, serde_json::Error> {
    let path = outcome.path.display().to_string();
    match &outcome.result {
        Ok(c) => {
            let mut value = serde_json::to_value(c)?;
            if let Some(obj) = value.as_object_mut() {
                obj.insert("path".into(), path.into());
            }
            Ok(value)
        }
        Err(e) => Ok(serde_json::json!({ "path": path, "error": e.to_string() })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facemask_core::classification::domain::classify_error::ClassifyError;

    fn outcome(result: Result<MaskClassification, ClassifyError>) -> FaceOutcome<MaskClassification> {
        FaceOutcome {
            path: PathBuf::from("faces/a.jpg"),
            result,
        }
    }

    #[test]
    fn test_is_image_accepts_known_extensions_case_insensitively() {
        assert!(is_image(Path::new("face.JPG")));
        assert!(is_image(Path::new("face.png")));
        assert!(!is_image(Path::new("face.mp4")));
        assert!(!is_image(Path::new("face")));
    }

    #[test]
    fn test_text_line_for_success() {
        let c = MaskClassification::from_scores(&[0.1, 0.85, 0.05]).unwrap();
        assert_eq!(text_line(&outcome(Ok(c))), "faces/a.jpg\twith_mask\t0.8500");
    }

    #[test]
    fn test_json_line_for_success_includes_path() {
        let c = MaskClassification::from_scores(&[0.9, 0.05, 0.05]).unwrap();
        let value = json_line(&outcome(Ok(c))).unwrap();
        assert_eq!(value["path"], "faces/a.jpg");
        assert_eq!(value["mask"], "without_mask");
        assert!(value["mask_probability"].is_number());
    }

    #[test]
    fn test_json_line_for_error() {
        let value = json_line(&outcome(Err(ClassifyError::Input("empty".into())))).unwrap();
        assert_eq!(value["error"], "invalid face image: empty");
    }
}

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelResolveError {
    #[error("could not determine cache directory")]
    NoCacheDir,
    #[error("model {name} not found (searched: {})", display_paths(.searched))]
    NotFound { name: String, searched: Vec<PathBuf> },
}

/// Resolve a model file by name from local storage.
///
/// Resolution order:
/// 1. User cache directory (platform-specific)
/// 2. Bundled path (for development / pre-packaged installs)
///
/// Fetching missing artifacts is left to whoever populates these directories.
pub fn resolve(name: &str, bundled_dir: Option<&Path>) -> Result<PathBuf, ModelResolveError> {
    let cache_dir = model_cache_dir()?;
    let path = find_model(name, &cache_dir, bundled_dir)?;
    log::info!("Resolved model {name} at {}", path.display());
    Ok(path)
}

/// Platform-specific model cache directory.
///
/// - macOS: `~/Library/Application Support/FaceMask/models/`
/// - Linux: `$XDG_CACHE_HOME/FaceMask/models/` or `~/.cache/FaceMask/models/`
/// - Windows: `%LOCALAPPDATA%/FaceMask/models/`
pub fn model_cache_dir() -> Result<PathBuf, ModelResolveError> {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir()
            .map(|d| d.join("FaceMask").join("models"))
            .ok_or(ModelResolveError::NoCacheDir)
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::cache_dir()
            .map(|d| d.join("FaceMask").join("models"))
            .ok_or(ModelResolveError::NoCacheDir)
    }
}

fn find_model(
    name: &str,
    cache_dir: &Path,
    bundled_dir: Option<&Path>,
) -> Result<PathBuf, ModelResolveError> {
    let candidates: Vec<PathBuf> = std::iter::once(cache_dir)
        .chain(bundled_dir)
        .map(|dir| dir.join(name))
        .collect();

    match candidates.iter().find(|path| path.is_file()) {
        Some(path) => Ok(path.clone()),
        None => Err(ModelResolveError::NotFound {
            name: name.to_string(),
            searched: candidates,
        }),
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

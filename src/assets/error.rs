//! Error types for model loading

/// Errors that can occur while loading the model
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelLoadError {
    /// The asset server could not load or parse the file
    #[error("Failed to load model {path}: {reason}")]
    AssetLoadFailure { path: String, reason: String },

    /// The file loaded but contains no scene to spawn
    #[error("Model {path} contains no scene")]
    NoScene { path: String },
}

/// Crate-wide result alias.
pub type FolioResult<T> = Result<T, FolioError>;

/// Top-level error type for configuration, animation, evaluation and scene failures.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// Invalid input data or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid animation definition (breakpoints, keyframes, spring parameters).
    #[error("animation error: {0}")]
    Animation(String),

    /// Failure while evaluating a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Decorative scene failure (unsupported backend, raster error).
    #[error("scene error: {0}")]
    Scene(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`FolioError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`FolioError::Scene`].
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`FolioError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

/// Convenience result type used across fluid-waves.
pub type WavesResult<T> = Result<T, WavesError>;

/// Top-level error taxonomy used by wave APIs.
#[derive(thiserror::Error, Debug)]
pub enum WavesError {
    /// Invalid user-provided configuration (point counts, wave counts, heights).
    #[error("validation error: {0}")]
    Validation(String),

    /// The lookup identifier did not resolve to any element.
    #[error("root element not found: {0}")]
    RootNotFound(String),

    /// The resolved root is not an SVG element.
    #[error("root element is not an SVG element (found `{0}`)")]
    NotSvgRoot(String),

    /// The root contains no `<path>` children to animate.
    #[error("root element contains no path elements")]
    NoPathElements,

    /// Errors when serializing or deserializing options.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while building or rasterizing an SVG document.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WavesError {
    /// Build a [`WavesError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WavesError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`WavesError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

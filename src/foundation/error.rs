/// Convenience result type used across the crate.
pub type KolamResult<T> = Result<T, KolamError>;

/// Top-level error taxonomy used by export and capture APIs.
///
/// Generation itself never fails: degenerate parameters are normalized instead.
#[derive(thiserror::Error, Debug)]
pub enum KolamError {
    /// Invalid user-provided data (configuration files, encoder settings).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a rendered surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding captured frames.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KolamError {
    /// Build a [`KolamError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KolamError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`KolamError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`KolamError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

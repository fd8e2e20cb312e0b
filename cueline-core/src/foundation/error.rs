/// Convenience result type used across Cueline.
pub type CuelineResult<T> = Result<T, CuelineError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum CuelineError {
    /// Invalid user-provided presentation or timeline data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed timecode string at the parsing boundary.
    #[error("timecode error: {0}")]
    Timecode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CuelineError {
    /// Build a [`CuelineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CuelineError::Timecode`] value.
    pub fn timecode(msg: impl Into<String>) -> Self {
        Self::Timecode(msg.into())
    }

    /// Build a [`CuelineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

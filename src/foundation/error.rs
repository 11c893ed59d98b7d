/// Convenience result type used across scrollfilm.
pub type ScrollfilmResult<T> = Result<T, ScrollfilmError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Configuration problems surface once, at validate/compile time; per-frame
/// sampling never errors (absent properties fall back to documented defaults).
#[derive(thiserror::Error, Debug)]
pub enum ScrollfilmError {
    /// Invalid user-provided film configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while measuring the host tree or resolving scene geometry.
    #[error("compile error: {0}")]
    Compile(String),

    /// Errors reported by the host environment.
    #[error("host error: {0}")]
    Host(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollfilmError {
    /// Build a [`ScrollfilmError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollfilmError::Compile`] value.
    pub fn compile(msg: impl Into<String>) -> Self {
        Self::Compile(msg.into())
    }

    /// Build a [`ScrollfilmError::Host`] value.
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

//! Error types for carousel mounting and configuration.

use thiserror::Error;

/// Errors that can occur while mounting or configuring a carousel
#[derive(Error, Debug)]
pub enum CarouselError {
    /// The host has no element with the configured view id
    #[error("carousel view element not found: #{id}")]
    MissingElement { id: String },

    /// Configuration values failed validation
    #[error("invalid carousel config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for carousel operations
pub type CarouselResult<T> = Result<T, CarouselError>;

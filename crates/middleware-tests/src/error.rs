//! Errors surfaced by the middleware drivers.

use thiserror::Error;

/// Error from a library under test.
#[derive(Debug, Error)]
pub enum MiddlewareError {
    /// PNG decoder rejected the input.
    #[error("PNG decode error: {0}")]
    Png(#[from] png::DecodingError),

    /// WAV reader rejected the input.
    #[error("WAV read error: {0}")]
    Wav(#[from] hound::Error),

    /// glTF loader rejected the input.
    #[error("glTF load error: {0}")]
    Gltf(#[from] gltf::Error),

    /// Library succeeded but the data lacks something the suite needs.
    #[error("{0}")]
    Missing(String),
}

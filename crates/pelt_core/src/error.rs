use thiserror::Error;

/// Rejections produced before any network call is made.
///
/// The Display strings double as the HTTP response bodies.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("No valid player name/UUID or none provided")]
    Missing,

    #[error("Invalid player name/UUID format")]
    Invalid,
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Player not found")]
    NotFound,

    #[error("Identity lookup failed: {0}")]
    Lookup(String),
}

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned status {0}")]
    Status(u16),
}

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Default skin asset missing: {0}")]
    NotFound(String),
}

#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Manifest parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

use crate::identity::DefaultSkin;

use bytes::Bytes;

/// Where a player's skin comes from: a custom texture upload or one of
/// the built-in models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkinReference {
    Url(String),
    Default(DefaultSkin),
}

/// Raw image bytes plus the upstream content type, re-emitted verbatim.
#[derive(Debug, Clone)]
pub struct SkinImage {
    pub bytes: Bytes,
    pub content_type: String,
}

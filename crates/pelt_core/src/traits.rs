use crate::error::*;
use crate::identity::{DefaultSkin, PlayerIdentity};
use crate::skin::{SkinImage, SkinReference};

/// Upstream profile lookups. The three methods mirror the three network
/// stages of the pipeline, so each stage's failure policy is visible in
/// its signature: `resolve` and `fetch_image` fail fast,
/// `skin_reference` never fails.
pub trait ProfileService: Send + Sync + 'static + Clone {
    /// Resolve a username to the canonical player identity.
    fn resolve(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<PlayerIdentity, ResolveError>> + Send;

    /// Locate the player's current skin. Any problem with the profile or
    /// its texture manifest falls back to the default model instead of
    /// erroring; a missing custom skin is expected, not exceptional.
    fn skin_reference(
        &self,
        identity: &PlayerIdentity,
    ) -> impl Future<Output = SkinReference> + Send;

    /// Download a custom skin image as raw bytes.
    fn fetch_image(&self, url: &str) -> impl Future<Output = Result<SkinImage, ImageError>> + Send;
}

/// Source of the built-in steve/alex fallback images.
pub trait SkinStore: Send + Sync + 'static + Clone {
    fn read_default(
        &self,
        skin: DefaultSkin,
    ) -> impl Future<Output = Result<SkinImage, AssetError>> + Send;
}

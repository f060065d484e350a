use pelt_core::prelude::*;

use bytes::Bytes;
use std::collections::HashMap;

/// In-memory [`ProfileService`] with canned players.
///
/// Unknown usernames resolve to [`ResolveError::NotFound`]; identities
/// without a registered skin URL fall back to the default model, like
/// the real service does for profiles without a custom skin.
#[derive(Clone, Default)]
pub struct StaticProfiles {
    identities: HashMap<String, PlayerIdentity>,
    skin_urls: HashMap<String, String>,
    images: HashMap<String, SkinImage>,
}

impl StaticProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(mut self, username: &str, identity: &str) -> Self {
        self.identities
            .insert(username.to_string(), PlayerIdentity::new(identity));
        self
    }

    pub fn with_skin_url(mut self, identity: &str, url: &str) -> Self {
        let identity = PlayerIdentity::new(identity);
        self.skin_urls
            .insert(identity.as_str().to_string(), url.to_string());
        self
    }

    pub fn with_image(mut self, url: &str, bytes: &'static [u8], content_type: &str) -> Self {
        self.images.insert(
            url.to_string(),
            SkinImage {
                bytes: Bytes::from_static(bytes),
                content_type: content_type.to_string(),
            },
        );
        self
    }
}

impl ProfileService for StaticProfiles {
    async fn resolve(&self, username: &str) -> Result<PlayerIdentity, ResolveError> {
        self.identities
            .get(username)
            .cloned()
            .ok_or(ResolveError::NotFound)
    }

    async fn skin_reference(&self, identity: &PlayerIdentity) -> SkinReference {
        match self.skin_urls.get(identity.as_str()) {
            Some(url) => SkinReference::Url(url.clone()),
            None => SkinReference::Default(identity.default_skin()),
        }
    }

    async fn fetch_image(&self, url: &str) -> Result<SkinImage, ImageError> {
        self.images
            .get(url)
            .cloned()
            .ok_or(ImageError::Status(404))
    }
}

/// [`SkinStore`] serving fixed, distinguishable bytes per model.
#[derive(Clone)]
pub struct StaticSkins;

impl SkinStore for StaticSkins {
    async fn read_default(&self, skin: DefaultSkin) -> Result<SkinImage, AssetError> {
        let bytes: &'static [u8] = match skin {
            DefaultSkin::Steve => b"static-steve-png",
            DefaultSkin::Alex => b"static-alex-png",
        };

        Ok(SkinImage {
            bytes: Bytes::from_static(bytes),
            content_type: "image/png".to_string(),
        })
    }
}

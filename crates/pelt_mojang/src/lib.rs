use pelt_core::prelude::*;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

/// Base URLs of the upstream Mojang services.
#[derive(Clone, Debug)]
pub struct MojangConfig {
    /// Profile lookup service (username → UUID).
    pub services_url: String,
    /// Session service (UUID → profile + textures).
    pub session_url: String,
}

impl Default for MojangConfig {
    fn default() -> Self {
        Self {
            services_url: "https://api.minecraftservices.com".to_string(),
            session_url: "https://sessionserver.mojang.com".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct MojangClient {
    client: Client,
    config: MojangConfig,
}

#[derive(Deserialize, Debug, Clone)]
struct LookupRecord {
    id: String,
    #[allow(dead_code)]
    name: String,
}

impl MojangClient {
    pub fn new(config: MojangConfig) -> Self {
        let client = Client::builder()
            .user_agent("pelt/0.1")
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Fetch the profile and pull the custom skin URL out of its texture
    /// manifest. `Ok(None)` means the profile exists but has no custom
    /// skin set.
    async fn fetch_skin_url(&self, identity: &PlayerIdentity) -> anyhow::Result<Option<String>> {
        let url = format!(
            "{}/session/minecraft/profile/{}",
            self.config.session_url, identity
        );

        let res = self.client.get(&url).send().await?;
        if !res.status().is_success() {
            anyhow::bail!("session service returned {}", res.status());
        }

        let profile: ProfileRecord = res.json().await?;
        let Some(value) = profile.textures() else {
            return Ok(None);
        };

        let manifest = TextureManifest::decode(value)?;
        Ok(manifest.skin_url().map(str::to_owned))
    }
}

impl ProfileService for MojangClient {
    async fn resolve(&self, username: &str) -> Result<PlayerIdentity, ResolveError> {
        let url = format!(
            "{}/minecraft/profile/lookup/bulk/byname",
            self.config.services_url
        );

        let res = self
            .client
            .post(&url)
            .json(&[username])
            .send()
            .await
            .map_err(|e| ResolveError::Lookup(format!("Network error: {e}")))?;

        if !res.status().is_success() {
            return Err(ResolveError::Lookup(format!(
                "Lookup service returned {}",
                res.status()
            )));
        }

        let records: Vec<LookupRecord> = res
            .json()
            .await
            .map_err(|e| ResolveError::Lookup(format!("Failed to parse lookup response: {e}")))?;

        match records.first() {
            Some(record) => Ok(PlayerIdentity::new(&record.id)),
            None => Err(ResolveError::NotFound),
        }
    }

    async fn skin_reference(&self, identity: &PlayerIdentity) -> SkinReference {
        match self.fetch_skin_url(identity).await {
            Ok(Some(url)) => SkinReference::Url(url),
            Ok(None) => SkinReference::Default(identity.default_skin()),
            Err(e) => {
                warn!("Profile lookup for {identity} failed, using default skin: {e:#}");
                SkinReference::Default(identity.default_skin())
            }
        }
    }

    async fn fetch_image(&self, url: &str) -> Result<SkinImage, ImageError> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImageError::Network(e.to_string()))?;

        if !res.status().is_success() {
            return Err(ImageError::Status(res.status().as_u16()));
        }

        let content_type = res
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let bytes = res
            .bytes()
            .await
            .map_err(|e| ImageError::Network(e.to_string()))?;

        Ok(SkinImage {
            bytes,
            content_type,
        })
    }
}

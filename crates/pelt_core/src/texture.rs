use crate::error::TextureError;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Deserialize;

/// A player profile as returned by the session service.
///
/// The property named `"textures"` carries the base64-encoded
/// [`TextureManifest`].
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<ProfileProperty>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileProperty {
    pub name: String,
    pub value: String,
}

impl ProfileRecord {
    /// The raw base64 texture manifest, if the profile carries one.
    pub fn textures(&self) -> Option<&str> {
        self.properties
            .iter()
            .find(|prop| prop.name == "textures")
            .map(|prop| prop.value.as_str())
    }
}

/// Decoded payload of the `"textures"` profile property.
#[derive(Debug, Clone, Deserialize)]
pub struct TextureManifest {
    #[serde(default)]
    pub timestamp: u64,
    pub textures: TextureSet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextureSet {
    #[serde(rename = "SKIN")]
    pub skin: Option<TextureEntry>,
    #[serde(rename = "CAPE")]
    pub cape: Option<TextureEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextureEntry {
    pub url: String,
    #[serde(default)]
    pub metadata: Option<TextureMetadata>,
}

/// `model` is `"slim"` for alex-style skins.
#[derive(Debug, Clone, Deserialize)]
pub struct TextureMetadata {
    pub model: String,
}

impl TextureManifest {
    pub fn decode(value: &str) -> Result<Self, TextureError> {
        let raw = STANDARD.decode(value)?;
        Ok(serde_json::from_slice(&raw)?)
    }

    /// URL of the custom skin, if one is set.
    pub fn skin_url(&self) -> Option<&str> {
        self.textures.skin.as_ref().map(|entry| entry.url.as_str())
    }
}

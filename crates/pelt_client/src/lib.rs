use pelt_core::skin::SkinImage;

use reqwest::{Client, StatusCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PeltClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server returned error {0}: {1}")]
    ServerError(StatusCode, String),
}

pub type Result<T> = std::result::Result<T, PeltClientError>;

#[derive(Clone)]
pub struct PeltClient {
    base_url: String,
    client: Client,
}

impl PeltClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Fetch a player's skin by username or UUID.
    pub async fn fetch_skin(&self, player: &str) -> Result<SkinImage> {
        let url = format!("{}/skin", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("player", player)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(PeltClientError::ServerError(status, text));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let bytes = response.bytes().await?;

        Ok(SkinImage {
            bytes,
            content_type,
        })
    }
}

//! Outfit image suggestions
//!
//! Maps a weather condition to a clothing search keyword and fetches
//! matching images from Unsplash. Purely presentational input; the
//! ranking core never consults this module.

use crate::classify::ConditionTag;
use crate::{EventcastError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Search keyword for outfit images matching a condition
#[must_use]
pub const fn outfit_keyword(condition: ConditionTag) -> &'static str {
    match condition {
        ConditionTag::Clear => "summer outfit",
        ConditionTag::PartlyCloudy | ConditionTag::Cloudy => "casual autumn outfit",
        ConditionTag::Foggy => "cozy hoodie outfit",
        ConditionTag::Drizzle | ConditionTag::Rainy => "raincoat streetwear",
        ConditionTag::Snowy => "winter coat fashion",
        ConditionTag::Stormy => "windbreaker outfit",
    }
}

/// A single outfit suggestion
#[derive(Debug, Clone)]
pub struct OutfitItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub link: String,
}

/// Keyword-to-images capability
#[async_trait]
pub trait OutfitProvider: Send + Sync {
    async fn fetch_outfits(&self, keyword: &str) -> Result<Vec<OutfitItem>>;
}

/// Unsplash photo search client
pub struct UnsplashClient {
    client: Client,
    access_key: String,
}

impl UnsplashClient {
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            access_key: access_key.into(),
        }
    }
}

#[async_trait]
impl OutfitProvider for UnsplashClient {
    #[instrument(skip(self))]
    async fn fetch_outfits(&self, keyword: &str) -> Result<Vec<OutfitItem>> {
        let url = format!(
            "https://api.unsplash.com/search/photos?query={}&per_page=10",
            urlencoding::encode(keyword)
        );
        debug!("Unsplash request URL: {}", url);

        let response: UnsplashSearchResponse = self
            .client
            .get(&url)
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .send()
            .await
            .map_err(|e| EventcastError::general(format!("Unsplash request failed: {e}")))?
            .json()
            .await
            .map_err(|e| EventcastError::general(format!("Unsplash response invalid: {e}")))?;

        Ok(response
            .results
            .into_iter()
            .map(|photo| OutfitItem {
                id: photo.id,
                title: photo.description.unwrap_or_else(|| keyword.to_string()),
                image_url: photo.urls.small,
                link: photo.urls.regular,
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct UnsplashSearchResponse {
    results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Deserialize)]
struct UnsplashPhoto {
    id: String,
    description: Option<String>,
    urls: UnsplashPhotoUrls,
}

#[derive(Debug, Deserialize)]
struct UnsplashPhotoUrls {
    small: String,
    regular: String,
}

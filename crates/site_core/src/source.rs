use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use shared::{domain::ContentSlice, error::ContentError};
use tracing::debug;
use url::Url;

use crate::config::{ContentEndpoints, SettingsError, SiteSettings};

const CACHE_BUST_PARAM: &str = "v";

/// Raw access to the three content documents.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, slice: ContentSlice) -> Result<Vec<u8>, ContentError>;
}

pub struct HttpContentSource {
    http: Client,
    endpoints: ContentEndpoints,
    cache_bust: bool,
}

impl HttpContentSource {
    pub fn new(endpoints: ContentEndpoints, cache_bust: bool) -> Self {
        Self {
            http: Client::new(),
            endpoints,
            cache_bust,
        }
    }

    pub fn from_settings(settings: &SiteSettings) -> Result<Self, SettingsError> {
        let endpoints = ContentEndpoints::resolve(&settings.content_base_url)?;
        Ok(Self::new(endpoints, settings.cache_bust))
    }

    pub fn endpoints(&self) -> &ContentEndpoints {
        &self.endpoints
    }

    fn request_url(&self, slice: ContentSlice) -> Url {
        let mut url = self.endpoints.url(slice).clone();
        if self.cache_bust {
            url.query_pairs_mut().append_pair(
                CACHE_BUST_PARAM,
                &Utc::now().timestamp_millis().to_string(),
            );
        }
        url
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch(&self, slice: ContentSlice) -> Result<Vec<u8>, ContentError> {
        let url = self.request_url(slice);
        debug!(slice = %slice, url = %url, "content: requesting document");

        let res = self
            .http
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| ContentError::Transport {
                slice,
                url: url.to_string(),
                message: err.to_string(),
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                slice,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = res.bytes().await.map_err(|err| ContentError::Transport {
            slice,
            url: url.to_string(),
            message: err.to_string(),
        })?;
        Ok(body.to_vec())
    }
}

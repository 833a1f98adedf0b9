//! HTTP audio fetcher adapter

use async_trait::async_trait;

use crate::application::ports::{AudioFetcher, FetchError};
use crate::domain::audio::{AudioMimeType, FetchedAudio};

/// Fetches the caller-supplied audio URL with a plain GET.
///
/// The MIME type is taken from the response Content-Type when it is a
/// recognized audio type, then from the URL extension, defaulting to webm.
pub struct HttpAudioFetcher {
    client: reqwest::Client,
}

impl HttpAudioFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AudioFetcher for HttpAudioFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedAudio, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(AudioMimeType::from_content_type)
            .or_else(|| AudioMimeType::from_url(url))
            .unwrap_or_default();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        Ok(FetchedAudio::new(bytes.to_vec(), mime_type))
    }
}

//! Opaque media upload collaborator.
//!
//! Entries reference photos and signatures only as opaque strings; this
//! module defines the "store bytes, get a fetchable URL back" capability and
//! a client for the existing upload endpoint. The storage backend itself is
//! out of scope.

use reqwest::blocking::Client;
use reqwest::blocking::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::AppConfig;

#[derive(Debug, Clone, Error)]
pub enum MediaError {
    #[error("upload failed: {0}")]
    Upload(String),
}

/// Store bytes somewhere fetchable and return the URL.
pub trait MediaService {
    fn upload(&self, bytes: Vec<u8>, filename: &str) -> Result<String, MediaError>;
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

pub struct RemoteMedia {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl RemoteMedia {
    pub fn new(config: &AppConfig) -> Result<Self, MediaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| MediaError::Upload(err.to_string()))?;
        Ok(RemoteMedia {
            client,
            base_url: config.server_url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        })
    }
}

impl MediaService for RemoteMedia {
    fn upload(&self, bytes: Vec<u8>, filename: &str) -> Result<String, MediaError> {
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .bearer_auth(&self.anon_key)
            .multipart(form)
            .send()
            .map_err(|err| MediaError::Upload(err.to_string()))?;

        let status = response.status();
        let body: UploadResponse = response
            .json()
            .map_err(|err| MediaError::Upload(err.to_string()))?;

        if let Some(error) = body.error {
            return Err(MediaError::Upload(error));
        }
        match body.url {
            Some(url) => {
                debug!(%url, "Media uploaded");
                Ok(url)
            }
            None => Err(MediaError::Upload(format!(
                "endpoint returned no url (status {status})"
            ))),
        }
    }
}

use crate::domain::model::RemoteLocation;
use crate::domain::ports::RemoteStore;
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::fs;
use std::path::Path;

/// Fetches artifacts over plain HTTP(S), for models published behind a web
/// server instead of an object store.
#[derive(Debug, Clone, Default)]
pub struct HttpStore {
    client: Client,
}

impl HttpStore {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl RemoteStore for HttpStore {
    async fn download(&self, location: &RemoteLocation, local_path: &Path) -> Result<()> {
        let url = location.to_string();

        tracing::debug!("Making GET request to: {}", url);
        let response = self.client.get(&url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        if !response.status().is_success() {
            return Err(DemoError::FetchError {
                location: url,
                message: format!("Unexpected HTTP status: {}", response.status()),
            });
        }

        let bytes = response.bytes().await?;
        fs::write(local_path, &bytes)?;
        Ok(())
    }
}

use crate::config::fetch::FetchConfig;
use crate::domain::model::RemoteLocation;
use crate::domain::ports::RemoteStore;
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::Client as S3Client;
use std::fs;
use std::path::Path;

/// Fetches artifacts from S3 with one blocking GetObject per download.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: S3Client,
    default_bucket: String,
}

impl S3Store {
    pub fn new(client: S3Client, default_bucket: String) -> Self {
        Self {
            client,
            default_bucket,
        }
    }

    /// Build a client from explicitly supplied credentials. The library
    /// never reads credentials from ambient state itself; the caller owns
    /// that lookup.
    pub async fn from_config(config: &FetchConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "fetch-config",
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        Self::new(S3Client::new(&sdk_config), config.bucket.clone())
    }
}

#[async_trait]
impl RemoteStore for S3Store {
    async fn download(&self, location: &RemoteLocation, local_path: &Path) -> Result<()> {
        let bucket = if location.bucket.is_empty() {
            &self.default_bucket
        } else {
            &location.bucket
        };

        let object = self
            .client
            .get_object()
            .bucket(bucket)
            .key(&location.key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Error downloading file from S3: {}", e);
                DemoError::FetchError {
                    location: location.to_string(),
                    message: e.to_string(),
                }
            })?;

        let data = object.body.collect().await.map_err(|e| {
            tracing::error!("Error reading S3 object body: {}", e);
            DemoError::FetchError {
                location: location.to_string(),
                message: e.to_string(),
            }
        })?;

        fs::write(local_path, data.into_bytes())?;
        tracing::info!(
            "File downloaded from s3: {} to the local: {}",
            location,
            local_path.display()
        );
        Ok(())
    }
}

use crate::domain::model::{Label, RemoteLocation};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// A loaded predictor: one ordered feature vector in, one diagnosis out.
pub trait Model: Send + Sync {
    fn infer(&self, features: &[f64]) -> Result<Label>;
}

/// Remote object storage an artifact can be fetched from.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn download(&self, location: &RemoteLocation, local_path: &Path) -> Result<()>;
}

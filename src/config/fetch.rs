use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{
    validate_aws_region, validate_non_empty_string, validate_s3_bucket_name, Validate,
};
use std::env;

pub const DEFAULT_BUCKET: &str = "iyq5197-cloud";

/// Credentials and defaults for the S3 fetch step, passed explicitly to the
/// store. The library itself never reads ambient state; `from_env` is for
/// the binary boundary only.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub bucket: String,
}

impl FetchConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            access_key_id: env::var("AWS_ACCESS_KEY_ID").map_err(|_| {
                DemoError::MissingConfigError {
                    field: "AWS_ACCESS_KEY_ID".to_string(),
                }
            })?,
            secret_access_key: env::var("AWS_SECRET_ACCESS_KEY").map_err(|_| {
                DemoError::MissingConfigError {
                    field: "AWS_SECRET_ACCESS_KEY".to_string(),
                }
            })?,
            region: env::var("REGION_NAME").map_err(|_| DemoError::MissingConfigError {
                field: "REGION_NAME".to_string(),
            })?,
            bucket: env::var("S3_BUCKET_NAME").unwrap_or_else(|_| DEFAULT_BUCKET.to_string()),
        })
    }
}

impl Validate for FetchConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("access_key_id", &self.access_key_id)?;
        validate_non_empty_string("secret_access_key", &self.secret_access_key)?;
        validate_aws_region("region", &self.region)?;
        validate_s3_bucket_name("bucket", &self.bucket)?;

        tracing::info!("✅ Fetch configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_fetch_config() {
        let config = FetchConfig {
            access_key_id: "AKIAEXAMPLE".to_string(),
            secret_access_key: "secret".to_string(),
            region: "us-east-1".to_string(),
            bucket: DEFAULT_BUCKET.to_string(),
        };
        assert!(config.validate().is_ok());

        let bad_region = FetchConfig {
            region: "US EAST".to_string(),
            ..config.clone()
        };
        assert!(bad_region.validate().is_err());

        let bad_bucket = FetchConfig {
            bucket: "NO".to_string(),
            ..config
        };
        assert!(bad_bucket.validate().is_err());
    }
}

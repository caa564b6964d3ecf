use crate::domain::model::RemoteLocation;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_model_name, validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_ARTIFACT_DIR: &str = "artifacts";

fn default_artifact_dir() -> String {
    DEFAULT_ARTIFACT_DIR.to_string()
}

/// TOML manifest naming the models to resolve and where they live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelManifest {
    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: String,
    pub models: BTreeMap<String, String>,
}

impl Default for ModelManifest {
    // 與原始部署相同的兩個模型
    fn default() -> Self {
        let mut models = BTreeMap::new();
        models.insert(
            "model_lasso".to_string(),
            "s3://iyq5197-cloud/model_lasso.json".to_string(),
        );
        models.insert(
            "model_logistic".to_string(),
            "s3://iyq5197-cloud/model_logistic.json".to_string(),
        );

        Self {
            artifact_dir: default_artifact_dir(),
            models,
        }
    }
}

impl ModelManifest {
    /// 從 TOML 檔案載入模型清單
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for ModelManifest {
    fn validate(&self) -> Result<()> {
        validate_path("artifact_dir", &self.artifact_dir)?;

        if self.models.is_empty() {
            return Err(DemoError::ConfigError {
                message: "Manifest lists no models".to_string(),
            });
        }

        for (name, location) in &self.models {
            validate_model_name("models", name)?;
            let parsed = RemoteLocation::parse(location)?;
            // HTTP locations must also be well-formed URLs
            if matches!(parsed.scheme.as_str(), "http" | "https") {
                validate_url("models", location)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manifest_validates() {
        let manifest = ModelManifest::default();
        assert!(manifest.validate().is_ok());
        assert_eq!(manifest.artifact_dir, "artifacts");
        assert_eq!(manifest.models.len(), 2);
        assert!(manifest.models.contains_key("model_lasso"));
        assert!(manifest.models.contains_key("model_logistic"));
    }

    #[test]
    fn test_manifest_from_toml_str() {
        let manifest = ModelManifest::from_toml_str(
            r#"
artifact_dir = "models"

[models]
model_logistic = "https://models.example.com/model_logistic.json"
"#,
        )
        .unwrap();

        assert_eq!(manifest.artifact_dir, "models");
        assert_eq!(
            manifest.models.get("model_logistic").map(String::as_str),
            Some("https://models.example.com/model_logistic.json")
        );
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_manifest_artifact_dir_defaults() {
        let manifest = ModelManifest::from_toml_str(
            r#"
[models]
model_lasso = "s3://iyq5197-cloud/model_lasso.json"
"#,
        )
        .unwrap();
        assert_eq!(manifest.artifact_dir, DEFAULT_ARTIFACT_DIR);
    }

    #[test]
    fn test_manifest_rejects_bad_location() {
        let manifest = ModelManifest::from_toml_str(
            r#"
[models]
model_lasso = "not-a-location"
"#,
        )
        .unwrap();
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_manifest_rejects_empty_model_list() {
        let manifest = ModelManifest::from_toml_str("[models]\n").unwrap();
        assert!(manifest.validate().is_err());
    }
}

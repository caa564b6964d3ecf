use crate::domain::model::LinearModel;
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const ARTIFACT_EXT: &str = "json";

/// In-memory mapping from model name to loaded model, built once from the
/// artifact directory and passed by reference to consumers.
#[derive(Debug, Default)]
pub struct Catalog {
    models: BTreeMap<String, LinearModel>,
}

impl Catalog {
    /// 非遞迴掃描 artifact 目錄，檔名 stem 即為模型名稱
    ///
    /// A missing directory or one with no matching files yields an empty
    /// catalog. A file that fails to deserialize is logged and skipped;
    /// it never fails the whole scan.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut models = BTreeMap::new();

        if !dir.is_dir() {
            tracing::warn!("Artifact directory does not exist: {}", dir.display());
            return Ok(Self { models });
        }

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(ARTIFACT_EXT)
            {
                continue;
            }

            let Some(model_name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            match Self::load_artifact(&path) {
                Ok(model) => {
                    tracing::info!("Successfully loaded model: {}", model_name);
                    models.insert(model_name.to_string(), model);
                }
                Err(e) => {
                    tracing::error!("Error loading model {}: {}", model_name, e);
                }
            }
        }

        Ok(Self { models })
    }

    fn load_artifact(path: &Path) -> Result<LinearModel> {
        let bytes = fs::read(path)?;
        let model = serde_json::from_slice(&bytes)?;
        Ok(model)
    }

    pub fn get(&self, name: &str) -> Option<&LinearModel> {
        self.models.get(name)
    }

    /// Model names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.models.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

use crate::domain::ports::Model;
use crate::utils::error::{DemoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary diagnosis label. Class 0 maps to Malignant, anything else to Benign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Malignant,
    Benign,
}

impl Label {
    pub fn from_class(class: u8) -> Self {
        if class == 0 {
            Label::Malignant
        } else {
            Label::Benign
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Malignant => write!(f, "Malignant"),
            Label::Benign => write!(f, "Benign"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    Logistic,
    Lasso,
}

/// A serialized linear classifier artifact.
///
/// `logistic` thresholds the raw decision value at 0 (sigmoid >= 0.5);
/// `lasso` is a regression fit whose output is thresholded at 0.5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub family: ModelFamily,
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    fn decision(&self, features: &[f64]) -> f64 {
        self.weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }
}

impl Model for LinearModel {
    fn infer(&self, features: &[f64]) -> Result<Label> {
        if features.len() != self.weights.len() {
            return Err(DemoError::PredictionError {
                message: format!(
                    "Input has {} features but the model expects {}",
                    features.len(),
                    self.weights.len()
                ),
            });
        }

        let raw = self.decision(features);
        let class = match self.family {
            ModelFamily::Logistic => u8::from(raw >= 0.0),
            ModelFamily::Lasso => u8::from(raw >= 0.5),
        };

        Ok(Label::from_class(class))
    }
}

/// A remote artifact location of the form `scheme://bucket/key/path`.
///
/// The bucket segment may be empty (`s3:///key`), in which case the store's
/// configured default bucket applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLocation {
    pub scheme: String,
    pub bucket: String,
    pub key: String,
}

impl RemoteLocation {
    /// 解析遠端位置：去掉 scheme 前綴後，以第一個 `/` 切出 bucket 與 key
    pub fn parse(location: &str) -> Result<Self> {
        let invalid = |reason: &str| DemoError::InvalidConfigValueError {
            field: "remote_location".to_string(),
            value: location.to_string(),
            reason: reason.to_string(),
        };

        let (scheme, rest) = location
            .split_once("://")
            .ok_or_else(|| invalid("Expected a location of the form scheme://bucket/key"))?;

        if scheme.is_empty() {
            return Err(invalid("Scheme cannot be empty"));
        }

        let (bucket, key) = rest
            .split_once('/')
            .ok_or_else(|| invalid("Location has no key path after the bucket"))?;

        if key.is_empty() {
            return Err(invalid("Key cannot be empty"));
        }

        Ok(Self {
            scheme: scheme.to_string(),
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }
}

impl fmt::Display for RemoteLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}/{}", self.scheme, self.bucket, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_mapping() {
        assert_eq!(Label::from_class(0), Label::Malignant);
        assert_eq!(Label::from_class(1), Label::Benign);
        assert_eq!(Label::from_class(7), Label::Benign);
        assert_eq!(Label::Malignant.to_string(), "Malignant");
    }

    #[test]
    fn test_logistic_thresholds_at_zero() {
        let model = LinearModel {
            family: ModelFamily::Logistic,
            weights: vec![1.0, -1.0],
            intercept: 0.0,
        };
        assert_eq!(model.infer(&[2.0, 1.0]).unwrap(), Label::Benign);
        assert_eq!(model.infer(&[1.0, 2.0]).unwrap(), Label::Malignant);
    }

    #[test]
    fn test_lasso_thresholds_at_half() {
        let model = LinearModel {
            family: ModelFamily::Lasso,
            weights: vec![1.0],
            intercept: 0.0,
        };
        assert_eq!(model.infer(&[0.4]).unwrap(), Label::Malignant);
        assert_eq!(model.infer(&[0.6]).unwrap(), Label::Benign);
    }

    #[test]
    fn test_infer_rejects_wrong_feature_count() {
        let model = LinearModel {
            family: ModelFamily::Logistic,
            weights: vec![1.0, 1.0, 1.0],
            intercept: 0.0,
        };
        let err = model.infer(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            crate::utils::error::DemoError::PredictionError { .. }
        ));
    }

    #[test]
    fn test_remote_location_parse() {
        let loc = RemoteLocation::parse("s3://iyq5197-cloud/model_lasso.json").unwrap();
        assert_eq!(loc.scheme, "s3");
        assert_eq!(loc.bucket, "iyq5197-cloud");
        assert_eq!(loc.key, "model_lasso.json");

        let nested = RemoteLocation::parse("https://models.example.com/v1/model.json").unwrap();
        assert_eq!(nested.bucket, "models.example.com");
        assert_eq!(nested.key, "v1/model.json");

        let bare_key = RemoteLocation::parse("s3:///model_lasso.json").unwrap();
        assert_eq!(bare_key.bucket, "");
        assert_eq!(bare_key.key, "model_lasso.json");

        assert!(RemoteLocation::parse("no-scheme/model.json").is_err());
        assert!(RemoteLocation::parse("s3://bucket-only").is_err());
        assert!(RemoteLocation::parse("s3://bucket/").is_err());
    }
}

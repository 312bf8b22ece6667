//! On-disk model artifact: a versioned JSON envelope around one of the
//! supported classifier kinds.

use crate::adapters::forest::{DecisionTree, RandomForest};
use crate::adapters::logistic::LogisticRegression;
use crate::domain::model::FEATURE_COUNT;
use crate::domain::ports::Classifier;
use crate::utils::error::{HabitabilityError, Result};
use serde::{Deserialize, Serialize};

pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelSpec {
    RandomForest { trees: Vec<DecisionTree> },
    LogisticRegression(LogisticRegression),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub n_features: usize,
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub model: ModelSpec,
}

impl ModelArtifact {
    pub fn from_slice(path: &str, bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| {
            HabitabilityError::model_load(path, format!("artifact is not a valid model: {}", e))
        })
    }

    /// 檢查信封並建立分類器；任何不一致都視為模型損毀
    pub fn into_classifier(self, path: &str) -> Result<Box<dyn Classifier>> {
        if self.format_version != SUPPORTED_FORMAT_VERSION {
            return Err(HabitabilityError::model_load(
                path,
                format!(
                    "unsupported format_version {} (expected {})",
                    self.format_version, SUPPORTED_FORMAT_VERSION
                ),
            ));
        }
        if self.n_features != FEATURE_COUNT {
            return Err(HabitabilityError::model_load(
                path,
                format!(
                    "model expects {} features, this tool provides {}",
                    self.n_features, FEATURE_COUNT
                ),
            ));
        }
        if !self.feature_names.is_empty() && self.feature_names.len() != self.n_features {
            return Err(HabitabilityError::model_load(
                path,
                "feature_names does not match n_features",
            ));
        }

        let classifier: Box<dyn Classifier> = match self.model {
            ModelSpec::RandomForest { trees } => Box::new(
                RandomForest::new(trees, self.n_features)
                    .map_err(|reason| HabitabilityError::model_load(path, reason))?,
            ),
            ModelSpec::LogisticRegression(model) => {
                model
                    .validate(self.n_features)
                    .map_err(|reason| HabitabilityError::model_load(path, reason))?;
                Box::new(model)
            }
        };

        Ok(classifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOREST: &str = r#"{
        "format_version": 1,
        "n_features": 4,
        "feature_names": ["P_RADIUS", "P_PERIOD", "S_TEMPERATURE", "P_SEMI_MAJOR_AXIS_EST"],
        "model": {
            "type": "random_forest",
            "trees": [
                {"nodes": [
                    {"feature": 0, "threshold": 2.5, "left": 1, "right": 2},
                    {"value": [2.0, 8.0]},
                    {"value": [9.0, 1.0]}
                ]}
            ]
        }
    }"#;

    #[test]
    fn test_load_random_forest_artifact() {
        let artifact = ModelArtifact::from_slice("model.json", FOREST.as_bytes()).unwrap();
        let classifier = artifact.into_classifier("model.json").unwrap();

        assert_eq!(classifier.kind(), "random_forest");
        assert_eq!(classifier.n_features(), 4);
        let p = classifier.positive_probability(&[1.0, 365.0, 5500.0, 1.0]).unwrap();
        assert!((p - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_load_logistic_artifact() {
        let json = r#"{
            "format_version": 1,
            "n_features": 4,
            "model": {"type": "logistic_regression", "coefficients": [0.0, 0.0, 0.0, 0.0], "intercept": 0.0}
        }"#;
        let classifier = ModelArtifact::from_slice("m", json.as_bytes())
            .unwrap()
            .into_classifier("m")
            .unwrap();
        assert_eq!(classifier.kind(), "logistic_regression");
    }

    #[test]
    fn test_corrupt_bytes_are_load_errors() {
        let err = ModelArtifact::from_slice("model.json", b"\x80\x04pickle").unwrap_err();
        assert!(matches!(err, HabitabilityError::ModelLoadError { .. }));
    }

    #[test]
    fn test_wrong_feature_count_is_load_error() {
        let json = FOREST.replace("\"n_features\": 4", "\"n_features\": 5");
        let artifact = ModelArtifact::from_slice("m", json.as_bytes()).unwrap();
        assert!(matches!(
            artifact.into_classifier("m"),
            Err(HabitabilityError::ModelLoadError { .. })
        ));
    }

    #[test]
    fn test_unknown_version_is_load_error() {
        let json = FOREST.replace("\"format_version\": 1", "\"format_version\": 2");
        let artifact = ModelArtifact::from_slice("m", json.as_bytes()).unwrap();
        assert!(artifact.into_classifier("m").is_err());
    }
}

use crate::adapters::artifact::ModelArtifact;
use crate::core::{Classifier, Storage};
use crate::domain::model::{FeatureVector, PredictionResult};
use crate::utils::error::{HabitabilityError, Result};

/// Immutable wrapper around the trained classifier. Created once at startup
/// and shared by reference between actions.
pub struct ModelAdapter {
    classifier: Box<dyn Classifier>,
}

impl std::fmt::Debug for ModelAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelAdapter")
            .field("kind", &self.classifier.kind())
            .field("n_features", &self.classifier.n_features())
            .finish()
    }
}

impl ModelAdapter {
    pub fn new<C: Classifier + 'static>(classifier: C) -> Self {
        Self {
            classifier: Box::new(classifier),
        }
    }

    pub fn from_boxed(classifier: Box<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// 從存儲讀取模型檔；讀不到或格式錯誤都回傳 ModelLoadError
    pub async fn load<S: Storage>(storage: &S, path: &str) -> Result<Self> {
        tracing::info!("📦 Loading model artifact from: {}", path);

        let bytes = storage
            .read_file(path)
            .await
            .map_err(|e| HabitabilityError::model_load(path, e.to_string()))?;

        let adapter = Self::from_bytes(path, &bytes)?;
        tracing::info!(
            "✅ Loaded {} model ({} features)",
            adapter.kind(),
            adapter.n_features()
        );
        Ok(adapter)
    }

    pub fn from_bytes(path: &str, bytes: &[u8]) -> Result<Self> {
        let classifier = ModelArtifact::from_slice(path, bytes)?.into_classifier(path)?;
        Ok(Self::from_boxed(classifier))
    }

    pub fn kind(&self) -> &'static str {
        self.classifier.kind()
    }

    pub fn n_features(&self) -> usize {
        self.classifier.n_features()
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<PredictionResult> {
        let probability = self.predict_raw(&features.to_array())?;
        Ok(PredictionResult::from_probability(probability))
    }

    pub fn predict_batch(&self, features: &[FeatureVector]) -> Result<Vec<f64>> {
        let rows: Vec<Vec<f64>> = features.iter().map(|f| f.to_array().to_vec()).collect();
        self.predict_raw_batch(&rows)
    }

    pub fn predict_raw(&self, row: &[f64]) -> Result<f64> {
        self.check_row(0, row)?;
        let probability = self.classifier.positive_probability(row)?;
        check_probability(0, probability)?;
        Ok(probability)
    }

    /// 單次呼叫分類器完成整批評分
    pub fn predict_raw_batch(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        for (index, row) in rows.iter().enumerate() {
            self.check_row(index, row)?;
        }

        let probabilities = self.classifier.positive_probabilities(rows)?;
        if probabilities.len() != rows.len() {
            return Err(HabitabilityError::inference(format!(
                "classifier returned {} probabilities for {} rows",
                probabilities.len(),
                rows.len()
            )));
        }
        for (index, probability) in probabilities.iter().enumerate() {
            check_probability(index, *probability)?;
        }

        Ok(probabilities)
    }

    fn check_row(&self, index: usize, row: &[f64]) -> Result<()> {
        let expected = self.classifier.n_features();
        if row.len() != expected {
            return Err(HabitabilityError::inference(format!(
                "row {}: expected {} features, got {}",
                index,
                expected,
                row.len()
            )));
        }
        if let Some(position) = row.iter().position(|v| !v.is_finite()) {
            return Err(HabitabilityError::inference(format!(
                "row {}: feature {} is not a finite number",
                index, position
            )));
        }
        Ok(())
    }
}

fn check_probability(index: usize, probability: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(HabitabilityError::inference(format!(
            "row {}: classifier produced probability {} outside [0, 1]",
            index, probability
        )));
    }
    Ok(())
}

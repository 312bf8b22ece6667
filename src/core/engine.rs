use crate::adapters::catalog::parse_catalog;
use crate::adapters::export::encode_ranking;
use crate::core::explain::{explain, DISAGREEMENT_NOTE};
use crate::core::predictor::ModelAdapter;
use crate::core::ranker::rank_top;
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{Assessment, CatalogRow, FeatureVector, RankedPlanet};
use crate::utils::error::{HabitabilityError, Result};
use crate::utils::monitor::SystemMonitor;

/// Holds the loaded model for the lifetime of the process and runs the two
/// user actions against it.
pub struct HabitabilityApp<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    model: ModelAdapter,
    monitor: SystemMonitor,
}

impl<S: Storage, C: ConfigProvider> HabitabilityApp<S, C> {
    pub fn new(storage: S, config: C, model: ModelAdapter) -> Self {
        Self {
            storage,
            config,
            model,
            monitor: SystemMonitor::new(false),
        }
    }

    /// 啟動時載入模型；失敗代表程式無法繼續
    pub async fn start(storage: S, config: C, monitor_enabled: bool) -> Result<Self> {
        let monitor = SystemMonitor::new(monitor_enabled);
        let model = ModelAdapter::load(&storage, config.model_path()).await?;
        monitor.log_stats("Model load");

        Ok(Self {
            storage,
            config,
            model,
            monitor,
        })
    }

    pub fn model(&self) -> &ModelAdapter {
        &self.model
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Model probability and heuristic explanation, computed independently.
    pub fn assess(&self, features: FeatureVector) -> Result<Assessment> {
        let explanation = explain(&features);
        let prediction = self.model.predict(&features)?;
        let assessment = Assessment {
            features,
            prediction,
            explanation,
            note: DISAGREEMENT_NOTE,
        };

        tracing::debug!(
            "Assessed {:?}: probability {:.4}, {} rules satisfied",
            features,
            assessment.prediction.probability,
            assessment.satisfied_rules()
        );
        if assessment.heuristics_disagree() {
            tracing::debug!("Heuristics and model verdict disagree");
        }
        Ok(assessment)
    }

    /// 目錄在每次排名時才讀取
    pub async fn load_catalog(&self) -> Result<Vec<CatalogRow>> {
        let path = self.config.catalog_path();
        tracing::info!("📂 Loading catalog from: {}", path);

        let bytes = self
            .storage
            .read_file(path)
            .await
            .map_err(|e| HabitabilityError::catalog_load(path, e.to_string()))?;
        let rows = parse_catalog(path, &bytes, self.config.columns())?;

        self.monitor.log_stats("Catalog load");
        tracing::info!("Loaded {} catalog rows", rows.len());
        Ok(rows)
    }

    pub async fn top_habitable(&self, n: Option<usize>) -> Result<Vec<RankedPlanet>> {
        let n = n.unwrap_or_else(|| self.config.top_n());
        let catalog = self.load_catalog().await?;

        let ranked = rank_top(n, &catalog, &self.model)?;
        self.monitor.log_stats("Scoring");
        tracing::info!("🌟 Ranked top {} planets", ranked.len());
        Ok(ranked)
    }

    /// Writes the ranking as CSV, or as a zip holding `ranked.csv` when the
    /// target ends in `.zip`. Returns the path written.
    pub async fn export_ranking(&self, ranked: &[RankedPlanet], path: &str) -> Result<String> {
        let data = encode_ranking(ranked, path)?;
        tracing::debug!("Writing ranking ({} bytes) to storage", data.len());
        self.storage.write_file(path, &data).await?;
        tracing::info!("📁 Ranking saved to: {}", path);
        Ok(path.to_string())
    }

    pub fn finish(&self) {
        self.monitor.log_final_stats();
    }
}

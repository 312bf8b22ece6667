use crate::core::predictor::ModelAdapter;
use crate::domain::model::{CatalogRow, RankedPlanet};
use crate::utils::error::Result;

pub const DEFAULT_TOP_N: usize = 10;

/// Scores every complete row in one batch and keeps the `n` most likely
/// habitable planets. Ties keep catalog order.
pub fn rank_top(n: usize, catalog: &[CatalogRow], model: &ModelAdapter) -> Result<Vec<RankedPlanet>> {
    let complete: Vec<(String, _)> = catalog
        .iter()
        .filter_map(|row| Some((row.name.clone()?, row.features()?)))
        .collect();

    let dropped = catalog.len() - complete.len();
    if dropped > 0 {
        tracing::debug!("Dropped {} catalog rows with missing fields", dropped);
    }
    if complete.is_empty() || n == 0 {
        return Ok(Vec::new());
    }

    let features: Vec<_> = complete.iter().map(|(_, f)| *f).collect();
    let probabilities = model.predict_batch(&features)?;

    let mut ranked: Vec<RankedPlanet> = complete
        .into_iter()
        .zip(probabilities)
        .map(|((name, features), probability)| RankedPlanet {
            name,
            features,
            probability,
        })
        .collect();

    // sort_by 為穩定排序，同分時保留原始順序
    ranked.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    ranked.truncate(n);

    tracing::debug!("Ranked {} of {} scored planets", ranked.len(), features.len());
    Ok(ranked)
}

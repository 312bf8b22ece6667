use crate::domain::model::CatalogColumns;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Any trained binary classifier that can report class probabilities.
///
/// Implementations receive rows that already have the expected arity and
/// finite values; the model adapter checks both before calling in.
pub trait Classifier: Send + Sync {
    fn n_features(&self) -> usize;

    /// Probability of the positive (habitable) class for a single row.
    fn positive_probability(&self, row: &[f64]) -> Result<f64>;

    fn positive_probabilities(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>> {
        rows.iter()
            .map(|row| self.positive_probability(row))
            .collect()
    }

    fn kind(&self) -> &'static str;
}

pub trait ConfigProvider: Send + Sync {
    fn model_path(&self) -> &str;
    fn catalog_path(&self) -> &str;
    fn top_n(&self) -> usize;
    fn columns(&self) -> &CatalogColumns;
    fn export_path(&self) -> Option<&str>;
}

pub mod engine;
pub mod explain;
pub mod predictor;
pub mod ranker;

pub use crate::domain::model::{
    Assessment, CatalogRow, Explanation, FeatureVector, PredictionResult, RankedPlanet,
};
pub use crate::domain::ports::{Classifier, ConfigProvider, Storage};
pub use crate::utils::error::Result;

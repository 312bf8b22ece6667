// Adapters layer: concrete implementations for external artifacts (model files, catalog files, exports).

pub mod artifact;
pub mod catalog;
pub mod export;
pub mod forest;
pub mod logistic;

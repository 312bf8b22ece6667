pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::cli::LocalStorage;
pub use crate::config::settings::AppSettings;
pub use crate::core::{engine::HabitabilityApp, predictor::ModelAdapter, ranker::rank_top};
pub use crate::utils::error::{HabitabilityError, Result};

use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::core::ranker::DEFAULT_TOP_N;
use crate::domain::model::CatalogColumns;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const DEFAULT_MODEL_PATH: &str = "models/habitability_model.json";
pub const DEFAULT_CATALOG_PATH: &str = "phl_exoplanet_catalog_2019.csv.zip";

/// Effective settings after applying flag > TOML > default precedence.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub model_path: String,
    pub catalog_path: String,
    pub top_n: usize,
    pub columns: CatalogColumns,
    pub export_path: Option<String>,
    pub monitor: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            top_n: DEFAULT_TOP_N,
            columns: CatalogColumns::default(),
            export_path: None,
            monitor: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub model_path: Option<String>,
    pub catalog_path: Option<String>,
    pub top_n: Option<usize>,
    pub export_path: Option<String>,
    pub monitor: bool,
}

impl AppSettings {
    pub fn resolve(file: Option<&TomlConfig>, overrides: SettingsOverrides) -> Self {
        let defaults = Self::default();
        let file_default = TomlConfig::default();
        let file = file.unwrap_or(&file_default);

        Self {
            model_path: overrides
                .model_path
                .or_else(|| file.model_path().map(str::to_string))
                .unwrap_or(defaults.model_path),
            catalog_path: overrides
                .catalog_path
                .or_else(|| file.catalog_path().map(str::to_string))
                .unwrap_or(defaults.catalog_path),
            top_n: overrides.top_n.or(file.top_n()).unwrap_or(defaults.top_n),
            columns: file.columns().cloned().unwrap_or(defaults.columns),
            export_path: overrides
                .export_path
                .or_else(|| file.export_path().map(str::to_string)),
            monitor: overrides.monitor || file.monitoring_enabled(),
        }
    }
}

impl ConfigProvider for AppSettings {
    fn model_path(&self) -> &str {
        &self.model_path
    }

    fn catalog_path(&self) -> &str {
        &self.catalog_path
    }

    fn top_n(&self) -> usize {
        self.top_n
    }

    fn columns(&self) -> &CatalogColumns {
        &self.columns
    }

    fn export_path(&self) -> Option<&str> {
        self.export_path.as_deref()
    }
}

impl Validate for AppSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("model", &self.model_path)?;
        validation::validate_path("catalog", &self.catalog_path)?;
        validation::validate_positive_number("top_n", self.top_n, 1)?;
        for column in self.columns.required() {
            validation::validate_non_empty_string("catalog.columns", column)?;
        }
        if let Some(path) = &self.export_path {
            validation::validate_path("export", path)?;
        }
        Ok(())
    }
}

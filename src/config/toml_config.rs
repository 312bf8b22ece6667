use crate::domain::model::CatalogColumns;
use crate::utils::error::{HabitabilityError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub model: Option<ModelConfig>,
    #[serde(default)]
    pub catalog: Option<CatalogConfig>,
    #[serde(default)]
    pub output: Option<OutputConfig>,
    #[serde(default)]
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<String>,
    pub top_n: Option<usize>,
    pub columns: Option<CatalogColumns>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub export_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| HabitabilityError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HabitabilityError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_DIR})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| HabitabilityError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn model_path(&self) -> Option<&str> {
        self.model.as_ref().map(|m| m.path.as_str())
    }

    pub fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_ref().and_then(|c| c.path.as_deref())
    }

    pub fn top_n(&self) -> Option<usize> {
        self.catalog.as_ref().and_then(|c| c.top_n)
    }

    pub fn columns(&self) -> Option<&CatalogColumns> {
        self.catalog.as_ref().and_then(|c| c.columns.as_ref())
    }

    pub fn export_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.export_path.as_deref())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.model_path() {
            crate::utils::validation::validate_path("model.path", path)?;
        }
        if let Some(path) = self.catalog_path() {
            crate::utils::validation::validate_path("catalog.path", path)?;
        }
        if let Some(top_n) = self.top_n() {
            crate::utils::validation::validate_positive_number("catalog.top_n", top_n, 1)?;
        }
        if let Some(columns) = self.columns() {
            for column in columns.required() {
                crate::utils::validation::validate_non_empty_string("catalog.columns", column)?;
            }
        }
        if let Some(path) = self.export_path() {
            crate::utils::validation::validate_path("output.export_path", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[model]
path = "models/habitability_model.json"

[catalog]
path = "data/phl_exoplanet_catalog_2019.csv.zip"
top_n = 5

[catalog.columns]
name = "planet"

[output]
export_path = "out/top.csv"

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.model_path(), Some("models/habitability_model.json"));
        assert_eq!(config.top_n(), Some(5));
        assert_eq!(config.export_path(), Some("out/top.csv"));
        assert!(config.monitoring_enabled());

        // 未指定的欄位使用預設名稱
        let columns = config.columns().unwrap();
        assert_eq!(columns.name, "planet");
        assert_eq!(columns.radius, "P_RADIUS");
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.model_path().is_none());
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EXO_TEST_CATALOG_DIR", "/srv/catalogs");

        let toml_content = r#"
[catalog]
path = "${EXO_TEST_CATALOG_DIR}/phl.csv.zip"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.catalog_path(), Some("/srv/catalogs/phl.csv.zip"));

        std::env::remove_var("EXO_TEST_CATALOG_DIR");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[catalog]
top_n = 0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[model\npath = 1").unwrap_err();
        assert!(matches!(err, HabitabilityError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[model]\npath = \"model.json\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.model_path(), Some("model.json"));
    }
}

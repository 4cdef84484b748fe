use crate::config::{DEFAULT_FEEDBACK_FILE, DEFAULT_SALES_FILE};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{EngineError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
    pub sales_file: Option<String>,
    pub feedback_file: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| EngineError::ConfigError {
                message: format!("cannot read {}: {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| EngineError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expand `${VAR_NAME}` placeholders from the environment; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl ConfigProvider for TomlConfig {
    fn data_dir(&self) -> &str {
        &self.storage.data_dir
    }

    fn sales_table(&self) -> &str {
        self.storage
            .sales_file
            .as_deref()
            .unwrap_or(DEFAULT_SALES_FILE)
    }

    fn feedback_table(&self) -> &str {
        self.storage
            .feedback_file
            .as_deref()
            .unwrap_or(DEFAULT_FEEDBACK_FILE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("storage.data_dir", &self.storage.data_dir)?;
        validate_non_empty_string("storage.sales_file", self.sales_table())?;
        validate_non_empty_string("storage.feedback_file", self.feedback_table())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("[storage]\ndata_dir = \"./data\"\n").unwrap();

        assert_eq!(config.data_dir(), "./data");
        assert_eq!(config.sales_table(), DEFAULT_SALES_FILE);
        assert_eq!(config.feedback_table(), DEFAULT_FEEDBACK_FILE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_file_names() {
        let config = TomlConfig::from_toml_str(
            "[storage]\ndata_dir = \"/var/lib/salesdesk\"\nsales_file = \"sales.csv\"\nfeedback_file = \"feedback.csv\"\n",
        )
        .unwrap();

        assert_eq!(config.sales_table(), "sales.csv");
        assert_eq!(config.feedback_table(), "feedback.csv");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        assert!(matches!(
            TomlConfig::from_toml_str("storage = ["),
            Err(EngineError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SALESDESK_TEST_DIR", "/tmp/desk");
        let config =
            TomlConfig::from_toml_str("[storage]\ndata_dir = \"${SALESDESK_TEST_DIR}\"\n").unwrap();
        assert_eq!(config.data_dir(), "/tmp/desk");
    }

    #[test]
    fn test_unknown_env_var_left_in_place() {
        let config = TomlConfig::from_toml_str(
            "[storage]\ndata_dir = \"${SALESDESK_NO_SUCH_VAR}\"\n",
        )
        .unwrap();
        assert_eq!(config.data_dir(), "${SALESDESK_NO_SUCH_VAR}");
    }
}

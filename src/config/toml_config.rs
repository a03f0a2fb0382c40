use crate::utils::error::{ImpactError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "impactify.toml";
pub const DEFAULT_ACRONYMS_PATH: &str = "assets/acronyms.json";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub acronyms: AcronymsConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AcronymsConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    pub max_attempts: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ImpactError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ImpactError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// An explicit path must exist. Without one, `impactify.toml` in the
    /// working directory is used when present, otherwise built-in defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                Self::from_file(path).map_err(|e| ImpactError::ConfigError {
                    message: format!("cannot load '{}': {}", path, e),
                })
            }
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                tracing::debug!("Loading configuration from {}", DEFAULT_CONFIG_FILE);
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    // ${VAR_NAME} is replaced from the environment; unknown names are kept.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(path) = &cli.acronyms {
            tracing::debug!("Acronyms path overridden to: {}", path);
            self.acronyms.path = Some(path.clone());
        }
        if let Some(dir) = &cli.output_dir {
            tracing::debug!("Output directory overridden to: {}", dir);
            self.export.output_dir = Some(dir.clone());
        }
        if let Some(attempts) = cli.max_attempts {
            self.prompt.max_attempts = Some(attempts);
        }
    }

    pub fn acronyms_path(&self) -> &str {
        self.acronyms.path.as_deref().unwrap_or(DEFAULT_ACRONYMS_PATH)
    }

    pub fn output_dir(&self) -> &str {
        self.export.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR)
    }

    pub fn max_attempts(&self) -> usize {
        self.prompt.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_path("acronyms.path", self.acronyms_path())?;
        crate::utils::validation::validate_path("export.output_dir", self.output_dir())?;
        crate::utils::validation::validate_positive_number(
            "prompt.max_attempts",
            self.max_attempts(),
            1,
        )?;
        Ok(())
    }
}

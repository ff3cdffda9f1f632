use crate::core::{ConfigProvider, SortMode, SourceSpec};
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const SOURCE_TYPES: [&str; 2] = ["http", "file"];

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    pub report: Option<ReportConfig>,
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub r#type: String,
    pub clients: String,
    pub executor: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReportError::ConfigParse {
            message: e.to_string(),
        })
    }

    /// Replace `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReportError::ConfigParse {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Sort key from `[report]`, if one was given.
    pub fn configured_sort(&self) -> Result<Option<SortMode>> {
        self.report
            .as_ref()
            .and_then(|r| r.sort.as_deref())
            .map(str::parse::<SortMode>)
            .transpose()
    }
}

impl ConfigProvider for TomlConfig {
    fn sort_mode(&self) -> Result<SortMode> {
        Ok(self.configured_sort()?.unwrap_or_default())
    }

    fn source(&self) -> SourceSpec {
        if self.source.r#type.eq_ignore_ascii_case("file") {
            SourceSpec::File {
                clients_path: PathBuf::from(&self.source.clients),
                executor_path: PathBuf::from(&self.source.executor),
            }
        } else {
            SourceSpec::Http {
                clients_url: self.source.clients.clone(),
                executor_url: self.source.executor.clone(),
            }
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.configured_sort()?;

        let source_type = self.source.r#type.to_ascii_lowercase();
        validation::validate_non_empty_string("source.type", &source_type)?;
        if !SOURCE_TYPES.contains(&source_type.as_str()) {
            return Err(ReportError::InvalidConfigValue {
                field: "source.type".to_string(),
                value: self.source.r#type.clone(),
                reason: format!("Unsupported source. Valid types: {}", SOURCE_TYPES.join(", ")),
            });
        }

        if source_type == "file" {
            validation::validate_path("source.clients", Path::new(&self.source.clients))?;
            validation::validate_path("source.executor", Path::new(&self.source.executor))?;
        } else {
            validation::validate_url("source.clients", &self.source.clients)?;
            validation::validate_url("source.executor", &self.source.executor)?;
        }

        Ok(())
    }
}

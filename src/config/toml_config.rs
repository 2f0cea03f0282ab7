use crate::config::{DEFAULT_ENDPOINT, DEFAULT_LOCATION, DEFAULT_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub list: Option<ListConfig>,
    pub output: Option<OutputConfig>,
    pub diagnostics: Option<DiagnosticsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: Option<String>,
    pub endpoint: Option<String>,
    pub base_dir: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    pub location: Option<String>,
    pub child_property: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    pub trace_scan: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CMS_PASSWORD})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 來源類型，`http` 或 `file`
    pub fn source_type(&self) -> &str {
        self.source.r#type.as_deref().unwrap_or("http")
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        match self.source_type() {
            "http" => {
                let endpoint = self.source.endpoint.as_deref().ok_or_else(|| {
                    DirectoryError::MissingConfigError {
                        field: "source.endpoint".to_string(),
                    }
                })?;
                validation::validate_url("source.endpoint", endpoint)?;
            }
            "file" => {
                let base_dir = self.source.base_dir.as_deref().ok_or_else(|| {
                    DirectoryError::MissingConfigError {
                        field: "source.base_dir".to_string(),
                    }
                })?;
                validation::validate_non_empty_string("source.base_dir", base_dir)?;
            }
            other => {
                return Err(DirectoryError::InvalidConfigValueError {
                    field: "source.type".to_string(),
                    value: other.to_string(),
                    reason: "Supported source types: http, file".to_string(),
                });
            }
        }

        validation::validate_location("list.location", self.location())?;
        validation::validate_non_empty_string("list.child_property", self.list_property())?;
        validation::validate_positive_number(
            "source.timeout_seconds",
            self.timeout_seconds(),
            1,
        )?;

        if let Some(locale) = self.locale() {
            validation::validate_locale_tag("output.locale", locale)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        self.source.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn source_dir(&self) -> Option<&str> {
        if self.source_type() == "file" {
            self.source.base_dir.as_deref()
        } else {
            None
        }
    }

    fn location(&self) -> &str {
        self.list
            .as_ref()
            .and_then(|l| l.location.as_deref())
            .unwrap_or(DEFAULT_LOCATION)
    }

    fn list_property(&self) -> &str {
        self.list
            .as_ref()
            .and_then(|l| l.child_property.as_deref())
            .unwrap_or(crate::adapters::DEFAULT_LIST_PROPERTY)
    }

    fn locale(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.locale.as_deref())
    }

    fn timeout_seconds(&self) -> u64 {
        self.source
            .timeout_seconds
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn trace_scan(&self) -> bool {
        self.diagnostics
            .as_ref()
            .and_then(|d| d.trace_scan)
            .unwrap_or(false)
    }

    fn headers(&self) -> Option<&HashMap<String, String>> {
        self.source.headers.as_ref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

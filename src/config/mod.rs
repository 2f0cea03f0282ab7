pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:4502";

/// Fixed repository location of the department list.
pub const DEFAULT_LOCATION: &str = "/etc/acs-commons/lists/departments";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dept-lookup")]
#[command(about = "Department directory lookup against a CMS content repository")]
pub struct CliConfig {
    /// Load connection settings from a TOML file instead of flags
    #[arg(long)]
    pub config: Option<String>,

    /// CMS base URL serving JSON renditions
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Read JSON exports from this directory instead of HTTP
    #[arg(long)]
    pub source_dir: Option<String>,

    /// Repository location of the department list
    #[arg(long, default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Property holding the child list in a node rendition
    #[arg(long, default_value = crate::adapters::DEFAULT_LIST_PROPERTY)]
    pub list_property: String,

    /// Department key to look up; omit to list all departments
    #[arg(long)]
    pub key: Option<String>,

    /// Locale tag for title resolution, e.g. de or de-CH
    #[arg(long)]
    pub locale: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// Emit results as JSON
    #[arg(long)]
    pub json: bool,

    /// Trace each candidate key scanned during lookup
    #[arg(long)]
    pub trace_scan: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn source_dir(&self) -> Option<&str> {
        self.source_dir.as_deref()
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn list_property(&self) -> &str {
        &self.list_property
    }

    fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn trace_scan(&self) -> bool {
        self.trace_scan
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.source_dir {
            validation::validate_non_empty_string("source_dir", dir)?;
        } else {
            validation::validate_url("endpoint", &self.endpoint)?;
        }

        validation::validate_location("location", &self.location)?;
        validation::validate_non_empty_string("list_property", &self.list_property)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;

        if let Some(locale) = &self.locale {
            validation::validate_locale_tag("locale", locale)?;
        }

        Ok(())
    }
}

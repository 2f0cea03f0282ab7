pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{file::FileDirectorySource, http::HttpDirectorySource};
pub use config::toml_config::TomlConfig;
pub use crate::core::directory::DepartmentDirectory;
pub use domain::locale::Locale;
pub use domain::model::{Department, RawEntry};
pub use domain::ports::{ConfigProvider, DirectorySource};
pub use utils::error::{DirectoryError, Result};

use crate::adapters::{children_from_json, DEFAULT_LIST_PROPERTY};
use crate::domain::model::RawEntry;
use crate::domain::ports::DirectorySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Directory source backed by JSON exports on disk.
///
/// A location `/etc/acs-commons/lists/departments` resolves to
/// `{base_dir}/etc/acs-commons/lists/departments.json`. A missing export is
/// a missing location and maps to an empty list.
#[derive(Debug, Clone)]
pub struct FileDirectorySource {
    base_dir: PathBuf,
    list_property: String,
}

impl FileDirectorySource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            list_property: DEFAULT_LIST_PROPERTY.to_string(),
        }
    }

    pub fn with_list_property(mut self, list_property: impl Into<String>) -> Self {
        self.list_property = list_property.into();
        self
    }

    fn export_path(&self, location: &str) -> PathBuf {
        // append, never with_extension: a dotted final segment such as
        // `dept.v2` must resolve to `dept.v2.json`, not `dept.json`
        self.base_dir
            .join(format!("{}.json", location.trim_start_matches('/')))
    }
}

#[async_trait]
impl DirectorySource for FileDirectorySource {
    async fn fetch_children(&self, location: &str) -> Result<Vec<RawEntry>> {
        let path = self.export_path(location);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no export at {}, treating as empty", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let body: serde_json::Value = serde_json::from_str(&content)?;
        Ok(children_from_json(&body, &self.list_property))
    }
}

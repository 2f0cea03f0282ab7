use crate::domain::model::RawEntry;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Read-only access to the backing content store.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Fetches the raw child records stored at `location`, in the order the
    /// store yields them.
    ///
    /// A missing location (or one without a child list) yields an empty
    /// vec, never an error. Only faults of the store connection itself
    /// surface as `Err`.
    async fn fetch_children(&self, location: &str) -> Result<Vec<RawEntry>>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn source_dir(&self) -> Option<&str>;
    fn location(&self) -> &str;
    fn list_property(&self) -> &str;
    fn locale(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
    fn trace_scan(&self) -> bool;

    fn headers(&self) -> Option<&HashMap<String, String>> {
        None
    }
}

use crate::core::{Department, DirectorySource, Result};

/// Accessor for a department list stored at one repository location.
///
/// Every query re-reads the backing store; nothing is cached between calls.
pub struct DepartmentDirectory<S: DirectorySource> {
    source: S,
    trace_scan: bool,
}

impl<S: DirectorySource> DepartmentDirectory<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            trace_scan: false,
        }
    }

    /// Enables debug tracing of each candidate key scanned by
    /// `find_by_key`. Diagnostic only, no effect on results.
    pub fn with_scan_trace(mut self, enabled: bool) -> Self {
        self.trace_scan = enabled;
        self
    }

    /// Returns the first department whose key equals `key`, scanning the
    /// children of `location` in store order.
    ///
    /// A missing location or an unmatched key yields `Ok(None)`.
    pub async fn find_by_key(&self, location: &str, key: &str) -> Result<Option<Department>> {
        let children = self.source.fetch_children(location).await?;

        for raw in &children {
            let department = Department::from_raw(raw);
            if self.trace_scan {
                tracing::debug!("department candidate: {}", department.key);
            }
            if department.key == key {
                return Ok(Some(department));
            }
        }

        Ok(None)
    }

    /// Returns all departments at `location` in store order. A missing
    /// location yields an empty vec.
    pub async fn list_all(&self, location: &str) -> Result<Vec<Department>> {
        let children = self.source.fetch_children(location).await?;
        Ok(children.iter().map(Department::from_raw).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawEntry;
    use crate::utils::error::DirectoryError;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct MockSource {
        lists: HashMap<String, Vec<RawEntry>>,
    }

    impl MockSource {
        fn new() -> Self {
            Self {
                lists: HashMap::new(),
            }
        }

        fn with_list(mut self, location: &str, entries: Vec<RawEntry>) -> Self {
            self.lists.insert(location.to_string(), entries);
            self
        }
    }

    #[async_trait]
    impl DirectorySource for MockSource {
        async fn fetch_children(&self, location: &str) -> Result<Vec<RawEntry>> {
            Ok(self.lists.get(location).cloned().unwrap_or_default())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl DirectorySource for FailingSource {
        async fn fetch_children(&self, _location: &str) -> Result<Vec<RawEntry>> {
            Err(DirectoryError::IoError(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "store connection lost",
            )))
        }
    }

    fn entry(pairs: &[(&str, &str)]) -> RawEntry {
        let mut properties = HashMap::new();
        for (name, value) in pairs {
            properties.insert(name.to_string(), serde_json::json!(value));
        }
        RawEntry::new(properties)
    }

    fn departments_source() -> MockSource {
        MockSource::new().with_list(
            "/etc/acs-commons/lists/departments",
            vec![
                entry(&[("value", "eng"), ("title", "Engineering")]),
                entry(&[("value", "hr"), ("title", "HR")]),
            ],
        )
    }

    #[tokio::test]
    async fn test_find_by_key_returns_matching_entry() {
        let directory = DepartmentDirectory::new(departments_source());

        let found = directory
            .find_by_key("/etc/acs-commons/lists/departments", "hr")
            .await
            .unwrap();

        let department = found.expect("hr should be found");
        assert_eq!(department.key, "hr");
        assert_eq!(department.title, "HR");
    }

    #[tokio::test]
    async fn test_find_by_key_unmatched_returns_none() {
        let directory = DepartmentDirectory::new(departments_source());

        let found = directory
            .find_by_key("/etc/acs-commons/lists/departments", "ops")
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_key_missing_location_returns_none() {
        let directory = DepartmentDirectory::new(MockSource::new());

        let found = directory
            .find_by_key("/etc/acs-commons/lists/unknown", "hr")
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_key_duplicate_keys_first_wins() {
        let source = MockSource::new().with_list(
            "/lists/departments",
            vec![
                entry(&[("value", "dup"), ("title", "First")]),
                entry(&[("value", "dup"), ("title", "Second")]),
            ],
        );
        let directory = DepartmentDirectory::new(source);

        let found = directory
            .find_by_key("/lists/departments", "dup")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.title, "First");
    }

    #[tokio::test]
    async fn test_find_by_key_skips_malformed_entries() {
        let source = MockSource::new().with_list(
            "/lists/departments",
            vec![
                entry(&[("unrelated", "junk")]),
                entry(&[("value", "hr"), ("title", "HR")]),
            ],
        );
        let directory = DepartmentDirectory::new(source).with_scan_trace(true);

        let found = directory
            .find_by_key("/lists/departments", "hr")
            .await
            .unwrap();

        assert_eq!(found.unwrap().title, "HR");
    }

    #[tokio::test]
    async fn test_list_all_preserves_store_order() {
        let directory = DepartmentDirectory::new(departments_source());

        let departments = directory
            .list_all("/etc/acs-commons/lists/departments")
            .await
            .unwrap();

        assert_eq!(departments.len(), 2);
        assert_eq!(departments[0].key, "eng");
        assert_eq!(departments[1].key, "hr");
    }

    #[tokio::test]
    async fn test_list_all_missing_location_is_empty() {
        let directory = DepartmentDirectory::new(MockSource::new());

        let departments = directory.list_all("/lists/unknown").await.unwrap();

        assert!(departments.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_counts_incomplete_entries() {
        let source = MockSource::new().with_list(
            "/lists/departments",
            vec![
                entry(&[("value", "eng")]),
                entry(&[("title", "No key")]),
                entry(&[]),
            ],
        );
        let directory = DepartmentDirectory::new(source);

        let departments = directory.list_all("/lists/departments").await.unwrap();

        assert_eq!(departments.len(), 3);
        assert_eq!(departments[1].key, "");
        assert_eq!(departments[1].title, "No key");
    }

    #[tokio::test]
    async fn test_store_fault_propagates() {
        let directory = DepartmentDirectory::new(FailingSource);

        let result = directory.list_all("/lists/departments").await;

        assert!(result.is_err());
    }
}

use crate::adapters::{children_from_json, DEFAULT_LIST_PROPERTY};
use crate::domain::model::RawEntry;
use crate::domain::ports::{ConfigProvider, DirectorySource};
use crate::utils::error::{DirectoryError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Directory source backed by the CMS's JSON rendition of repository nodes.
///
/// `fetch_children` requests `{endpoint}{location}.json`. A 404 means the
/// location does not exist and maps to an empty list; other failures are
/// store faults and propagate.
pub struct HttpDirectorySource {
    client: Client,
    endpoint: String,
    list_property: String,
}

impl HttpDirectorySource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            list_property: DEFAULT_LIST_PROPERTY.to_string(),
        }
    }

    pub fn with_list_property(mut self, list_property: impl Into<String>) -> Self {
        self.list_property = list_property.into();
        self
    }

    /// Builds a source from configuration: endpoint, request timeout and
    /// extra request headers (typically the CMS login).
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(configured) = config.headers() {
            for (name, value) in configured {
                let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                    DirectoryError::ConfigError {
                        message: format!("invalid header name `{}`: {}", name, e),
                    }
                })?;
                let value =
                    HeaderValue::from_str(value).map_err(|e| DirectoryError::ConfigError {
                        message: format!("invalid header value for `{}`: {}", name, e),
                    })?;
                headers.insert(name, value);
            }
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint().to_string(),
            list_property: config.list_property().to_string(),
        })
    }

    fn rendition_url(&self, location: &str) -> String {
        format!("{}{}.json", self.endpoint.trim_end_matches('/'), location)
    }
}

#[async_trait]
impl DirectorySource for HttpDirectorySource {
    async fn fetch_children(&self, location: &str) -> Result<Vec<RawEntry>> {
        let url = self.rendition_url(location);
        tracing::debug!("fetching department list from: {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("no list at {}, treating as empty", url);
            return Ok(Vec::new());
        }

        let body: serde_json::Value = response.error_for_status()?.json().await?;
        Ok(children_from_json(&body, &self.list_property))
    }
}

//! PostgREST-style HTTP backend for the remote content store.
//!
//! Loads filter on `page_slug` and `is_active`; writes POST with
//! `Prefer: resolution=merge-duplicates` against the
//! `(page_slug, component_type)` conflict key, which gives the
//! last-write-wins upsert the editor relies on.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::component::ComponentRow;
use crate::error::StoreError;
use crate::gateway::ComponentStore;

const TABLE: &str = "root_page_components";

/// Connection settings for the remote store.
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Base URL up to and including `/rest/v1`.
    pub base_url: String,
    pub api_key: String,
}

pub struct RestStore {
    client: reqwest::Client,
    config: RestConfig,
}

impl RestStore {
    pub fn new(config: RestConfig) -> Result<Self, StoreError> {
        let invalid_key =
            |_| StoreError::Config("api key contains invalid header characters".to_string());

        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(&config.api_key).map_err(invalid_key)?;
        key.set_sensitive(true);
        headers.insert("apikey", key);
        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {}", config.api_key)).map_err(invalid_key)?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self { client, config })
    }

    fn table_url(&self) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), TABLE)
    }
}

#[async_trait]
impl ComponentStore for RestStore {
    async fn fetch_components(&self, page_slug: &str) -> Result<Vec<ComponentRow>, StoreError> {
        let slug_filter = format!("eq.{page_slug}");
        let response = self
            .client
            .get(self.table_url())
            .query(&[
                ("select", "page_slug,component_type,content,is_active,updated_at,updated_by"),
                ("page_slug", slug_filter.as_str()),
                ("is_active", "eq.true"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json().await?)
    }

    async fn upsert_component(&self, row: ComponentRow) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.table_url())
            .query(&[("on_conflict", "page_slug,component_type")])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&row)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_url_joins_base_and_table() {
        let store = RestStore::new(RestConfig {
            base_url: "https://example.test/rest/v1/".to_string(),
            api_key: "anon-key".to_string(),
        })
        .unwrap();
        assert_eq!(store.table_url(), "https://example.test/rest/v1/root_page_components");
    }
}

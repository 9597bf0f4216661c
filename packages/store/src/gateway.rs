//! # Component Gateway
//!
//! The stateless request/response boundary between the editor session and
//! the remote store. Loads return a [`ComponentMap`] and never fail (errors
//! are logged and swallowed; callers fall back to built-in defaults). Saves
//! resolve the acting identity first, stamp audit columns, then upsert.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::component::{ComponentRow, ComponentType};
use crate::error::StoreError;

/// Identity of the acting user, as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

/// Backend access to the `root_page_components` table.
#[async_trait]
pub trait ComponentStore: Send + Sync {
    /// All active rows for a page, in no particular order.
    async fn fetch_components(&self, page_slug: &str) -> Result<Vec<ComponentRow>, StoreError>;

    /// Insert-or-replace keyed on `(page_slug, component_type)`.
    async fn upsert_component(&self, row: ComponentRow) -> Result<(), StoreError>;
}

/// The session/auth collaborator. Identity lookup is asynchronous and may
/// legitimately yield no user.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn current_user(&self) -> Result<Option<UserId>, StoreError>;
    fn is_admin(&self) -> bool;
}

/// Loaded components for one page, keyed by component type.
#[derive(Debug, Default)]
pub struct ComponentMap {
    entries: HashMap<ComponentType, serde_json::Value>,
}

impl ComponentMap {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, component_type: ComponentType) -> Option<&serde_json::Value> {
        self.entries.get(&component_type)
    }

    /// Decode a component payload. A malformed payload is treated the same
    /// as an absent one (logged), so callers always get their defaults.
    pub fn get_as<T: DeserializeOwned>(&self, component_type: ComponentType) -> Option<T> {
        let value = self.entries.get(&component_type)?;
        match serde_json::from_value(value.clone()) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                tracing::warn!(
                    component_type = component_type.as_str(),
                    %err,
                    "malformed component payload, falling back to defaults"
                );
                None
            }
        }
    }
}

/// Stateless gateway over a store backend and an auth provider.
#[derive(Clone)]
pub struct ComponentGateway {
    store: Arc<dyn ComponentStore>,
    auth: Arc<dyn AuthProvider>,
}

impl ComponentGateway {
    pub fn new(store: Arc<dyn ComponentStore>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { store, auth }
    }

    pub fn is_admin(&self) -> bool {
        self.auth.is_admin()
    }

    /// One active-rows query for the page. Failures are swallowed: the
    /// caller gets an empty map and hydrates from built-in defaults.
    pub async fn load_components(&self, page_slug: &str) -> ComponentMap {
        let rows = match self.store.fetch_components(page_slug).await {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(page_slug, %err, "component load failed, using defaults");
                return ComponentMap::default();
            }
        };

        let mut map = ComponentMap::default();
        for row in rows {
            if row.is_active {
                map.entries.insert(row.component_type, row.content);
            }
        }
        map
    }

    /// Upsert one component, stamped with the acting user's identity.
    ///
    /// The identity is looked up fresh at save time; if none is available
    /// the save fails before any upsert is attempted.
    pub async fn save_component(
        &self,
        page_slug: &str,
        component_type: ComponentType,
        content: serde_json::Value,
    ) -> Result<(), StoreError> {
        let user = self
            .auth
            .current_user()
            .await?
            .ok_or(StoreError::NoAuthenticatedUser)?;

        self.upsert(page_slug, component_type, content, Some(user.0)).await
    }

    /// Upsert one component without an `updated_by` stamp. The slider,
    /// hero-slider, and section-order save paths write anonymously.
    pub async fn save_component_anonymous(
        &self,
        page_slug: &str,
        component_type: ComponentType,
        content: serde_json::Value,
    ) -> Result<(), StoreError> {
        self.upsert(page_slug, component_type, content, None).await
    }

    async fn upsert(
        &self,
        page_slug: &str,
        component_type: ComponentType,
        content: serde_json::Value,
        updated_by: Option<String>,
    ) -> Result<(), StoreError> {
        let row = ComponentRow {
            page_slug: page_slug.to_string(),
            component_type,
            content,
            is_active: true,
            updated_at: Utc::now(),
            updated_by,
        };
        tracing::debug!(
            page_slug,
            component_type = component_type.as_str(),
            "upserting component"
        );
        self.store.upsert_component(row).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryStore, StaticAuth};

    fn gateway_with(auth: StaticAuth) -> (ComponentGateway, Arc<MemoryStore>) {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let store = Arc::new(MemoryStore::new());
        let gateway = ComponentGateway::new(store.clone(), Arc::new(auth));
        (gateway, store)
    }

    #[tokio::test]
    async fn load_on_empty_store_yields_empty_map() {
        let (gateway, _) = gateway_with(StaticAuth::admin("user-1"));
        let map = gateway.load_components("home").await;
        assert!(map.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips_content() {
        let (gateway, _) = gateway_with(StaticAuth::admin("user-1"));
        let content = serde_json::json!({ "pageTitle": "Home Page" });

        gateway
            .save_component("home", ComponentType::PageProperties, content.clone())
            .await
            .unwrap();

        let map = gateway.load_components("home").await;
        assert_eq!(map.get(ComponentType::PageProperties), Some(&content));
    }

    #[tokio::test]
    async fn save_without_identity_fails_before_upsert() {
        let (gateway, store) = gateway_with(StaticAuth::anonymous());
        let result = gateway
            .save_component("home", ComponentType::Sections, serde_json::json!([]))
            .await;

        assert!(matches!(result, Err(StoreError::NoAuthenticatedUser)));
        assert_eq!(store.row_count().await, 0);
    }

    #[tokio::test]
    async fn upsert_replaces_on_conflict_and_stamps_updated_by() {
        let (gateway, store) = gateway_with(StaticAuth::admin("editor-7"));

        gateway
            .save_component("home", ComponentType::Hero, serde_json::json!({"title": "v1"}))
            .await
            .unwrap();
        gateway
            .save_component("home", ComponentType::Hero, serde_json::json!({"title": "v2"}))
            .await
            .unwrap();

        assert_eq!(store.row_count().await, 1);
        let map = gateway.load_components("home").await;
        assert_eq!(map.get(ComponentType::Hero).unwrap()["title"], "v2");

        let row = store.get_row("home", ComponentType::Hero).await.unwrap();
        assert_eq!(row.updated_by.as_deref(), Some("editor-7"));
    }

    #[tokio::test]
    async fn anonymous_save_leaves_updated_by_unset() {
        let (gateway, store) = gateway_with(StaticAuth::anonymous());
        gateway
            .save_component_anonymous("home", ComponentType::Slider, serde_json::json!({}))
            .await
            .unwrap();

        let row = store.get_row("home", ComponentType::Slider).await.unwrap();
        assert_eq!(row.updated_by, None);
    }

    #[tokio::test]
    async fn inactive_rows_are_filtered_on_load() {
        let (gateway, store) = gateway_with(StaticAuth::admin("user-1"));
        gateway
            .save_component("home", ComponentType::Sections, serde_json::json!([]))
            .await
            .unwrap();
        store.deactivate("home", ComponentType::Sections).await;

        let map = gateway.load_components("home").await;
        assert!(map.get(ComponentType::Sections).is_none());
    }

    #[tokio::test]
    async fn malformed_payload_decodes_as_absent() {
        let (gateway, _) = gateway_with(StaticAuth::admin("user-1"));
        gateway
            .save_component(
                "home",
                ComponentType::PageProperties,
                serde_json::json!("not an object"),
            )
            .await
            .unwrap();

        let map = gateway.load_components("home").await;
        let decoded: Option<pageforge_sections::PageProperties> =
            map.get_as(ComponentType::PageProperties);
        assert!(decoded.is_none());
    }
}

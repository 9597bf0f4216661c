//! In-memory store backend and a fixed-identity auth provider.
//!
//! Used by tests throughout the workspace and usable as an embedded
//! backend when no remote store is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::component::{ComponentRow, ComponentType};
use crate::error::StoreError;
use crate::gateway::{AuthProvider, ComponentStore, UserId};

/// A `root_page_components` table held in memory, keyed on the same
/// `(page_slug, component_type)` conflict key the remote store uses.
#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<HashMap<(String, ComponentType), ComponentRow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn get_row(&self, page_slug: &str, component_type: ComponentType) -> Option<ComponentRow> {
        self.rows
            .read()
            .await
            .get(&(page_slug.to_string(), component_type))
            .cloned()
    }

    /// Soft-delete a row, mirroring the remote store's `is_active` flag.
    pub async fn deactivate(&self, page_slug: &str, component_type: ComponentType) {
        if let Some(row) = self
            .rows
            .write()
            .await
            .get_mut(&(page_slug.to_string(), component_type))
        {
            row.is_active = false;
        }
    }
}

#[async_trait]
impl ComponentStore for MemoryStore {
    async fn fetch_components(&self, page_slug: &str) -> Result<Vec<ComponentRow>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|row| row.page_slug == page_slug && row.is_active)
            .cloned()
            .collect())
    }

    async fn upsert_component(&self, row: ComponentRow) -> Result<(), StoreError> {
        let key = (row.page_slug.clone(), row.component_type);
        self.rows.write().await.insert(key, row);
        Ok(())
    }
}

/// Auth provider with a fixed identity, for tests and embedding.
pub struct StaticAuth {
    user: Option<UserId>,
    admin: bool,
}

impl StaticAuth {
    pub fn admin(user_id: &str) -> Self {
        Self {
            user: Some(UserId(user_id.to_string())),
            admin: true,
        }
    }

    pub fn anonymous() -> Self {
        Self { user: None, admin: false }
    }
}

#[async_trait]
impl AuthProvider for StaticAuth {
    async fn current_user(&self) -> Result<Option<UserId>, StoreError> {
        Ok(self.user.clone())
    }

    fn is_admin(&self) -> bool {
        self.admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(slug: &str, component_type: ComponentType) -> ComponentRow {
        ComponentRow {
            page_slug: slug.to_string(),
            component_type,
            content: serde_json::json!({}),
            is_active: true,
            updated_at: Utc::now(),
            updated_by: None,
        }
    }

    #[tokio::test]
    async fn fetch_filters_by_slug() {
        let store = MemoryStore::new();
        store.upsert_component(row("home", ComponentType::Hero)).await.unwrap();
        store.upsert_component(row("about", ComponentType::Hero)).await.unwrap();

        let rows = store.fetch_components("home").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].page_slug, "home");
    }

    #[tokio::test]
    async fn upsert_is_keyed_on_slug_and_type() {
        let store = MemoryStore::new();
        store.upsert_component(row("home", ComponentType::Hero)).await.unwrap();
        store.upsert_component(row("home", ComponentType::Hero)).await.unwrap();
        store.upsert_component(row("home", ComponentType::Sections)).await.unwrap();
        assert_eq!(store.row_count().await, 2);
    }
}

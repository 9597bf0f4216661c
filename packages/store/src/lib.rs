//! # Pageforge Store
//!
//! The persistence boundary of the page editor.
//!
//! Pages are persisted as named **components** in one logical table,
//! `root_page_components`, keyed by `(page_slug, component_type)` with
//! last-write-wins upsert semantics. The gateway is stateless: it holds no
//! page data of its own, only a store backend and an auth provider.
//!
//! ```text
//! editor session ──▶ ComponentGateway ──▶ dyn ComponentStore
//!                          │                ├── MemoryStore (tests, embedding)
//!                          │                └── RestStore   (PostgREST-style remote)
//!                          └──────────────▶ dyn AuthProvider
//! ```
//!
//! Error policy follows the editor's contract: loads swallow failures
//! (callers fall back to defaults), saves surface them so the caller can
//! re-arm its dirty flag and retry.

mod component;
mod error;
mod gateway;
mod memory;
mod rest;

pub use component::{
    ComponentRow, ComponentType, HeroSliderComponent, SectionOrderEntry, SliderComponent,
};
pub use error::StoreError;
pub use gateway::{AuthProvider, ComponentGateway, ComponentMap, ComponentStore, UserId};
pub use memory::{MemoryStore, StaticAuth};
pub use rest::{RestConfig, RestStore};

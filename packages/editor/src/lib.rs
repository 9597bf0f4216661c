//! # Pageforge Editor
//!
//! The live-editing core of the page editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ sections: data model + registry defaults    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session lifecycle + edits            │
//! │  - SectionList: ordered records + dirty flag │
//! │  - SectionEdit: validated field patches      │
//! │  - MediaCoordinator: picker targeting        │
//! │  - PageSession: hydrate / comprehensive save │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ store: component gateway (load / upsert)     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **Session-scoped state**: all editing state lives in one
//!    [`PageSession`] constructed per page view; nothing ambient/global.
//! 2. **Typed edits**: field patches are validated against the target
//!    variant's own field set and rejected when they do not apply.
//! 3. **Dirty discipline**: every successful mutation marks its store
//!    dirty; only a fully successful save clears it; a failed save re-arms
//!    it so nothing is lost and retry is possible.
//! 4. **Loads never fail**: hydration falls back to built-in defaults.

mod edits;
mod list;
mod media;
mod notify;
mod page_state;
mod session;

pub use edits::{CardPatch, EditError, SectionEdit};
pub use list::{Direction, SectionList};
pub use media::{accepts_media, MediaCoordinator, MediaTarget};
pub use notify::{Notifier, TracingNotifier};
pub use page_state::PagePropertiesStore;
pub use session::{PageSession, SessionError, SliderState};

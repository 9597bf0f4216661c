//! The per-page editing session: hydration, mutation entry points, and the
//! save paths that push components back through the gateway.

use std::sync::Arc;

use thiserror::Error;

use pageforge_sections::{
    initial_sections, MediaKind, PageProperties, PagePropertiesPatch, PageStyle, Section,
    SectionKind,
};
use pageforge_store::{
    ComponentGateway, ComponentType, HeroSliderComponent, SectionOrderEntry, SliderComponent,
    StoreError,
};

use crate::edits::{EditError, SectionEdit};
use crate::list::{Direction, SectionList};
use crate::media::MediaCoordinator;
use crate::notify::Notifier;
use crate::page_state::PagePropertiesStore;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error("component payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A standalone slider component with its page-level title, tracked and
/// saved independently of the section list.
#[derive(Debug, Clone)]
pub struct SliderState {
    pub section: Section,
    pub title: String,
    pub title_visible: bool,
    dirty: bool,
    saving: bool,
}

impl SliderState {
    fn new(kind: SectionKind, id: &str, title: &str) -> Self {
        Self {
            section: kind.default_section(id.to_string()),
            title: title.to_string(),
            title_visible: true,
            dirty: false,
            saving: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.dirty = true;
    }

    pub fn set_title_visible(&mut self, visible: bool) {
        self.title_visible = visible;
        self.dirty = true;
    }

    pub fn patch(&mut self, edit: &SectionEdit) -> Result<(), EditError> {
        edit.apply(&mut self.section)?;
        self.dirty = true;
        Ok(())
    }

    pub fn replace(&mut self, section: Section) {
        self.section = section;
        self.dirty = true;
    }
}

/// All editing state for one page view. Constructed per page, hydrated
/// once via [`PageSession::load`], then driven by synchronous mutations
/// and explicit save calls.
pub struct PageSession {
    page_slug: String,
    gateway: ComponentGateway,
    notifier: Arc<dyn Notifier>,
    sections: SectionList,
    page_properties: PagePropertiesStore,
    media: MediaCoordinator,
    hero: Section,
    hero_dirty: bool,
    slider: SliderState,
    hero_slider: SliderState,
    section_order: Vec<SectionOrderEntry>,
    edit_mode: bool,
    loading: bool,
    saving: bool,
}

impl PageSession {
    pub fn new(page_slug: &str, gateway: ComponentGateway, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            page_slug: page_slug.to_string(),
            gateway,
            notifier,
            sections: SectionList::new(Vec::new()),
            page_properties: PagePropertiesStore::default(),
            media: MediaCoordinator::new(),
            hero: SectionKind::Hero.default_section("hero".to_string()),
            hero_dirty: false,
            slider: SliderState::new(SectionKind::Slider, "home-slider", "Home Slider"),
            hero_slider: SliderState::new(
                SectionKind::AdvancedSlider,
                "home-hero-slider",
                "Hero Slider",
            ),
            section_order: default_section_order(),
            edit_mode: false,
            loading: false,
            saving: false,
        }
    }

    pub fn page_slug(&self) -> &str {
        &self.page_slug
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut SectionList {
        &mut self.sections
    }

    pub fn page_properties(&self) -> &PageProperties {
        self.page_properties.properties()
    }

    pub fn page_styles(&self) -> PageStyle {
        self.page_properties.styles()
    }

    pub fn set_page_properties(&mut self, patch: PagePropertiesPatch) {
        self.page_properties.set(patch);
    }

    pub fn hero(&self) -> &Section {
        &self.hero
    }

    pub fn patch_hero(&mut self, edit: &SectionEdit) -> Result<(), EditError> {
        edit.apply(&mut self.hero)?;
        self.hero_dirty = true;
        Ok(())
    }

    pub fn slider(&self) -> &SliderState {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut SliderState {
        &mut self.slider
    }

    pub fn hero_slider(&self) -> &SliderState {
        &self.hero_slider
    }

    pub fn hero_slider_mut(&mut self) -> &mut SliderState {
        &mut self.hero_slider
    }

    pub fn section_order(&self) -> &[SectionOrderEntry] {
        &self.section_order
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Edit mode is a view concern: only admins get the toggle, and
    /// flipping it never touches the data.
    pub fn set_edit_mode(&mut self, on: bool) {
        self.edit_mode = on && self.gateway.is_admin();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Anything unsaved anywhere in the session.
    pub fn is_dirty(&self) -> bool {
        self.sections.is_dirty()
            || self.page_properties.is_dirty()
            || self.hero_dirty
            || self.slider.dirty
            || self.hero_slider.dirty
    }

    // -- media picker ------------------------------------------------------

    pub fn open_media_picker(&mut self, section_index: usize, card_id: Option<String>) {
        self.media.open_for(section_index, card_id);
    }

    pub fn media_picker_target(&self) -> Option<&crate::media::MediaTarget> {
        self.media.target()
    }

    pub fn resolve_media(&mut self, url: &str, kind: MediaKind) -> Result<(), EditError> {
        self.media.resolve(&mut self.sections, url, kind)
    }

    pub fn cancel_media_picker(&mut self) {
        self.media.cancel();
    }

    // -- hydration ---------------------------------------------------------

    /// One gateway load for the whole page. Absent or malformed components
    /// hydrate from built-in defaults; this never fails.
    pub async fn load(&mut self) {
        self.loading = true;
        let map = self.gateway.load_components(&self.page_slug).await;

        let sections = map
            .get_as::<Vec<Section>>(ComponentType::Sections)
            .unwrap_or_else(initial_sections);
        self.sections.hydrate(sections);

        let props = map
            .get_as::<PageProperties>(ComponentType::PageProperties)
            .unwrap_or_default();
        self.page_properties.hydrate(props);

        if let Some(hero) = map.get_as::<Section>(ComponentType::Hero) {
            self.hero = hero;
        }
        self.hero_dirty = false;

        if let Some(slider) = map.get_as::<SliderComponent>(ComponentType::Slider) {
            self.slider.section = slider.slider;
            self.slider.title = slider.slider_title;
            self.slider.title_visible = slider.slider_title_visible;
        }
        self.slider.dirty = false;

        if let Some(hero_slider) = map.get_as::<HeroSliderComponent>(ComponentType::HeroSlider) {
            self.hero_slider.section = hero_slider.hero_slider;
            self.hero_slider.title = hero_slider.hero_slider_title;
            self.hero_slider.title_visible = hero_slider.hero_slider_title_visible;
        }
        self.hero_slider.dirty = false;

        if let Some(order) = map.get_as::<Vec<SectionOrderEntry>>(ComponentType::SectionOrder) {
            self.section_order = order;
        }

        self.loading = false;
        tracing::info!(page_slug = %self.page_slug, sections = self.sections.len(), "page hydrated");
    }

    // -- save paths --------------------------------------------------------

    /// The comprehensive save: `sections`, then `hero`, then
    /// `page_properties`, each awaited in turn. The first failure aborts
    /// the rest; components already written stay written. Dirty flags are
    /// cleared per component only on that component's success, so a failed
    /// save leaves everything unsaved still marked for retry.
    ///
    /// Overlapping calls are not serialized against each other; callers
    /// are expected to disable the save affordance while `is_saving()`.
    pub async fn save_all(&mut self) -> Result<(), SessionError> {
        self.saving = true;
        let result = self.save_all_inner().await;
        self.saving = false;
        result
    }

    async fn save_all_inner(&mut self) -> Result<(), SessionError> {
        let sections = serde_json::to_value(self.sections.sections())?;
        match self
            .gateway
            .save_component(&self.page_slug, ComponentType::Sections, sections)
            .await
        {
            Ok(()) => {
                self.sections.mark_saved();
                self.notifier.success("Sections saved successfully!");
            }
            Err(err) => {
                self.notifier.error("Failed to save sections");
                return Err(err.into());
            }
        }

        let hero = serde_json::to_value(&self.hero)?;
        match self
            .gateway
            .save_component(&self.page_slug, ComponentType::Hero, hero)
            .await
        {
            Ok(()) => {
                self.hero_dirty = false;
                self.notifier.success("Hero section saved successfully!");
            }
            Err(err) => {
                self.notifier.error("Failed to save hero section");
                return Err(err.into());
            }
        }

        let props = serde_json::to_value(self.page_properties.properties())?;
        match self
            .gateway
            .save_component(&self.page_slug, ComponentType::PageProperties, props)
            .await
        {
            Ok(()) => {
                self.page_properties.mark_saved();
                self.notifier.success("Page properties saved successfully!");
            }
            Err(err) => {
                self.notifier.error("Failed to save page properties");
                return Err(err.into());
            }
        }

        Ok(())
    }

    pub async fn save_slider(&mut self) -> Result<(), SessionError> {
        self.slider.saving = true;
        let payload = SliderComponent {
            slider: self.slider.section.clone(),
            slider_title: self.slider.title.clone(),
            slider_title_visible: self.slider.title_visible,
        };
        let result = self
            .save_anonymous(ComponentType::Slider, serde_json::to_value(&payload)?)
            .await;
        self.slider.saving = false;

        match result {
            Ok(()) => {
                self.slider.dirty = false;
                self.notifier.success("Slider saved successfully");
                Ok(())
            }
            Err(err) => {
                self.notifier.error("Failed to save slider");
                Err(err)
            }
        }
    }

    pub async fn save_hero_slider(&mut self) -> Result<(), SessionError> {
        self.hero_slider.saving = true;
        let payload = HeroSliderComponent {
            hero_slider: self.hero_slider.section.clone(),
            hero_slider_title: self.hero_slider.title.clone(),
            hero_slider_title_visible: self.hero_slider.title_visible,
        };
        let result = self
            .save_anonymous(ComponentType::HeroSlider, serde_json::to_value(&payload)?)
            .await;
        self.hero_slider.saving = false;

        match result {
            Ok(()) => {
                self.hero_slider.dirty = false;
                self.notifier.success("Hero slider saved successfully");
                Ok(())
            }
            Err(err) => {
                self.notifier.error("Failed to save hero slider");
                Err(err)
            }
        }
    }

    /// Persist the lightweight ordering component. Failures surface only
    /// through the notifier; nothing else depends on this write.
    pub async fn save_section_order(&mut self) {
        let payload = match serde_json::to_value(&self.section_order) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(%err, "section order could not be encoded");
                self.notifier.error("Failed to save section order");
                return;
            }
        };
        if let Err(err) = self
            .save_anonymous(ComponentType::SectionOrder, payload)
            .await
        {
            tracing::warn!(%err, "section order save failed");
            self.notifier.error("Failed to save section order");
        }
    }

    async fn save_anonymous(
        &self,
        component_type: ComponentType,
        content: serde_json::Value,
    ) -> Result<(), SessionError> {
        self.gateway
            .save_component_anonymous(&self.page_slug, component_type, content)
            .await
            .map_err(SessionError::from)
    }
}

// Mirror `sections()` in move/insert terms so code holding only a session
// does not need to reach through two layers for the common mutations.
impl PageSession {
    pub fn insert_section(&mut self, kind: SectionKind, after: Option<usize>) -> String {
        self.sections.insert(kind, after)
    }

    pub fn remove_section(&mut self, index: usize) {
        self.sections.remove(index);
    }

    pub fn move_section(&mut self, index: usize, direction: Direction) {
        self.sections.move_section(index, direction);
    }

    pub fn set_section_visibility(&mut self, index: usize, visible: bool) {
        self.sections.set_visibility(index, visible);
    }

    pub fn patch_section(&mut self, index: usize, edit: &SectionEdit) -> Result<(), EditError> {
        self.sections.patch(index, edit)
    }

    pub fn duplicate_section(&mut self, index: usize) -> Option<String> {
        self.sections.duplicate(index)
    }
}

/// The ordering the page ships with before anyone has persisted a custom
/// `section_order` component.
fn default_section_order() -> Vec<SectionOrderEntry> {
    ["hero", "cta", "feature-card-grid"]
        .into_iter()
        .map(|kind| SectionOrderEntry { kind: kind.to_string() })
        .collect()
}

//! Page-wide presentation settings with the same dirty/save lifecycle as
//! the section list.

use pageforge_sections::{PageProperties, PagePropertiesPatch, PageStyle};

#[derive(Debug, Default)]
pub struct PagePropertiesStore {
    props: PageProperties,
    dirty: bool,
}

impl PagePropertiesStore {
    pub fn new(props: PageProperties) -> Self {
        Self { props, dirty: false }
    }

    pub fn properties(&self) -> &PageProperties {
        &self.props
    }

    /// Shallow-merge a partial update and mark dirty.
    pub fn set(&mut self, patch: PagePropertiesPatch) {
        self.props.apply(patch);
        self.dirty = true;
    }

    /// Pure derivation of the renderable style record.
    pub fn styles(&self) -> PageStyle {
        self.props.styles()
    }

    pub fn hydrate(&mut self, props: PageProperties) {
        self.props = props;
        self.dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_merges_and_marks_dirty() {
        let mut store = PagePropertiesStore::default();
        assert!(!store.is_dirty());

        store.set(PagePropertiesPatch {
            background_image: Some("/bg.png".to_string()),
            ..Default::default()
        });

        assert!(store.is_dirty());
        assert_eq!(store.properties().background_image, "/bg.png");
        assert_eq!(store.styles().background_size.as_deref(), Some("cover"));
    }

    #[test]
    fn hydrate_clears_dirty() {
        let mut store = PagePropertiesStore::default();
        store.set(PagePropertiesPatch::default());
        assert!(store.is_dirty());

        store.hydrate(PageProperties::default());
        assert!(!store.is_dirty());
    }
}

//! # Section List Store
//!
//! The ordered, mutable collection of section records for the current
//! page, plus the derived dirty flag.
//!
//! Invariants:
//! - section ids are unique within the list at all times
//! - array position is the only ordering signal; ids are stable
//! - every successful mutation marks the list dirty; no-ops do not
//!
//! Hydration performs a one-time migration-on-read: `media-text-left` /
//! `media-text-right` records missing their directional field get it
//! backfilled from the type tag.

use uuid::Uuid;

use pageforge_sections::{MediaPlacement, Section, SectionKind};

use crate::edits::{EditError, SectionEdit};

/// Direction of a single-step reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Default)]
pub struct SectionList {
    sections: Vec<Section>,
    dirty: bool,
}

impl SectionList {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections, dirty: false }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Re-arm the dirty flag, e.g. after a failed save, so the user's
    /// unsaved edits are not lost and a retry is possible.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Replace the list with loaded records and clear the dirty flag.
    pub fn hydrate(&mut self, mut sections: Vec<Section>) {
        for section in &mut sections {
            backfill_media_position(section);
        }
        self.sections = sections;
        self.dirty = false;
    }

    /// Insert a default record of `kind`, immediately after `after` when
    /// that index is in bounds, otherwise appended. Returns the new id.
    pub fn insert(&mut self, kind: SectionKind, after: Option<usize>) -> String {
        let id = self.fresh_id();
        let section = kind.default_section(id.clone());
        self.splice_after(section, after);
        self.dirty = true;
        id
    }

    /// String-tag entry point used by the add-section UI. An unrecognized
    /// tag is a logged no-op, not an error.
    pub fn insert_tag(&mut self, tag: &str, after: Option<usize>) -> Option<String> {
        match SectionKind::parse(tag) {
            Some(kind) => Some(self.insert(kind, after)),
            None => {
                tracing::warn!(tag, "ignoring unrecognized section type");
                None
            }
        }
    }

    /// Delete the record at `index`. Out of bounds is a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.sections.len() {
            self.sections.remove(index);
            self.dirty = true;
        }
    }

    /// Swap the record at `index` with its neighbor. Boundary moves
    /// (first up, last down) are no-ops and leave the dirty flag alone.
    pub fn move_section(&mut self, index: usize, direction: Direction) {
        let len = self.sections.len();
        match direction {
            Direction::Up if index > 0 && index < len => {
                self.sections.swap(index, index - 1);
                self.dirty = true;
            }
            Direction::Down if index + 1 < len => {
                self.sections.swap(index, index + 1);
                self.dirty = true;
            }
            _ => {}
        }
    }

    /// Set the visibility flag on the record at `index`. Idempotent.
    pub fn set_visibility(&mut self, index: usize, visible: bool) {
        if let Some(section) = self.sections.get_mut(index) {
            section.set_visible(visible);
            self.dirty = true;
        }
    }

    /// Apply a typed field edit to the record at `index`.
    pub fn patch(&mut self, index: usize, edit: &SectionEdit) -> Result<(), EditError> {
        let section = self
            .sections
            .get_mut(index)
            .ok_or(EditError::IndexOutOfBounds(index))?;
        edit.apply(section)?;
        self.dirty = true;
        Ok(())
    }

    /// Clone the record at `index` with fresh section and card ids and
    /// splice the clone immediately after it. Returns the clone's id.
    pub fn duplicate(&mut self, index: usize) -> Option<String> {
        let mut clone = self.sections.get(index)?.clone();
        let id = self.fresh_id();
        clone.set_id(id.clone());
        if let Some(cards) = clone.cards_mut() {
            for card in cards {
                card.id = Uuid::new_v4().to_string();
            }
        }
        self.sections.insert(index + 1, clone);
        self.dirty = true;
        Some(id)
    }

    /// Insert a caller-supplied record immediately after `index`. The
    /// record's id is regenerated if it would collide with an existing one.
    pub fn insert_cloned(&mut self, index: usize, mut section: Section) {
        if self.sections.iter().any(|s| s.id() == section.id()) {
            section.set_id(self.fresh_id());
        }
        let at = (index + 1).min(self.sections.len());
        self.sections.insert(at, section);
        self.dirty = true;
    }

    fn splice_after(&mut self, section: Section, after: Option<usize>) {
        match after {
            Some(index) if index < self.sections.len() => {
                self.sections.insert(index + 1, section);
            }
            _ => self.sections.push(section),
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.sections.iter().any(|s| s.id() == id) {
                return id;
            }
        }
    }
}

fn backfill_media_position(section: &mut Section) {
    match section {
        Section::MediaTextLeft(s) if s.media_position.is_none() => {
            s.media_position = Some(MediaPlacement::Left);
        }
        Section::MediaTextRight(s) if s.media_position.is_none() => {
            s.media_position = Some(MediaPlacement::Right);
        }
        _ => {}
    }
}

//! # Media Selection Coordinator
//!
//! Tracks which section (and, for card-bearing sections, which card) is
//! currently awaiting a media URL from the external media picker, and
//! applies the picked URL/kind back onto that target.
//!
//! The target is explicit coordinator state, owned for exactly the span
//! between opening the picker and the pick resolving or being cancelled.

use pageforge_sections::{MediaKind, Section};

use crate::edits::{CardPatch, EditError, SectionEdit};
use crate::list::SectionList;

/// The section (and optionally card) awaiting a media pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaTarget {
    pub section_index: usize,
    pub card_id: Option<String>,
}

#[derive(Debug, Default)]
pub struct MediaCoordinator {
    target: Option<MediaTarget>,
}

impl MediaCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<&MediaTarget> {
        self.target.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// Record the target; the caller signals the external picker to open.
    pub fn open_for(&mut self, section_index: usize, card_id: Option<String>) {
        self.target = Some(MediaTarget { section_index, card_id });
    }

    /// Clear the target without mutation.
    pub fn cancel(&mut self) {
        self.target = None;
    }

    /// Apply the picked media onto the tracked target. The target is
    /// cleared whether or not the patch lands; a successful patch marks
    /// the list dirty (via [`SectionList::patch`]). A rejected patch
    /// mutates nothing and leaves the dirty flag unchanged, like every
    /// other failed edit.
    pub fn resolve(
        &mut self,
        list: &mut SectionList,
        url: &str,
        kind: MediaKind,
    ) -> Result<(), EditError> {
        let target = match self.target.take() {
            Some(target) => target,
            None => return Ok(()),
        };

        let edit = match &target.card_id {
            Some(card_id) => SectionEdit::PatchCard {
                card_id: card_id.clone(),
                patch: CardPatch::media(url, kind),
            },
            None => SectionEdit::SetMedia { url: url.to_string(), kind },
        };
        list.patch(target.section_index, &edit)
    }
}

/// Whether the picker can target this section at all (directly, or via
/// one of its cards).
pub fn accepts_media(section: &Section) -> bool {
    matches!(
        section,
        Section::MediaTextLeft(_)
            | Section::MediaTextRight(_)
            | Section::Text(_)
            | Section::MediaTextColumns(_)
            | Section::Hero(_)
            | Section::HeroResponsive(_)
    ) || section.cards().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageforge_sections::{initial_sections, SectionKind};

    fn list_with_media_text() -> SectionList {
        let mut list = SectionList::new(initial_sections());
        list.insert(SectionKind::MediaTextLeft, None);
        list.mark_saved();
        list
    }

    #[test]
    fn resolve_patches_simple_media_section() {
        let mut list = list_with_media_text();
        let mut coordinator = MediaCoordinator::new();

        coordinator.open_for(3, None);
        coordinator
            .resolve(&mut list, "/img/banner.jpg", MediaKind::Image)
            .unwrap();

        match list.get(3).unwrap() {
            Section::MediaTextLeft(s) => {
                assert_eq!(s.media_url, "/img/banner.jpg");
                assert_eq!(s.media_type, MediaKind::Image);
            }
            _ => unreachable!(),
        }
        assert!(list.is_dirty());
        assert!(!coordinator.is_open());
    }

    #[test]
    fn resolve_patches_only_the_tracked_card() {
        let mut list = SectionList::new(initial_sections());
        let mut coordinator = MediaCoordinator::new();

        coordinator.open_for(2, Some("card-3".to_string()));
        coordinator
            .resolve(&mut list, "/vid/demo.mp4", MediaKind::Video)
            .unwrap();

        let cards = list.get(2).unwrap().cards().unwrap();
        assert_eq!(cards[0].media_url, "");
        assert_eq!(cards[1].media_url, "");
        assert_eq!(cards[2].media_url, "/vid/demo.mp4");
        assert_eq!(cards[2].media_type, MediaKind::Video);
    }

    #[test]
    fn cancel_clears_target_without_mutation() {
        let mut list = list_with_media_text();
        let mut coordinator = MediaCoordinator::new();

        coordinator.open_for(3, None);
        coordinator.cancel();
        assert!(!coordinator.is_open());

        coordinator
            .resolve(&mut list, "/ignored.jpg", MediaKind::Image)
            .unwrap();
        assert!(!list.is_dirty());
    }

    #[test]
    fn resolve_against_non_media_section_is_rejected_and_target_cleared() {
        let mut list = SectionList::new(initial_sections());
        list.insert(SectionKind::Divider, None);
        list.mark_saved();
        let mut coordinator = MediaCoordinator::new();

        coordinator.open_for(3, None);
        let result = coordinator.resolve(&mut list, "/img.jpg", MediaKind::Image);

        assert!(result.is_err());
        assert!(!coordinator.is_open());
        assert!(!list.is_dirty());
    }

    #[test]
    fn accepts_media_covers_card_bearing_sections() {
        let grid = SectionKind::FeatureCardGrid.default_section("g".to_string());
        assert!(accepts_media(&grid));
        let divider = SectionKind::Divider.default_section("d".to_string());
        assert!(!accepts_media(&divider));
    }
}
